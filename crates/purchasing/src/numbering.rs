//! Next PO number for "create" mode.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::config::PoNumberingConfig;
use crate::financial_year::FinancialYear;
use crate::po_number::PoNumber;

/// Trailing `/SEQ` with an optional `-REV`, anchored at the end.
static TRAILING_SEQ: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(\d+)(?:-\d+)?$").expect("static sequence pattern"));

/// Next unused PO number in the financial year containing `reference_date`,
/// using the default prefix.
///
/// The reference date is always passed in; callers wanting "today" supply it.
pub fn next_po_number<S: AsRef<str>>(existing: &[S], reference_date: NaiveDate) -> PoNumber {
    next_po_number_with(&PoNumberingConfig::default(), existing, reference_date)
}

/// Like [`next_po_number`] with an explicit configuration.
///
/// Every entry containing `/{fy}/` contributes its sequence (revisions count
/// through their base sequence). Entries without a trailing sequence are
/// ignored; when none remain, numbering restarts at 1.
pub fn next_po_number_with<S: AsRef<str>>(
    config: &PoNumberingConfig,
    existing: &[S],
    reference_date: NaiveDate,
) -> PoNumber {
    let fy = FinancialYear::containing(reference_date);
    let marker = format!("/{fy}/");

    let mut ignored = 0usize;
    let latest = existing
        .iter()
        .map(AsRef::as_ref)
        .filter(|po| po.contains(&marker))
        .filter_map(|po| {
            let seq = TRAILING_SEQ
                .captures(po)
                .and_then(|caps| caps[1].parse::<u64>().ok());
            if seq.is_none() {
                ignored += 1;
            }
            seq
        })
        .max();

    if ignored > 0 {
        tracing::debug!(%fy, ignored, "skipped PO numbers without a trailing sequence");
    }

    let next = latest.map_or(1, |seq| seq.saturating_add(1));
    let po = PoNumber::new(config.prefix(), fy, next);
    tracing::debug!(po_number = %po, "derived next PO number");
    po
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_list_starts_at_one() {
        let none: [&str; 0] = [];
        assert_eq!(
            next_po_number(&none, date(2024, 6, 1)).to_string(),
            "STMT/STORES/24-25/1"
        );
    }

    #[test]
    fn continues_after_highest_sequence_in_year() {
        let existing = [
            "STMT/STORES/24-25/3",
            "STMT/STORES/24-25/11",
            "STMT/STORES/24-25/11",
            "STMT/STORES/24-25/4-2",
            "STMT/STORES/23-24/40",
        ];
        assert_eq!(
            next_po_number(&existing, date(2024, 9, 10)).to_string(),
            "STMT/STORES/24-25/12"
        );
    }

    #[test]
    fn revised_entries_count_through_their_base_sequence() {
        let existing = ["STMT/STORES/24-25/2", "STMT/STORES/24-25/5-3"];
        assert_eq!(next_po_number(&existing, date(2024, 9, 10)).seq(), 6);
    }

    #[test]
    fn reference_date_selects_financial_year() {
        let existing = ["STMT/STORES/24-25/9", "STMT/STORES/25-26/2"];
        assert_eq!(
            next_po_number(&existing, date(2025, 3, 31)).to_string(),
            "STMT/STORES/24-25/10"
        );
        assert_eq!(
            next_po_number(&existing, date(2025, 4, 1)).to_string(),
            "STMT/STORES/25-26/3"
        );
    }

    #[test]
    fn malformed_entries_are_ignored() {
        let existing = [
            "garbage",
            "STMT/STORES/24-25/",
            "STMT/STORES/24-25/draft",
            "STMT/STORES/24-25/99999999999999999999999",
            "STMT/STORES/24-25/4",
        ];
        assert_eq!(next_po_number(&existing, date(2024, 5, 1)).seq(), 5);
    }

    #[test]
    fn custom_prefix_is_applied() {
        let config = PoNumberingConfig::with_prefix("ACME/PURCHASE").unwrap();
        let existing = vec![String::from("ACME/PURCHASE/24-25/1")];
        assert_eq!(
            next_po_number_with(&config, &existing, date(2024, 5, 1)).to_string(),
            "ACME/PURCHASE/24-25/2"
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the derived sequence is one past the highest sequence
        /// issued in the same financial year.
        #[test]
        fn next_sequence_is_max_plus_one(
            seqs in prop::collection::vec((1u64..100_000u64, 0u32..5u32), 1..20)
        ) {
            let existing: Vec<String> = seqs
                .iter()
                .map(|(seq, rev)| {
                    if *rev == 0 {
                        format!("STMT/STORES/24-25/{seq}")
                    } else {
                        format!("STMT/STORES/24-25/{seq}-{rev}")
                    }
                })
                .collect();

            let max = seqs.iter().map(|(seq, _)| *seq).max().unwrap();
            let po = next_po_number(&existing, date(2024, 11, 20));
            prop_assert_eq!(po.seq(), max + 1);
            prop_assert!(!po.is_revision());
        }
    }
}
