//! Next revision for a PO selected for editing.

use crate::po_number::RevisionKey;

/// Next revision of `po_number` given every PO issued so far.
///
/// `po_number` may itself be a revision; its suffix is stripped to find the
/// base key. Among `all_pos` only entries with the same base key count, the
/// unsuffixed original as revision 0. Works on arbitrary strings and never
/// fails; with no matching entries the result is revision 1.
pub fn next_revision<S: AsRef<str>>(po_number: &str, all_pos: &[S]) -> String {
    let selected = RevisionKey::split(po_number);

    let latest = all_pos
        .iter()
        .map(|po| RevisionKey::split(po.as_ref()))
        .filter(|key| key.base() == selected.base())
        .map(|key| key.revision())
        .max()
        .unwrap_or(0);

    let next = format!("{}-{}", selected.base(), latest.saturating_add(1));
    tracing::debug!(selected = po_number, latest, next = %next, "derived next PO revision");
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::po_number::PoSummary;
    use proptest::prelude::*;

    fn summaries(numbers: &[&str]) -> Vec<PoSummary> {
        numbers
            .iter()
            .map(|n| PoSummary {
                po_number: n.to_string(),
            })
            .collect()
    }

    #[test]
    fn first_revision_without_history() {
        let none: [&str; 0] = [];
        assert_eq!(next_revision("STMT/STORES/24-25/7", &none), "STMT/STORES/24-25/7-1");
    }

    #[test]
    fn revising_a_revision_uses_highest_existing() {
        let all = summaries(&["STMT/STORES/24-25/7", "STMT/STORES/24-25/7-1"]);
        assert_eq!(next_revision("STMT/STORES/24-25/7-2", &all), "STMT/STORES/24-25/7-2");
    }

    #[test]
    fn other_base_keys_do_not_count() {
        let all = summaries(&[
            "STMT/STORES/24-25/7",
            "STMT/STORES/24-25/70-4",
            "STMT/STORES/23-24/7-6",
            "STMT/STORES/24-25/8-3",
        ]);
        assert_eq!(next_revision("STMT/STORES/24-25/7", &all), "STMT/STORES/24-25/7-1");
    }

    #[test]
    fn gaps_in_history_do_not_matter() {
        let all = summaries(&["STMT/STORES/24-25/7", "STMT/STORES/24-25/7-4"]);
        assert_eq!(next_revision("STMT/STORES/24-25/7-1", &all), "STMT/STORES/24-25/7-5");
    }

    #[test]
    fn revisions_beyond_u32_keep_increasing() {
        let all = ["STMT/STORES/24-25/7", "STMT/STORES/24-25/7-4294967296"];
        assert_eq!(
            next_revision("STMT/STORES/24-25/7", &all),
            "STMT/STORES/24-25/7-4294967297"
        );
    }

    #[test]
    fn arbitrary_strings_never_fail() {
        let all = ["", "-", "///", "x-y"];
        assert_eq!(next_revision("x", &all), "x-1");
        assert_eq!(next_revision("", &all), "-1");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: feeding each result back in yields 1, 2, 3, ... .
        #[test]
        fn repeated_revisions_increase_by_one(seq in 1u64..10_000u64, rounds in 1usize..15usize) {
            let original = format!("STMT/STORES/25-26/{seq}");
            let mut all = vec![original.clone()];
            let mut selected = original.clone();

            for expected in 1..=rounds {
                let next = next_revision(&selected, &all);
                prop_assert_eq!(&next, &format!("{original}-{expected}"));
                all.push(next.clone());
                selected = next;
            }
        }
    }
}
