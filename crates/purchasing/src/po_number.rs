//! Structured purchase-order numbers.
//!
//! PO numbers travel as `PREFIX/FY/SEQ[-REV]` strings (e.g.
//! `STMT/STORES/24-25/7-2`). They are parsed into [`PoNumber`] at the boundary
//! and only turned back into strings for display and storage.

use core::fmt;
use core::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use procura_core::{DomainError, ValueObject};

use crate::financial_year::FinancialYear;

static PO_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<prefix>.+)/(?P<fy>\d{2}-\d{2})/(?P<seq>\d+)(?:-(?P<rev>\d+))?$")
        .expect("static PO number pattern")
});

/// A parsed PO number.
///
/// `revision == 0` is the original issue and renders without a suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PoNumber {
    prefix: String,
    fy: FinancialYear,
    seq: u64,
    revision: u64,
}

impl ValueObject for PoNumber {}

impl PoNumber {
    /// A fresh, unrevised PO number.
    pub fn new(prefix: impl Into<String>, fy: FinancialYear, seq: u64) -> Self {
        Self {
            prefix: prefix.into(),
            fy,
            seq,
            revision: 0,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn financial_year(&self) -> FinancialYear {
        self.fy
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_revision(&self) -> bool {
        self.revision > 0
    }

    /// `PREFIX/FY/SEQ`, shared by the original and all of its revisions.
    pub fn base_key(&self) -> String {
        format!("{}/{}/{}", self.prefix, self.fy, self.seq)
    }

    pub fn with_revision(&self, revision: u64) -> Self {
        Self {
            revision,
            ..self.clone()
        }
    }

    pub fn unrevised(&self) -> Self {
        self.with_revision(0)
    }

}

impl fmt::Display for PoNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.prefix, self.fy, self.seq)?;
        if self.revision > 0 {
            write!(f, "-{}", self.revision)?;
        }
        Ok(())
    }
}

impl FromStr for PoNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = PO_NUMBER
            .captures(s)
            .ok_or_else(|| DomainError::invalid_po_number(format!("`{s}` is not PREFIX/FY/SEQ[-REV]")))?;

        let fy: FinancialYear = caps["fy"].parse()?;
        let seq: u64 = caps["seq"]
            .parse()
            .map_err(|_| DomainError::invalid_po_number(format!("sequence out of range in `{s}`")))?;
        if seq == 0 {
            return Err(DomainError::invalid_po_number(format!("sequence must start at 1 in `{s}`")));
        }

        let revision = match caps.name("rev") {
            Some(rev) => {
                let rev: u64 = rev.as_str().parse().map_err(|_| {
                    DomainError::invalid_po_number(format!("revision out of range in `{s}`"))
                })?;
                if rev == 0 {
                    return Err(DomainError::invalid_po_number(format!(
                        "explicit revision must be at least 1 in `{s}`"
                    )));
                }
                rev
            }
            None => 0,
        };

        Ok(Self {
            prefix: caps["prefix"].to_string(),
            fy,
            seq,
            revision,
        })
    }
}

impl TryFrom<String> for PoNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PoNumber> for String {
    fn from(value: PoNumber) -> Self {
        value.to_string()
    }
}

/// Row shape of previously issued POs as returned by the `/po` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoSummary {
    pub po_number: String,
}

impl AsRef<str> for PoSummary {
    fn as_ref(&self) -> &str {
        &self.po_number
    }
}

/// Loose split of any PO-like string into base key and revision.
///
/// The last `/` segment is cut at its first `-`: what precedes it stays in the
/// base key, what follows is the revision (0 when absent or not a number).
/// Unlike [`PoNumber::from_str`] this accepts anything, so callers that must
/// never fail can still group entries by base key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionKey {
    base: String,
    revision: u64,
}

impl RevisionKey {
    pub fn split(raw: &str) -> Self {
        let (head, last) = match raw.rsplit_once('/') {
            Some((head, last)) => (Some(head), last),
            None => (None, raw),
        };

        let (main, revision) = match last.split_once('-') {
            Some((main, rev)) => match rev.parse::<u64>() {
                Ok(revision) => (main, revision),
                Err(_) => {
                    tracing::debug!(po_number = raw, suffix = rev, "unreadable revision suffix counted as 0");
                    (main, 0)
                }
            },
            None => (last, 0),
        };

        let base = match head {
            Some(head) => format!("{head}/{main}"),
            None => main.to_string(),
        };

        Self { base, revision }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}
