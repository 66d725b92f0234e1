//! PO draft as edited in the "Create PO" form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use procura_core::{DomainError, DomainResult};

use crate::config::PoNumberingConfig;
use crate::numbering::next_po_number_with;
use crate::revision::next_revision;
use crate::totals::{LineItem, PoTotals};

/// Whether the form issues a new PO or re-issues an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum PoNumberMode {
    Create,
    Revise { selected: String },
}

/// PO number the form should display for `mode`.
pub fn resolve_po_number<S: AsRef<str>>(
    mode: &PoNumberMode,
    existing: &[S],
    reference_date: NaiveDate,
    config: &PoNumberingConfig,
) -> String {
    match mode {
        PoNumberMode::Create => next_po_number_with(config, existing, reference_date).to_string(),
        PoNumberMode::Revise { selected } => next_revision(selected, existing),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoDraft {
    pub po_number: String,
    pub lines: Vec<LineItem>,
}

impl PoDraft {
    pub fn new(po_number: impl Into<String>) -> Self {
        Self {
            po_number: po_number.into(),
            lines: Vec::new(),
        }
    }

    pub fn with_line(mut self, line: LineItem) -> Self {
        self.lines.push(line);
        self
    }

    pub fn totals(&self) -> PoTotals {
        PoTotals::from_lines(&self.lines)
    }

    /// Submission check: at least one line, every line within form ranges.
    pub fn validate(&self) -> DomainResult<()> {
        if self.po_number.trim().is_empty() {
            return Err(DomainError::validation("po number must be set"));
        }
        if self.lines.is_empty() {
            return Err(DomainError::invariant("purchase order needs at least one line"));
        }
        for (idx, line) in self.lines.iter().enumerate() {
            line.validate().map_err(|e| match e {
                DomainError::Validation(msg) => {
                    DomainError::validation(format!("line {}: {msg}", idx + 1))
                }
                other => other,
            })?;
        }
        Ok(())
    }
}
