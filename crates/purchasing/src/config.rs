//! PO numbering configuration.

use std::env::VarError;

use procura_core::{DomainError, DomainResult};

/// Prefix used when nothing is configured.
pub const DEFAULT_PO_PREFIX: &str = "STMT/STORES";

/// Environment variable overriding the PO prefix.
pub const PO_PREFIX_ENV: &str = "PROCURA_PO_PREFIX";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoNumberingConfig {
    prefix: String,
}

impl Default for PoNumberingConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PO_PREFIX.to_string(),
        }
    }
}

impl PoNumberingConfig {
    /// The prefix may contain `/` between segments but never `-`, which is
    /// reserved for the revision suffix.
    pub fn with_prefix(prefix: impl Into<String>) -> DomainResult<Self> {
        let prefix = prefix.into();
        if prefix.trim().is_empty() {
            return Err(DomainError::config("PO prefix must not be empty"));
        }
        if prefix.starts_with('/') || prefix.ends_with('/') {
            return Err(DomainError::config(format!(
                "PO prefix `{prefix}` must not start or end with `/`"
            )));
        }
        if prefix.contains('-') || prefix.chars().any(char::is_whitespace) {
            return Err(DomainError::config(format!(
                "PO prefix `{prefix}` must not contain `-` or whitespace"
            )));
        }
        Ok(Self { prefix })
    }

    /// Read [`PO_PREFIX_ENV`], falling back to [`DEFAULT_PO_PREFIX`] when unset.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_var(std::env::var(PO_PREFIX_ENV))
    }

    fn from_var(value: Result<String, VarError>) -> DomainResult<Self> {
        match value {
            Ok(prefix) => Self::with_prefix(prefix),
            Err(VarError::NotPresent) => {
                tracing::debug!(prefix = DEFAULT_PO_PREFIX, "{PO_PREFIX_ENV} not set; using default");
                Ok(Self::default())
            }
            Err(VarError::NotUnicode(_)) => Err(DomainError::config(format!(
                "{PO_PREFIX_ENV} is not valid unicode"
            ))),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}
