use core::fmt;
use core::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use procura_core::{DomainError, ValueObject};

/// April-to-March accounting year, identified by the calendar year it starts in.
///
/// Rendered as two two-digit tags, e.g. `24-25` for April 2024 to March 2025.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FinancialYear {
    start_year: i32,
}

impl ValueObject for FinancialYear {}

impl FinancialYear {
    pub fn starting_in(start_year: i32) -> Self {
        Self { start_year }
    }

    /// The financial year a date falls in (January to March belong to the
    /// year that started the previous April).
    pub fn containing(date: NaiveDate) -> Self {
        let start_year = if date.month() <= 3 {
            date.year() - 1
        } else {
            date.year()
        };
        Self { start_year }
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.start_year + 1
    }
}

impl fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}-{:02}",
            self.start_year.rem_euclid(100),
            self.end_year().rem_euclid(100)
        )
    }
}

impl FromStr for FinancialYear {
    type Err = DomainError;

    /// Parses a `YY-YY` tag. The century is taken as 2000.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::invalid_po_number(format!("bad financial year tag `{s}`"));

        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        let is_tag = |t: &str| t.len() == 2 && t.bytes().all(|b| b.is_ascii_digit());
        if !is_tag(start) || !is_tag(end) {
            return Err(invalid());
        }
        let start: i32 = start.parse().map_err(|_| invalid())?;
        let end: i32 = end.parse().map_err(|_| invalid())?;
        if (start + 1) % 100 != end {
            return Err(invalid());
        }

        Ok(Self::starting_in(2000 + start))
    }
}

impl TryFrom<String> for FinancialYear {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FinancialYear> for String {
    fn from(value: FinancialYear) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn january_to_march_belong_to_previous_start_year() {
        for month in 1..=3 {
            let fy = FinancialYear::containing(date(2025, month, 15));
            assert_eq!(fy.start_year(), 2024);
            assert_eq!(fy.to_string(), "24-25");
        }
    }

    #[test]
    fn april_onwards_start_the_current_year() {
        assert_eq!(FinancialYear::containing(date(2025, 4, 1)).to_string(), "25-26");
        assert_eq!(FinancialYear::containing(date(2025, 12, 31)).to_string(), "25-26");
        assert_eq!(FinancialYear::containing(date(2025, 3, 31)).to_string(), "24-25");
    }

    #[test]
    fn century_boundary_is_zero_padded() {
        assert_eq!(FinancialYear::starting_in(2099).to_string(), "99-00");
        assert_eq!(FinancialYear::starting_in(2005).to_string(), "05-06");
    }

    #[test]
    fn parses_tags() {
        assert_eq!("24-25".parse::<FinancialYear>().unwrap().start_year(), 2024);
        assert_eq!("99-00".parse::<FinancialYear>().unwrap().end_year(), 2100);
        assert!("24-26".parse::<FinancialYear>().is_err());
        assert!("2024-25".parse::<FinancialYear>().is_err());
        assert!("ab-cd".parse::<FinancialYear>().is_err());
        assert!("2425".parse::<FinancialYear>().is_err());
    }

    #[test]
    fn serializes_as_tag() {
        let fy = FinancialYear::starting_in(2024);
        assert_eq!(serde_json::to_string(&fy).unwrap(), "\"24-25\"");
        let back: FinancialYear = serde_json::from_str("\"24-25\"").unwrap();
        assert_eq!(back, fy);
        assert!(serde_json::from_str::<FinancialYear>("\"24-27\"").is_err());
    }
}
