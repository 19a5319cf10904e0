use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("malformed time token '{token}': expected YYYY-MM")]
pub struct TimeTokenError {
    pub token: String,
}

/// A calendar month in the fact store's time dimension.
///
/// Wire format is a zero-padded "YYYY-MM" token, so chronological order
/// and lexicographic order of the serialized form coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Encoding used for SQL membership tests against `year * 100 + month`.
    pub fn sql_key(&self) -> i32 {
        self.year * 100 + self.month as i32
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = TimeTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TimeTokenError {
            token: s.to_string(),
        };

        let (year, month) = s.split_once('-').ok_or_else(err)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(err());
        }

        let year: i32 = year.parse().map_err(|_| err())?;
        let month: u32 = month.parse().map_err(|_| err())?;
        if !(1..=12).contains(&month) {
            return Err(err());
        }

        Ok(Self { year, month })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_round_trips() {
        let ym: YearMonth = "2024-03".parse().unwrap();
        assert_eq!(ym, YearMonth::new(2024, 3));
        assert_eq!(ym.to_string(), "2024-03");
        assert_eq!(ym.sql_key(), 202403);
    }

    #[test]
    fn rejects_malformed_tokens() {
        for bad in ["2024", "2024-3", "24-03", "2024-13", "2024-00", "2024-xx", ""] {
            assert!(bad.parse::<YearMonth>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn chronological_order_matches_token_order() {
        let a = YearMonth::new(2023, 12);
        let b = YearMonth::new(2024, 1);
        assert!(a < b);
        assert!(a.to_string() < b.to_string());
    }
}
