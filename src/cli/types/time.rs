//! Time-related types for fantasy football seasons.

use crate::error::{FflError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Weeks 1 through `self`, inclusive.
    pub fn through(self) -> impl Iterator<Item = Week> {
        (1..=self.0).map(Week)
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self> {
        let week: u16 = s.trim().parse()?;
        if week == 0 {
            return Err(FflError::InvalidMatchup {
                week,
                reason: "weeks start at 1".to_string(),
            });
        }
        Ok(Self(week))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_from_str() {
        assert_eq!("3".parse::<Week>().unwrap(), Week::new(3));
        assert_eq!(" 17 ".parse::<Week>().unwrap().as_u16(), 17);
        assert!(matches!("x".parse::<Week>(), Err(FflError::InvalidNumber(_))));
        assert!(matches!(
            "0".parse::<Week>(),
            Err(FflError::InvalidMatchup { week: 0, .. })
        ));
    }

    #[test]
    fn test_week_through() {
        let weeks: Vec<u16> = Week::new(3).through().map(|w| w.as_u16()).collect();
        assert_eq!(weeks, vec![1, 2, 3]);
        assert_eq!(Week::new(0).through().count(), 0);
    }

    #[test]
    fn test_week_default_and_display() {
        assert_eq!(Week::default().to_string(), "1");
    }
}
