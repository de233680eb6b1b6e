use std::{fmt, str::FromStr};

use anyhow::{Error, Result};

/// Number of trading days to fetch, always within `MIN..=MAX`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DayCount(u16);

impl DayCount {
    pub const MIN: u16 = 1;
    pub const MAX: u16 = 365;
    pub const DEFAULT: u16 = 5;

    pub fn new(days: u16) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&days) {
            return Err(Error::msg(format!(
                "Day count must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                days
            )));
        }
        Ok(Self(days))
    }

    pub fn get(&self) -> u16 {
        self.0
    }

    pub fn increase(&self, step: u16) -> Self {
        Self(self.0.saturating_add(step).min(Self::MAX))
    }

    pub fn decrease(&self, step: u16) -> Self {
        Self(self.0.saturating_sub(step).max(Self::MIN))
    }

    pub fn min() -> Self {
        Self(Self::MIN)
    }

    pub fn max() -> Self {
        Self(Self::MAX)
    }
}

impl Default for DayCount {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl FromStr for DayCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let days = s
            .trim()
            .parse::<u16>()
            .map_err(|e| Error::msg(format!("Invalid day count '{}': {}", s, e)))?;
        Self::new(days)
    }
}

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
