use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ScaffoldError;

/// Puzzle day identifier.
///
/// Always rendered in canonical decimal form, so `"05"` and `"5"` name the
/// same directory and source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Day(u32);

impl Day {
    pub const fn new(day: u32) -> Self {
        Self(day)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Name of the solution module for this day, e.g. `day5`.
    pub fn module_name(self) -> String {
        format!("day{}", self.0)
    }
}

impl From<u32> for Day {
    fn from(day: u32) -> Self {
        Self(day)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Day {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ScaffoldError::invalid_argument(s, "day must not be empty"));
        }
        if trimmed.starts_with('-') {
            return Err(ScaffoldError::invalid_argument(
                s,
                "day must be a non-negative integer",
            ));
        }
        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|e| ScaffoldError::invalid_argument(s, e.to_string()))
    }
}
