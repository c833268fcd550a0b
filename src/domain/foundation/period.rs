//! Period value object - the survey round a snapshot belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A survey period: the initial assessment or a numbered weekly check-in.
///
/// Ordering places `Initial` before every week; weeks order numerically.
/// Serialized as the string `"initial"` or the bare week number.
///
/// Weeks are numbered from 1. Build weekly periods from outside input with
/// [`Period::week`] or `FromStr`, which reject week 0; the `Week` variant
/// itself does not check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "PeriodRepr", into = "PeriodRepr")]
pub enum Period {
    Initial,
    Week(u32),
}

impl Period {
    /// Creates a weekly period, returning error for week 0.
    pub fn week(number: u32) -> Result<Self, ValidationError> {
        if number == 0 {
            return Err(ValidationError::out_of_range(
                "week",
                1,
                i32::MAX,
                0,
            ));
        }
        Ok(Period::Week(number))
    }

    /// Returns a stable machine label (`initial`, `week-3`).
    pub fn label(&self) -> String {
        match self {
            Period::Initial => "initial".to_string(),
            Period::Week(n) => format!("week-{}", n),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Initial => write!(f, "Initial"),
            Period::Week(n) => write!(f, "Week {}", n),
        }
    }
}

impl FromStr for Period {
    type Err = ValidationError;

    /// Parses `initial`, a bare week number, or a `week-N` label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("initial") {
            return Ok(Period::Initial);
        }
        let number = trimmed
            .strip_prefix("week-")
            .unwrap_or(trimmed)
            .parse::<u32>()
            .map_err(|_| {
                ValidationError::invalid_format(
                    "period",
                    format!("expected \"initial\" or a week number, got \"{}\"", s),
                )
            })?;
        Period::week(number)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PeriodRepr {
    Week(u32),
    Label(String),
}

impl TryFrom<PeriodRepr> for Period {
    type Error = ValidationError;

    fn try_from(repr: PeriodRepr) -> Result<Self, Self::Error> {
        match repr {
            PeriodRepr::Week(n) => Period::week(n),
            PeriodRepr::Label(label) if label.eq_ignore_ascii_case("initial") => {
                Ok(Period::Initial)
            }
            PeriodRepr::Label(label) => Err(ValidationError::invalid_format(
                "period",
                format!("expected \"initial\" or a week number, got \"{}\"", label),
            )),
        }
    }
}

impl From<Period> for PeriodRepr {
    fn from(period: Period) -> Self {
        match period {
            Period::Initial => PeriodRepr::Label("initial".to_string()),
            Period::Week(n) => PeriodRepr::Week(n),
        }
    }
}
