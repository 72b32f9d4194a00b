//! Bill-date range filters used by report listings.

use chrono::{Datelike, Days, NaiveDate};
use serde::Deserialize;

/// Named range relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePreset {
    Today,
    /// Monday of the current week through today.
    Week,
    /// First of the current month through today.
    Month,
    /// January 1st through today.
    Year,
    /// Explicit `from` / `to`.
    Custom,
}

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("custom range requires both from and to")]
    MissingBound,
    #[error("range start {from} is after end {to}")]
    Inverted { from: NaiveDate, to: NaiveDate },
}

impl DateRange {
    pub fn resolve(
        preset: RangePreset,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Self, RangeError> {
        let from = match preset {
            RangePreset::Today => today,
            RangePreset::Week => {
                let back = u64::from(today.weekday().num_days_from_monday());
                today.checked_sub_days(Days::new(back)).unwrap_or(today)
            }
            RangePreset::Month => today.with_day(1).unwrap_or(today),
            RangePreset::Year => today.with_ordinal(1).unwrap_or(today),
            RangePreset::Custom => {
                let (from, to) = from.zip(to).ok_or(RangeError::MissingBound)?;
                if from > to {
                    return Err(RangeError::Inverted { from, to });
                }
                return Ok(Self { from, to });
            }
        };
        Ok(Self { from, to: today })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}
