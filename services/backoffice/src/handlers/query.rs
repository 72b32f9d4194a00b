use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use bistro_domain::date_range::{DateRange, RangePreset};
use bistro_domain::pagination::PageRequest;
use bistro_domain::party::PartyKind;

use crate::error::BackofficeError;

/// Query string accepted by every list route. Unused keys are ignored.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub range: Option<RangePreset>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub kind: Option<PartyKind>,
}

impl ListQuery {
    pub fn parse(raw: Option<&str>) -> Result<Self, BackofficeError> {
        raw.filter(|q| !q.is_empty())
            .map(serde_qs::from_str)
            .transpose()
            .map_err(|e| BackofficeError::validation(format!("invalid query string: {e}")))
            .map(Option::unwrap_or_default)
    }

    pub fn page(&self) -> PageRequest {
        PageRequest::new(self.per_page, self.page)
    }

    /// Bill-date filter. Bare `from`/`to` without `range` mean a custom range.
    pub fn date_range(&self, today: NaiveDate) -> Result<Option<DateRange>, BackofficeError> {
        let preset = match self.range {
            Some(preset) => preset,
            None if self.from.is_some() || self.to.is_some() => RangePreset::Custom,
            None => return Ok(None),
        };
        Ok(Some(DateRange::resolve(preset, self.from, self.to, today)?))
    }

    pub fn date_range_today(&self) -> Result<Option<DateRange>, BackofficeError> {
        self.date_range(Utc::now().date_naive())
    }
}
