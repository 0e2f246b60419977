//! List query parameters shared by the collection endpoints.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use super::validation::non_blank;
use crate::domain::Error;
use crate::domain::analytics::AnalyticsScope;
use crate::domain::filter::{DateRange, RecordFilter};

/// Optional filters accepted by list endpoints. Blank values are ignored.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Exact status label, e.g. `active`.
    pub status: Option<String>,
    /// Exact type label (creatives, advertisers by industry).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Exact deal type label, e.g. `PMP`.
    pub deal_type: Option<String>,
    /// Exact tag type label, e.g. `GPT`.
    pub tag_type: Option<String>,
    /// Owning advertiser id.
    pub advertiser_id: Option<String>,
    /// Case-insensitive substring over the record's name fields.
    pub search: Option<String>,
    /// Inclusive lower date bound, `YYYY-MM-DD` or RFC 3339.
    pub start_date: Option<String>,
    /// Inclusive upper date bound, `YYYY-MM-DD` or RFC 3339.
    pub end_date: Option<String>,
}

impl ListQuery {
    /// Convert into a record filter, rejecting malformed dates.
    pub fn into_filter(self) -> Result<RecordFilter, Error> {
        let dates = date_range(self.start_date, self.end_date)?;
        let kind = [self.kind, self.deal_type, self.tag_type]
            .into_iter()
            .find_map(non_blank);
        Ok(RecordFilter {
            status: non_blank(self.status),
            kind,
            advertiser_id: non_blank(self.advertiser_id),
            search: non_blank(self.search),
            dates,
        })
    }

    /// Scope for the analytics report.
    pub fn into_scope(self) -> Result<AnalyticsScope, Error> {
        Ok(AnalyticsScope {
            dates: date_range(self.start_date, self.end_date)?,
            advertiser_id: non_blank(self.advertiser_id),
        })
    }
}

fn date_range(start: Option<String>, end: Option<String>) -> Result<DateRange, Error> {
    Ok(DateRange::new(
        parse_date("startDate", start)?,
        parse_date("endDate", end)?,
    ))
}

fn parse_date(field: &str, raw: Option<String>) -> Result<Option<NaiveDate>, Error> {
    let Some(raw) = non_blank(raw) else {
        return Ok(None);
    };
    let value = raw.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|instant| instant.date_naive())
        })
        .map(Some)
        .ok_or_else(|| {
            Error::invalid_request(format!("Invalid {field}: expected an ISO 8601 date"))
                .with_details(json!({ "field": field, "value": value, "code": "invalid_date" }))
        })
}
