use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

use super::entities::ProfileValidationError;

/// Work-experience body as sent by the client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperienceDraft {
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub role_description: Option<String>,
}

/// Validated work-experience fields ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkExperienceInput {
    pub company_name: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub role_description: Option<String>,
}

impl TryFrom<WorkExperienceDraft> for WorkExperienceInput {
    type Error = ProfileValidationError;

    fn try_from(draft: WorkExperienceDraft) -> Result<Self, Self::Error> {
        let company_name = draft
            .company_name
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| ProfileValidationError("companyName is required".to_string()))?;

        let start_date = match non_blank(draft.start_date) {
            Some(raw) => parse_date("startDate", &raw)?,
            None => {
                return Err(ProfileValidationError(
                    "startDate is required".to_string(),
                ))
            }
        };

        let end_date = non_blank(draft.end_date)
            .map(|raw| parse_date("endDate", &raw))
            .transpose()?;

        if let Some(end) = end_date {
            if end < start_date {
                return Err(ProfileValidationError(
                    "endDate must not be before startDate".to_string(),
                ));
            }
        }

        Ok(Self {
            company_name,
            location: non_blank(draft.location),
            start_date,
            end_date,
            role_description: non_blank(draft.role_description),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, ProfileValidationError> {
    let raw = raw.trim();

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| ProfileValidationError(format!("{} is not a valid date: {}", field, raw)))
}
