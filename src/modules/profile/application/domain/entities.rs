use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// Closed vocabularies
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Junior,
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Entry,
        ExperienceLevel::Junior,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
        }
    }

    /// "entry, junior, mid, senior"
    pub fn allowed_values() -> String {
        Self::ALL.map(|l| l.as_str()).join(", ")
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanySize {
    Startup,
    Small,
    Medium,
    Large,
    Enterprise,
}

impl CompanySize {
    pub const ALL: [CompanySize; 5] = [
        CompanySize::Startup,
        CompanySize::Small,
        CompanySize::Medium,
        CompanySize::Large,
        CompanySize::Enterprise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::Startup => "startup",
            CompanySize::Small => "small",
            CompanySize::Medium => "medium",
            CompanySize::Large => "large",
            CompanySize::Enterprise => "enterprise",
        }
    }

    pub fn allowed_values() -> String {
        Self::ALL.map(|s| s.as_str()).join(", ")
    }
}

impl FromStr for CompanySize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Read models
// ──────────────────────────────────────────────────────────
//

/// Projection of the owning user attached to profile reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileOwner {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: Uuid,
    pub applicant_profile_id: Uuid,
    pub company_name: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    /// None while the position is ongoing
    pub end_date: Option<NaiveDate>,
    pub role_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantProfile {
    pub id: Uuid,
    pub user_id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub university: Option<String>,
    pub major: Option<String>,
    pub graduation_year: Option<i32>,
    pub gpa: Option<f64>,
    pub portfolio_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub preferred_locations: Vec<String>,
    pub salary_expectation: Option<String>,
    pub availability: Option<String>,
    pub other: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Ordered by start date, newest first
    pub work_experience: Vec<WorkExperience>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<ProfileOwner>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterProfile {
    pub id: Uuid,
    pub user_id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub company_size: Option<CompanySize>,
    pub industry: Option<String>,
    pub linkedin_url: Option<String>,
    pub company_url: Option<String>,
    pub hiring_sectors: Vec<String>,
    pub experience_levels: Vec<ExperienceLevel>,
    pub other: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<ProfileOwner>,
}

//
// ──────────────────────────────────────────────────────────
// Update payloads (as received)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct ProfileValidationError(pub String);

/// Allow-listed applicant fields; keys outside this list are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantProfileUpdate {
    #[serde(default)]
    pub first_name: PatchField<String>,
    #[serde(default)]
    pub last_name: PatchField<String>,
    #[serde(default)]
    pub phone_number: PatchField<String>,
    #[serde(default)]
    pub university: PatchField<String>,
    #[serde(default)]
    pub major: PatchField<String>,
    #[serde(default)]
    pub graduation_year: PatchField<i32>,
    #[serde(default)]
    pub gpa: PatchField<f64>,
    #[serde(default)]
    pub portfolio_url: PatchField<String>,
    #[serde(default)]
    pub linkedin_url: PatchField<String>,
    #[serde(default)]
    pub github_url: PatchField<String>,
    #[serde(default)]
    pub skills: PatchField<Vec<String>>,
    #[serde(default)]
    pub interests: PatchField<Vec<String>>,
    #[serde(default)]
    pub experience_level: PatchField<String>,
    #[serde(default)]
    pub preferred_locations: PatchField<Vec<String>>,
    #[serde(default)]
    pub salary_expectation: PatchField<String>,
    #[serde(default)]
    pub availability: PatchField<String>,
    #[serde(default)]
    pub other: PatchField<String>,
}

/// Allow-listed recruiter fields, checked by `RecruiterProfilePolicy`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterProfileUpdate {
    #[serde(default)]
    pub first_name: PatchField<String>,
    #[serde(default)]
    pub last_name: PatchField<String>,
    #[serde(default)]
    pub phone_number: PatchField<String>,
    #[serde(default)]
    pub company: PatchField<String>,
    #[serde(default)]
    pub position: PatchField<String>,
    #[serde(default)]
    pub department: PatchField<String>,
    #[serde(default)]
    pub company_size: PatchField<String>,
    #[serde(default)]
    pub industry: PatchField<String>,
    #[serde(default)]
    pub linkedin_url: PatchField<String>,
    #[serde(default)]
    pub company_url: PatchField<String>,
    #[serde(default)]
    pub hiring_sectors: PatchField<Vec<String>>,
    #[serde(default)]
    pub experience_levels: PatchField<Vec<String>>,
    #[serde(default)]
    pub other: PatchField<String>,
}
