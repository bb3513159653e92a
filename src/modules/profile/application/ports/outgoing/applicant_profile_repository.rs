use async_trait::async_trait;
use uuid::Uuid;

use super::ProfileRepositoryError;
use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::{ApplicantProfile, ExperienceLevel};
use crate::shared::patch::PatchField;

/// Patch semantics:
/// - scalar fields: Unset => keep, Null => clear, Value => replace
/// - set fields (skills, interests, preferred_locations): Value(vec) replaces
///   the whole array, no merge
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchApplicantProfileData {
    pub first_name: PatchField<String>,
    pub last_name: PatchField<String>,
    pub phone_number: PatchField<String>,
    pub university: PatchField<String>,
    pub major: PatchField<String>,
    pub graduation_year: PatchField<i32>,
    pub gpa: PatchField<f64>,
    pub portfolio_url: PatchField<String>,
    pub linkedin_url: PatchField<String>,
    pub github_url: PatchField<String>,
    pub skills: PatchField<Vec<String>>,
    pub interests: PatchField<Vec<String>>,
    pub experience_level: PatchField<ExperienceLevel>,
    pub preferred_locations: PatchField<Vec<String>>,
    pub salary_expectation: PatchField<String>,
    pub availability: PatchField<String>,
    pub other: PatchField<String>,
}

#[async_trait]
pub trait ApplicantProfileRepository: Send + Sync {
    /// Profile with its work experience and owner projection.
    async fn find_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<ApplicantProfile>, ProfileRepositoryError>;

    async fn find_id_by_user(&self, user_id: UserId)
        -> Result<Option<Uuid>, ProfileRepositoryError>;

    /// Applies only the set fields; returns the profile with its work experience.
    async fn patch_by_user(
        &self,
        user_id: UserId,
        data: PatchApplicantProfileData,
    ) -> Result<ApplicantProfile, ProfileRepositoryError>;
}
