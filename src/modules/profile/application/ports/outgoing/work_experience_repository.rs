use async_trait::async_trait;
use uuid::Uuid;

use super::ProfileRepositoryError;
use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::WorkExperience;
use crate::modules::profile::application::domain::work_experience::WorkExperienceInput;

/// Ownership-scoped access: every lookup joins through the applicant profile
/// and filters on its user id, so a foreign record reads as `NotFound`.
#[async_trait]
pub trait WorkExperienceRepository: Send + Sync {
    async fn create(
        &self,
        applicant_profile_id: Uuid,
        input: WorkExperienceInput,
    ) -> Result<WorkExperience, ProfileRepositoryError>;

    /// Full replacement of the editable fields.
    async fn update_owned(
        &self,
        owner: UserId,
        experience_id: Uuid,
        input: WorkExperienceInput,
    ) -> Result<WorkExperience, ProfileRepositoryError>;

    async fn delete_owned(
        &self,
        owner: UserId,
        experience_id: Uuid,
    ) -> Result<(), ProfileRepositoryError>;
}
