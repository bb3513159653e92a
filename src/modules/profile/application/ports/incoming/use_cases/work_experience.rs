use async_trait::async_trait;
use uuid::Uuid;

use super::WorkExperienceError;
use crate::auth::application::domain::entities::Caller;
use crate::modules::profile::application::domain::entities::WorkExperience;
use crate::modules::profile::application::domain::work_experience::WorkExperienceDraft;

#[async_trait]
pub trait AddWorkExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Caller,
        draft: WorkExperienceDraft,
    ) -> Result<WorkExperience, WorkExperienceError>;
}

#[async_trait]
pub trait UpdateWorkExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Caller,
        experience_id: Uuid,
        draft: WorkExperienceDraft,
    ) -> Result<WorkExperience, WorkExperienceError>;
}

#[async_trait]
pub trait DeleteWorkExperienceUseCase: Send + Sync {
    async fn execute(&self, caller: Caller, experience_id: Uuid)
        -> Result<(), WorkExperienceError>;
}
