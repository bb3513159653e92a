use async_trait::async_trait;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::Caller;
use crate::modules::profile::application::ports::incoming::use_cases::{
    DeleteWorkExperienceUseCase, WorkExperienceError,
};
use crate::modules::profile::application::ports::outgoing::{
    ApplicantProfileRepository, ProfileRepositoryError, WorkExperienceRepository,
};

pub struct DeleteWorkExperienceService<A, W>
where
    A: ApplicantProfileRepository,
    W: WorkExperienceRepository,
{
    profiles: A,
    experiences: W,
}

impl<A, W> DeleteWorkExperienceService<A, W>
where
    A: ApplicantProfileRepository,
    W: WorkExperienceRepository,
{
    pub fn new(profiles: A, experiences: W) -> Self {
        Self {
            profiles,
            experiences,
        }
    }
}

#[async_trait]
impl<A, W> DeleteWorkExperienceUseCase for DeleteWorkExperienceService<A, W>
where
    A: ApplicantProfileRepository,
    W: WorkExperienceRepository,
{
    async fn execute(
        &self,
        caller: Caller,
        experience_id: Uuid,
    ) -> Result<(), WorkExperienceError> {
        self.profiles
            .find_id_by_user(caller.user_id)
            .await
            .map_err(|e| WorkExperienceError::RepositoryError(e.to_string()))?
            .ok_or(WorkExperienceError::ProfileNotFound)?;

        self.experiences
            .delete_owned(caller.user_id, experience_id)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::NotFound => {
                    warn!(user_id = %caller.user_id, %experience_id, "Work experience not found for caller");
                    WorkExperienceError::NotFound
                }
                other => {
                    error!(user_id = %caller.user_id, error = %other, "Failed to delete work experience");
                    WorkExperienceError::RepositoryError(other.to_string())
                }
            })?;

        info!(user_id = %caller.user_id, %experience_id, "Work experience deleted");
        Ok(())
    }
}
