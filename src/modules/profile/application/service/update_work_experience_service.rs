use async_trait::async_trait;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::Caller;
use crate::modules::profile::application::domain::entities::WorkExperience;
use crate::modules::profile::application::domain::work_experience::{
    WorkExperienceDraft, WorkExperienceInput,
};
use crate::modules::profile::application::ports::incoming::use_cases::{
    UpdateWorkExperienceUseCase, WorkExperienceError,
};
use crate::modules::profile::application::ports::outgoing::{
    ApplicantProfileRepository, ProfileRepositoryError, WorkExperienceRepository,
};

pub struct UpdateWorkExperienceService<A, W>
where
    A: ApplicantProfileRepository,
    W: WorkExperienceRepository,
{
    profiles: A,
    experiences: W,
}

impl<A, W> UpdateWorkExperienceService<A, W>
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
impl<A, W> UpdateWorkExperienceUseCase for UpdateWorkExperienceService<A, W>
where
    A: ApplicantProfileRepository,
    W: WorkExperienceRepository,
{
    async fn execute(
        &self,
        caller: Caller,
        experience_id: Uuid,
        draft: WorkExperienceDraft,
    ) -> Result<WorkExperience, WorkExperienceError> {
        let input = WorkExperienceInput::try_from(draft).map_err(|e| {
            warn!(user_id = %caller.user_id, reason = %e, "Work experience rejected");
            WorkExperienceError::Validation(e.0)
        })?;

        self.profiles
            .find_id_by_user(caller.user_id)
            .await
            .map_err(|e| WorkExperienceError::RepositoryError(e.to_string()))?
            .ok_or(WorkExperienceError::ProfileNotFound)?;

        let updated = self
            .experiences
            .update_owned(caller.user_id, experience_id, input)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::NotFound => {
                    warn!(user_id = %caller.user_id, %experience_id, "Work experience not found for caller");
                    WorkExperienceError::NotFound
                }
                other => {
                    error!(user_id = %caller.user_id, error = %other, "Failed to update work experience");
                    WorkExperienceError::RepositoryError(other.to_string())
                }
            })?;

        info!(user_id = %caller.user_id, %experience_id, "Work experience updated");
        Ok(updated)
    }
}
