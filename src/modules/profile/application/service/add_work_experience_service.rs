use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::Caller;
use crate::modules::profile::application::domain::entities::WorkExperience;
use crate::modules::profile::application::domain::work_experience::{
    WorkExperienceDraft, WorkExperienceInput,
};
use crate::modules::profile::application::ports::incoming::use_cases::{
    AddWorkExperienceUseCase, WorkExperienceError,
};
use crate::modules::profile::application::ports::outgoing::{
    ApplicantProfileRepository, WorkExperienceRepository,
};

pub struct AddWorkExperienceService<A, W>
where
    A: ApplicantProfileRepository,
    W: WorkExperienceRepository,
{
    profiles: A,
    experiences: W,
}

impl<A, W> AddWorkExperienceService<A, W>
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
impl<A, W> AddWorkExperienceUseCase for AddWorkExperienceService<A, W>
where
    A: ApplicantProfileRepository,
    W: WorkExperienceRepository,
{
    async fn execute(
        &self,
        caller: Caller,
        draft: WorkExperienceDraft,
    ) -> Result<WorkExperience, WorkExperienceError> {
        let input = WorkExperienceInput::try_from(draft).map_err(|e| {
            warn!(user_id = %caller.user_id, reason = %e, "Work experience rejected");
            WorkExperienceError::Validation(e.0)
        })?;

        let profile_id = self
            .profiles
            .find_id_by_user(caller.user_id)
            .await
            .map_err(|e| WorkExperienceError::RepositoryError(e.to_string()))?
            .ok_or(WorkExperienceError::ProfileNotFound)?;

        let created = self
            .experiences
            .create(profile_id, input)
            .await
            .map_err(|e| {
                error!(user_id = %caller.user_id, error = %e, "Failed to add work experience");
                WorkExperienceError::RepositoryError(e.to_string())
            })?;

        info!(user_id = %caller.user_id, experience_id = %created.id, "Work experience added");
        Ok(created)
    }
}
