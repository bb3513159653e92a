use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::{Caller, UserRole};
use crate::modules::profile::application::domain::entities::{
    RecruiterProfile, RecruiterProfileUpdate,
};
use crate::modules::profile::application::domain::policies::RecruiterProfilePolicy;
use crate::modules::profile::application::ports::incoming::use_cases::{
    UpdateProfileError, UpdateRecruiterProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepositoryError, RecruiterProfileRepository,
};

pub struct UpdateRecruiterProfileService<R>
where
    R: RecruiterProfileRepository,
{
    repository: R,
    policy: RecruiterProfilePolicy,
}

impl<R> UpdateRecruiterProfileService<R>
where
    R: RecruiterProfileRepository,
{
    pub fn new(repository: R, policy: RecruiterProfilePolicy) -> Self {
        Self { repository, policy }
    }
}

#[async_trait]
impl<R> UpdateRecruiterProfileUseCase for UpdateRecruiterProfileService<R>
where
    R: RecruiterProfileRepository,
{
    async fn execute(
        &self,
        caller: Caller,
        update: RecruiterProfileUpdate,
    ) -> Result<RecruiterProfile, UpdateProfileError> {
        if !caller.is(UserRole::Recruiter) {
            warn!(user_id = %caller.user_id, role = %caller.role, "Recruiter update by non-recruiter");
            return Err(UpdateProfileError::Forbidden(UserRole::Recruiter));
        }

        let data = self.policy.validate(update).map_err(|e| {
            warn!(user_id = %caller.user_id, reason = %e, "Recruiter update rejected");
            UpdateProfileError::Validation(e.0)
        })?;

        let profile = self
            .repository
            .patch_by_user(caller.user_id, data)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::NotFound => UpdateProfileError::NotFound,
                other => {
                    error!(user_id = %caller.user_id, error = %other, "Recruiter update failed");
                    UpdateProfileError::RepositoryError(other.to_string())
                }
            })?;

        info!(user_id = %caller.user_id, profile_id = %profile.id, "Recruiter profile updated");
        Ok(profile)
    }
}
