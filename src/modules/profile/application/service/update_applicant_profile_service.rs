use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::{Caller, UserRole};
use crate::modules::profile::application::domain::entities::{
    ApplicantProfile, ApplicantProfileUpdate,
};
use crate::modules::profile::application::domain::policies::ApplicantProfilePolicy;
use crate::modules::profile::application::ports::incoming::use_cases::{
    UpdateApplicantProfileUseCase, UpdateProfileError,
};
use crate::modules::profile::application::ports::outgoing::{
    ApplicantProfileRepository, ProfileRepositoryError,
};

pub struct UpdateApplicantProfileService<R>
where
    R: ApplicantProfileRepository,
{
    repository: R,
    policy: ApplicantProfilePolicy,
}

impl<R> UpdateApplicantProfileService<R>
where
    R: ApplicantProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            policy: ApplicantProfilePolicy,
        }
    }
}

#[async_trait]
impl<R> UpdateApplicantProfileUseCase for UpdateApplicantProfileService<R>
where
    R: ApplicantProfileRepository,
{
    async fn execute(
        &self,
        caller: Caller,
        update: ApplicantProfileUpdate,
    ) -> Result<ApplicantProfile, UpdateProfileError> {
        if !caller.is(UserRole::Applicant) {
            warn!(user_id = %caller.user_id, role = %caller.role, "Applicant update by non-applicant");
            return Err(UpdateProfileError::Forbidden(UserRole::Applicant));
        }

        let data = self.policy.validate(update).map_err(|e| {
            warn!(user_id = %caller.user_id, reason = %e, "Applicant update rejected");
            UpdateProfileError::Validation(e.0)
        })?;

        let profile = self
            .repository
            .patch_by_user(caller.user_id, data)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::NotFound => UpdateProfileError::NotFound,
                other => {
                    error!(user_id = %caller.user_id, error = %other, "Applicant update failed");
                    UpdateProfileError::RepositoryError(other.to_string())
                }
            })?;

        info!(user_id = %caller.user_id, profile_id = %profile.id, "Applicant profile updated");
        Ok(profile)
    }
}
