use async_trait::async_trait;
use tracing::error;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::ApplicantProfile;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetApplicantProfileUseCase, GetProfileError,
};
use crate::modules::profile::application::ports::outgoing::ApplicantProfileRepository;

pub struct GetApplicantProfileService<R>
where
    R: ApplicantProfileRepository,
{
    repository: R,
}

impl<R> GetApplicantProfileService<R>
where
    R: ApplicantProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetApplicantProfileUseCase for GetApplicantProfileService<R>
where
    R: ApplicantProfileRepository,
{
    async fn execute(&self, user_id: UserId) -> Result<ApplicantProfile, GetProfileError> {
        self.repository
            .find_by_user(user_id)
            .await
            .map_err(|e| {
                error!(%user_id, error = %e, "Failed to load applicant profile");
                GetProfileError::RepositoryError(e.to_string())
            })?
            .ok_or(GetProfileError::NotFound)
    }
}
