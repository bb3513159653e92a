use async_trait::async_trait;
use tracing::error;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::RecruiterProfile;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetRecruiterProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::RecruiterProfileRepository;

pub struct GetRecruiterProfileService<R>
where
    R: RecruiterProfileRepository,
{
    repository: R,
}

impl<R> GetRecruiterProfileService<R>
where
    R: RecruiterProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetRecruiterProfileUseCase for GetRecruiterProfileService<R>
where
    R: RecruiterProfileRepository,
{
    async fn execute(&self, user_id: UserId) -> Result<RecruiterProfile, GetProfileError> {
        self.repository
            .find_by_user(user_id)
            .await
            .map_err(|e| {
                error!(%user_id, error = %e, "Failed to load recruiter profile");
                GetProfileError::RepositoryError(e.to_string())
            })?
            .ok_or(GetProfileError::NotFound)
    }
}
