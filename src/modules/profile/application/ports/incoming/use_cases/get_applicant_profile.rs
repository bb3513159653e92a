use async_trait::async_trait;

use super::GetProfileError;
use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::ApplicantProfile;

#[async_trait]
pub trait GetApplicantProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<ApplicantProfile, GetProfileError>;
}
