use async_trait::async_trait;

use super::GetProfileError;
use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::RecruiterProfile;

#[async_trait]
pub trait GetRecruiterProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<RecruiterProfile, GetProfileError>;
}
