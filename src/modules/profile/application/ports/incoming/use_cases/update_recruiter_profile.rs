use async_trait::async_trait;

use super::UpdateProfileError;
use crate::auth::application::domain::entities::Caller;
use crate::modules::profile::application::domain::entities::{
    RecruiterProfile, RecruiterProfileUpdate,
};

#[async_trait]
pub trait UpdateRecruiterProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Caller,
        update: RecruiterProfileUpdate,
    ) -> Result<RecruiterProfile, UpdateProfileError>;
}
