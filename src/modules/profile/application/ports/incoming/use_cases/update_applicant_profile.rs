use async_trait::async_trait;

use super::UpdateProfileError;
use crate::auth::application::domain::entities::Caller;
use crate::modules::profile::application::domain::entities::{
    ApplicantProfile, ApplicantProfileUpdate,
};

#[async_trait]
pub trait UpdateApplicantProfileUseCase: Send + Sync {
    /// Only fields present in `update` are written.
    async fn execute(
        &self,
        caller: Caller,
        update: ApplicantProfileUpdate,
    ) -> Result<ApplicantProfile, UpdateProfileError>;
}
