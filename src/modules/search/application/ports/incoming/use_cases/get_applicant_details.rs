use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Caller;
use crate::modules::profile::application::domain::entities::ApplicantProfile;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetApplicantDetailsError {
    #[error("Recruiter role required")]
    Forbidden,

    #[error("Applicant not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetApplicantDetailsUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Caller,
        applicant_id: Uuid,
    ) -> Result<ApplicantProfile, GetApplicantDetailsError>;
}
