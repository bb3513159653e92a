use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::Caller;
use crate::modules::profile::application::domain::entities::ApplicantProfile;
use crate::modules::search::application::domain::PaginationMeta;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicantSearchResult {
    pub applicants: Vec<ApplicantProfile>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchApplicantsError {
    #[error("Recruiter role required")]
    Forbidden,

    #[error("{0}")]
    InvalidParams(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SearchApplicantsUseCase: Send + Sync {
    /// `query` is the raw query string as key/value pairs; it is only parsed
    /// once the caller is known to be a recruiter.
    async fn execute(
        &self,
        caller: Caller,
        query: Vec<(String, String)>,
    ) -> Result<ApplicantSearchResult, SearchApplicantsError>;
}
