use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::ApplicantProfile;
use crate::modules::search::application::domain::{ApplicantSearchFilter, SearchPage};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApplicantSearchError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// One page of matches plus the unpaginated match count.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicantSearchPage {
    pub applicants: Vec<ApplicantProfile>,
    pub total_count: u64,
}

#[async_trait]
pub trait ApplicantSearchQuery: Send + Sync {
    /// Profiles come with their work experience and an owner projection
    /// (email and creation time only).
    async fn search(
        &self,
        filter: &ApplicantSearchFilter,
        page: SearchPage,
    ) -> Result<ApplicantSearchPage, ApplicantSearchError>;

    async fn find_by_id(
        &self,
        applicant_id: Uuid,
    ) -> Result<Option<ApplicantProfile>, ApplicantSearchError>;
}
