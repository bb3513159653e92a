use crate::auth::application::domain::entities::UserRole;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateProfileError {
    /// Carries the role the operation requires.
    #[error("Access denied. {0} role required.")]
    Forbidden(UserRole),

    #[error("{0}")]
    Validation(String),

    #[error("Profile not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkExperienceError {
    #[error("{0}")]
    Validation(String),

    #[error("Applicant profile not found")]
    ProfileNotFound,

    /// Missing, or owned by someone else.
    #[error("Work experience not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}
