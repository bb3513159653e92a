pub mod applicant_profile_repository;
pub mod recruiter_profile_repository;
pub mod work_experience_repository;

pub use applicant_profile_repository::{
    ApplicantProfileRepository, PatchApplicantProfileData,
};
pub use recruiter_profile_repository::{PatchRecruiterProfileData, RecruiterProfileRepository};
pub use work_experience_repository::WorkExperienceRepository;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileRepositoryError {
    /// Row doesn't exist OR doesn't belong to the caller.
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}
