pub mod errors;
pub mod get_applicant_profile;
pub mod get_recruiter_profile;
pub mod update_applicant_profile;
pub mod update_recruiter_profile;
pub mod work_experience;

pub use errors::{GetProfileError, UpdateProfileError, WorkExperienceError};
pub use get_applicant_profile::GetApplicantProfileUseCase;
pub use get_recruiter_profile::GetRecruiterProfileUseCase;
pub use update_applicant_profile::UpdateApplicantProfileUseCase;
pub use update_recruiter_profile::UpdateRecruiterProfileUseCase;
pub use work_experience::{
    AddWorkExperienceUseCase, DeleteWorkExperienceUseCase, UpdateWorkExperienceUseCase,
};
