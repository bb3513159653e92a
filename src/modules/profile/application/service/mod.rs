pub mod add_work_experience_service;
pub mod delete_work_experience_service;
pub mod get_applicant_profile_service;
pub mod get_recruiter_profile_service;
pub mod update_applicant_profile_service;
pub mod update_recruiter_profile_service;
pub mod update_work_experience_service;

pub use add_work_experience_service::AddWorkExperienceService;
pub use delete_work_experience_service::DeleteWorkExperienceService;
pub use get_applicant_profile_service::GetApplicantProfileService;
pub use get_recruiter_profile_service::GetRecruiterProfileService;
pub use update_applicant_profile_service::UpdateApplicantProfileService;
pub use update_recruiter_profile_service::UpdateRecruiterProfileService;
pub use update_work_experience_service::UpdateWorkExperienceService;

#[cfg(test)]
pub(crate) mod test_mocks {
    use async_trait::async_trait;
    use mockall::mock;
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserId;
    use crate::modules::profile::application::domain::entities::{
        ApplicantProfile, RecruiterProfile, WorkExperience,
    };
    use crate::modules::profile::application::domain::work_experience::WorkExperienceInput;
    use crate::modules::profile::application::ports::outgoing::{
        ApplicantProfileRepository, PatchApplicantProfileData, PatchRecruiterProfileData,
        ProfileRepositoryError, RecruiterProfileRepository, WorkExperienceRepository,
    };

    mock! {
        pub ApplicantRepo {}
        #[async_trait]
        impl ApplicantProfileRepository for ApplicantRepo {
            async fn find_by_user(&self, user_id: UserId) -> Result<Option<ApplicantProfile>, ProfileRepositoryError>;
            async fn find_id_by_user(&self, user_id: UserId) -> Result<Option<Uuid>, ProfileRepositoryError>;
            async fn patch_by_user(&self, user_id: UserId, data: PatchApplicantProfileData) -> Result<ApplicantProfile, ProfileRepositoryError>;
        }
    }

    mock! {
        pub RecruiterRepo {}
        #[async_trait]
        impl RecruiterProfileRepository for RecruiterRepo {
            async fn find_by_user(&self, user_id: UserId) -> Result<Option<RecruiterProfile>, ProfileRepositoryError>;
            async fn patch_by_user(&self, user_id: UserId, data: PatchRecruiterProfileData) -> Result<RecruiterProfile, ProfileRepositoryError>;
        }
    }

    mock! {
        pub WorkRepo {}
        #[async_trait]
        impl WorkExperienceRepository for WorkRepo {
            async fn create(&self, applicant_profile_id: Uuid, input: WorkExperienceInput) -> Result<WorkExperience, ProfileRepositoryError>;
            async fn update_owned(&self, owner: UserId, experience_id: Uuid, input: WorkExperienceInput) -> Result<WorkExperience, ProfileRepositoryError>;
            async fn delete_owned(&self, owner: UserId, experience_id: Uuid) -> Result<(), ProfileRepositoryError>;
        }
    }
}
