use std::sync::Arc;

use crate::modules::profile::application::ports::incoming::use_cases::{
    AddWorkExperienceUseCase, DeleteWorkExperienceUseCase, GetApplicantProfileUseCase,
    GetRecruiterProfileUseCase, UpdateApplicantProfileUseCase, UpdateRecruiterProfileUseCase,
    UpdateWorkExperienceUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get_applicant: Arc<dyn GetApplicantProfileUseCase + Send + Sync>,
    pub update_applicant: Arc<dyn UpdateApplicantProfileUseCase + Send + Sync>,
    pub add_work_experience: Arc<dyn AddWorkExperienceUseCase + Send + Sync>,
    pub update_work_experience: Arc<dyn UpdateWorkExperienceUseCase + Send + Sync>,
    pub delete_work_experience: Arc<dyn DeleteWorkExperienceUseCase + Send + Sync>,
    pub get_recruiter: Arc<dyn GetRecruiterProfileUseCase + Send + Sync>,
    pub update_recruiter: Arc<dyn UpdateRecruiterProfileUseCase + Send + Sync>,
}
