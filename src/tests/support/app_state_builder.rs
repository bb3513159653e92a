use std::sync::Arc;

use actix_web::web;

use crate::auth::application::ports::incoming::use_cases::{LoginUserUseCase, SignupUserUseCase};
use crate::modules::profile::application::ports::incoming::use_cases::{
    AddWorkExperienceUseCase, DeleteWorkExperienceUseCase, GetApplicantProfileUseCase,
    GetRecruiterProfileUseCase, UpdateApplicantProfileUseCase, UpdateRecruiterProfileUseCase,
    UpdateWorkExperienceUseCase,
};
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::search::application::ports::incoming::use_cases::{
    GetApplicantDetailsUseCase, SearchApplicantsUseCase,
};
use crate::modules::search::application::search_use_cases::SearchUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every use case starts as a stub that panics when called; tests swap in
/// the one they exercise.
pub struct TestAppStateBuilder {
    signup_user: Arc<dyn SignupUserUseCase + Send + Sync>,
    login_user: Arc<dyn LoginUserUseCase + Send + Sync>,
    profile: ProfileUseCases,
    search: SearchUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            signup_user: Arc::new(StubSignupUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            profile: ProfileUseCases {
                get_applicant: Arc::new(StubGetApplicantProfileUseCase),
                update_applicant: Arc::new(StubUpdateApplicantProfileUseCase),
                add_work_experience: Arc::new(StubAddWorkExperienceUseCase),
                update_work_experience: Arc::new(StubUpdateWorkExperienceUseCase),
                delete_work_experience: Arc::new(StubDeleteWorkExperienceUseCase),
                get_recruiter: Arc::new(StubGetRecruiterProfileUseCase),
                update_recruiter: Arc::new(StubUpdateRecruiterProfileUseCase),
            },
            search: SearchUseCases {
                search_applicants: Arc::new(StubSearchApplicantsUseCase),
                get_applicant_details: Arc::new(StubGetApplicantDetailsUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // ==================== AUTH ====================

    pub fn with_signup_user(mut self, uc: impl SignupUserUseCase + 'static) -> Self {
        self.signup_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    // ==================== PROFILE ====================

    pub fn with_get_applicant_profile(
        mut self,
        uc: impl GetApplicantProfileUseCase + 'static,
    ) -> Self {
        self.profile.get_applicant = Arc::new(uc);
        self
    }

    pub fn with_update_applicant_profile(
        mut self,
        uc: impl UpdateApplicantProfileUseCase + 'static,
    ) -> Self {
        self.profile.update_applicant = Arc::new(uc);
        self
    }

    pub fn with_add_work_experience(mut self, uc: impl AddWorkExperienceUseCase + 'static) -> Self {
        self.profile.add_work_experience = Arc::new(uc);
        self
    }

    pub fn with_update_work_experience(
        mut self,
        uc: impl UpdateWorkExperienceUseCase + 'static,
    ) -> Self {
        self.profile.update_work_experience = Arc::new(uc);
        self
    }

    pub fn with_delete_work_experience(
        mut self,
        uc: impl DeleteWorkExperienceUseCase + 'static,
    ) -> Self {
        self.profile.delete_work_experience = Arc::new(uc);
        self
    }

    pub fn with_get_recruiter_profile(
        mut self,
        uc: impl GetRecruiterProfileUseCase + 'static,
    ) -> Self {
        self.profile.get_recruiter = Arc::new(uc);
        self
    }

    pub fn with_update_recruiter_profile(
        mut self,
        uc: impl UpdateRecruiterProfileUseCase + 'static,
    ) -> Self {
        self.profile.update_recruiter = Arc::new(uc);
        self
    }

    // ==================== SEARCH ====================

    pub fn with_search_applicants(mut self, uc: impl SearchApplicantsUseCase + 'static) -> Self {
        self.search.search_applicants = Arc::new(uc);
        self
    }

    pub fn with_get_applicant_details(
        mut self,
        uc: impl GetApplicantDetailsUseCase + 'static,
    ) -> Self {
        self.search.get_applicant_details = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            signup_user_use_case: self.signup_user,
            login_user_use_case: self.login_user,
            profile: self.profile,
            search: self.search,
        })
    }
}
