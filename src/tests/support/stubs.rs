use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Caller, UserId};
use crate::auth::application::ports::incoming::use_cases::{
    LoginError, LoginRequest, LoginResult, LoginUserUseCase, SignupError, SignupRequest,
    SignupResult, SignupUserUseCase,
};
use crate::modules::profile::application::domain::entities::{
    ApplicantProfile, ApplicantProfileUpdate, RecruiterProfile, RecruiterProfileUpdate,
    WorkExperience,
};
use crate::modules::profile::application::domain::work_experience::WorkExperienceDraft;
use crate::modules::profile::application::ports::incoming::use_cases::{
    AddWorkExperienceUseCase, DeleteWorkExperienceUseCase, GetApplicantProfileUseCase,
    GetProfileError, GetRecruiterProfileUseCase, UpdateApplicantProfileUseCase,
    UpdateProfileError, UpdateRecruiterProfileUseCase, UpdateWorkExperienceUseCase,
    WorkExperienceError,
};
use crate::modules::search::application::ports::incoming::use_cases::{
    ApplicantSearchResult, GetApplicantDetailsError, GetApplicantDetailsUseCase,
    SearchApplicantsError, SearchApplicantsUseCase,
};

// ==================== AUTH ====================

#[derive(Clone)]
pub struct StubSignupUserUseCase;

#[async_trait]
impl SignupUserUseCase for StubSignupUserUseCase {
    async fn execute(&self, _request: SignupRequest) -> Result<SignupResult, SignupError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginResult, LoginError> {
        unimplemented!("Not used in this test")
    }
}

// ==================== PROFILE ====================

#[derive(Clone)]
pub struct StubGetApplicantProfileUseCase;

#[async_trait]
impl GetApplicantProfileUseCase for StubGetApplicantProfileUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<ApplicantProfile, GetProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Clone)]
pub struct StubUpdateApplicantProfileUseCase;

#[async_trait]
impl UpdateApplicantProfileUseCase for StubUpdateApplicantProfileUseCase {
    async fn execute(
        &self,
        _caller: Caller,
        _update: ApplicantProfileUpdate,
    ) -> Result<ApplicantProfile, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Clone)]
pub struct StubAddWorkExperienceUseCase;

#[async_trait]
impl AddWorkExperienceUseCase for StubAddWorkExperienceUseCase {
    async fn execute(
        &self,
        _caller: Caller,
        _draft: WorkExperienceDraft,
    ) -> Result<WorkExperience, WorkExperienceError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Clone)]
pub struct StubUpdateWorkExperienceUseCase;

#[async_trait]
impl UpdateWorkExperienceUseCase for StubUpdateWorkExperienceUseCase {
    async fn execute(
        &self,
        _caller: Caller,
        _experience_id: Uuid,
        _draft: WorkExperienceDraft,
    ) -> Result<WorkExperience, WorkExperienceError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Clone)]
pub struct StubDeleteWorkExperienceUseCase;

#[async_trait]
impl DeleteWorkExperienceUseCase for StubDeleteWorkExperienceUseCase {
    async fn execute(
        &self,
        _caller: Caller,
        _experience_id: Uuid,
    ) -> Result<(), WorkExperienceError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Clone)]
pub struct StubGetRecruiterProfileUseCase;

#[async_trait]
impl GetRecruiterProfileUseCase for StubGetRecruiterProfileUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<RecruiterProfile, GetProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Clone)]
pub struct StubUpdateRecruiterProfileUseCase;

#[async_trait]
impl UpdateRecruiterProfileUseCase for StubUpdateRecruiterProfileUseCase {
    async fn execute(
        &self,
        _caller: Caller,
        _update: RecruiterProfileUpdate,
    ) -> Result<RecruiterProfile, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

// ==================== SEARCH ====================

#[derive(Clone)]
pub struct StubSearchApplicantsUseCase;

#[async_trait]
impl SearchApplicantsUseCase for StubSearchApplicantsUseCase {
    async fn execute(
        &self,
        _caller: Caller,
        _query: Vec<(String, String)>,
    ) -> Result<ApplicantSearchResult, SearchApplicantsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Clone)]
pub struct StubGetApplicantDetailsUseCase;

#[async_trait]
impl GetApplicantDetailsUseCase for StubGetApplicantDetailsUseCase {
    async fn execute(
        &self,
        _caller: Caller,
        _applicant_id: Uuid,
    ) -> Result<ApplicantProfile, GetApplicantDetailsError> {
        unimplemented!("Not used in this test")
    }
}
