use std::sync::Arc;

use super::ports::incoming::use_cases::{GetApplicantDetailsUseCase, SearchApplicantsUseCase};

#[derive(Clone)]
pub struct SearchUseCases {
    pub search_applicants: Arc<dyn SearchApplicantsUseCase + Send + Sync>,
    pub get_applicant_details: Arc<dyn GetApplicantDetailsUseCase + Send + Sync>,
}
