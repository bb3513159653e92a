pub mod get_applicant_details_service;
pub mod search_applicants_service;

pub use get_applicant_details_service::GetApplicantDetailsService;
pub use search_applicants_service::SearchApplicantsService;
