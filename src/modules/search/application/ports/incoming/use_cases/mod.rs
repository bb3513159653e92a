pub mod get_applicant_details;
pub mod search_applicants;

pub use get_applicant_details::{GetApplicantDetailsError, GetApplicantDetailsUseCase};
pub use search_applicants::{ApplicantSearchResult, SearchApplicantsError, SearchApplicantsUseCase};
