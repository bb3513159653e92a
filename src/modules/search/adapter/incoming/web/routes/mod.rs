mod get_applicant_details;
pub mod search_applicants;

pub use get_applicant_details::get_applicant_details_handler;
pub use search_applicants::{search_applicants_handler, SearchApplicantsResponse};
