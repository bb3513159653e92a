pub mod applicant_search_query;

pub use applicant_search_query::{ApplicantSearchError, ApplicantSearchPage, ApplicantSearchQuery};
