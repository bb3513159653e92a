pub mod pagination;
pub mod search_filter;

pub use pagination::{PaginationMeta, SearchPage};
pub use search_filter::{ApplicantSearchFilter, ApplicantSearchParams, SearchParamError};
