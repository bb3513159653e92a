pub mod applicant_search_query_postgres;

pub use applicant_search_query_postgres::ApplicantSearchQueryPostgres;
