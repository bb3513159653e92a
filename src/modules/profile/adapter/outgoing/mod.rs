pub mod applicant_profile_repository_postgres;
pub mod mapping;
pub mod recruiter_profile_repository_postgres;
pub mod sea_orm_entity;
pub mod work_experience_repository_postgres;

pub use applicant_profile_repository_postgres::ApplicantProfileRepositoryPostgres;
pub use recruiter_profile_repository_postgres::RecruiterProfileRepositoryPostgres;
pub use work_experience_repository_postgres::WorkExperienceRepositoryPostgres;
