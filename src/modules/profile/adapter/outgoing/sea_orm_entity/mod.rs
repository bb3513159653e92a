pub mod applicant_profiles;
pub mod recruiter_profiles;
pub mod work_experiences;
