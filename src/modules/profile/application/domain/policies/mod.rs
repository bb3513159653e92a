pub mod applicant_profile_policy;
pub mod recruiter_profile_policy;

pub use applicant_profile_policy::ApplicantProfilePolicy;
pub use recruiter_profile_policy::RecruiterProfilePolicy;
