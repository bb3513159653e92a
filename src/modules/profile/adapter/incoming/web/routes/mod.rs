mod add_work_experience;
mod delete_work_experience;
mod get_applicant_profile;
mod get_recruiter_profile;
mod update_applicant_profile;
mod update_recruiter_profile;
mod update_work_experience;

pub use add_work_experience::add_work_experience_handler;
pub use delete_work_experience::delete_work_experience_handler;
pub use get_applicant_profile::get_applicant_profile_handler;
pub use get_recruiter_profile::get_recruiter_profile_handler;
pub use update_applicant_profile::update_applicant_profile_handler;
pub use update_recruiter_profile::update_recruiter_profile_handler;
pub use update_work_experience::update_work_experience_handler;

use actix_web::HttpResponse;
use serde::Serialize;
use tracing::error;

use crate::auth::application::domain::entities::UserRole;
use crate::modules::profile::application::domain::entities::WorkExperience;
use crate::modules::profile::application::ports::incoming::use_cases::{
    UpdateProfileError, WorkExperienceError,
};
use crate::shared::api::ApiResponse;

//
// ──────────────────────────────────────────────────────────
// Response payloads
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize)]
pub struct ProfileBody<T: Serialize> {
    pub profile: T,
}

#[derive(Serialize)]
pub struct ProfileUpdatedBody<T: Serialize> {
    pub message: &'static str,
    pub profile: T,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperienceBody {
    pub message: &'static str,
    pub work_experience: WorkExperience,
}

#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

//
// ──────────────────────────────────────────────────────────
// Error → HTTP
// ──────────────────────────────────────────────────────────
//

pub(crate) fn role_required_message(role: UserRole) -> &'static str {
    match role {
        UserRole::Applicant => "Access denied. Applicant role required.",
        UserRole::Recruiter => "Access denied. Recruiter role required.",
    }
}

fn update_error_response(e: UpdateProfileError) -> HttpResponse {
    match e {
        UpdateProfileError::Forbidden(role) => {
            ApiResponse::forbidden("FORBIDDEN", role_required_message(role))
        }
        UpdateProfileError::Validation(msg) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        UpdateProfileError::NotFound => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }
        UpdateProfileError::RepositoryError(msg) => {
            error!(error = %msg, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}

fn work_experience_error_response(e: WorkExperienceError) -> HttpResponse {
    match e {
        WorkExperienceError::Validation(msg) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        WorkExperienceError::ProfileNotFound => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Applicant profile not found")
        }
        WorkExperienceError::NotFound => {
            ApiResponse::not_found("WORK_EXPERIENCE_NOT_FOUND", "Work experience not found")
        }
        WorkExperienceError::RepositoryError(msg) => {
            error!(error = %msg, "Work experience operation failed");
            ApiResponse::internal_error()
        }
    }
}
