use actix_web::{get, web, Responder};
use tracing::error;

use super::ProfileBody;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::ports::incoming::use_cases::GetProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/profile/recruiter")]
pub async fn get_recruiter_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .profile
        .get_recruiter
        .execute(UserId::from(user.user_id))
        .await
    {
        Ok(profile) => ApiResponse::success(ProfileBody { profile }),

        Err(GetProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(GetProfileError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to fetch recruiter profile");
            ApiResponse::internal_error()
        }
    }
}
