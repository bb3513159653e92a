use actix_web::{put, web, Responder};
use tracing::info;

use super::{update_error_response, ProfileUpdatedBody};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::profile::application::domain::entities::RecruiterProfileUpdate;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/profile/recruiter")]
pub async fn update_recruiter_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<RecruiterProfileUpdate>,
) -> impl Responder {
    match data
        .profile
        .update_recruiter
        .execute(user.caller(), payload.into_inner())
        .await
    {
        Ok(profile) => {
            info!(user_id = %user.user_id, "Recruiter profile updated");
            ApiResponse::success(ProfileUpdatedBody {
                message: "Profile updated successfully",
                profile,
            })
        }
        Err(e) => update_error_response(e),
    }
}
