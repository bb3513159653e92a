use actix_web::{put, web, Responder};
use tracing::info;

use super::{update_error_response, ProfileUpdatedBody};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::profile::application::domain::entities::ApplicantProfileUpdate;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/profile/applicant")]
pub async fn update_applicant_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<ApplicantProfileUpdate>,
) -> impl Responder {
    match data
        .profile
        .update_applicant
        .execute(user.caller(), payload.into_inner())
        .await
    {
        Ok(profile) => {
            info!(user_id = %user.user_id, "Applicant profile updated");
            ApiResponse::success(ProfileUpdatedBody {
                message: "Profile updated successfully",
                profile,
            })
        }
        Err(e) => update_error_response(e),
    }
}
