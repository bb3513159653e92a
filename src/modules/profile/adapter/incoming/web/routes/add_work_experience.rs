use actix_web::{post, web, Responder};
use tracing::info;

use super::{work_experience_error_response, WorkExperienceBody};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::profile::application::domain::work_experience::WorkExperienceDraft;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/profile/applicant/work-experience")]
pub async fn add_work_experience_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<WorkExperienceDraft>,
) -> impl Responder {
    match data
        .profile
        .add_work_experience
        .execute(user.caller(), payload.into_inner())
        .await
    {
        Ok(work_experience) => {
            info!(
                user_id = %user.user_id,
                work_experience_id = %work_experience.id,
                "Work experience added"
            );
            ApiResponse::created(WorkExperienceBody {
                message: "Work experience added successfully",
                work_experience,
            })
        }
        Err(e) => work_experience_error_response(e),
    }
}
