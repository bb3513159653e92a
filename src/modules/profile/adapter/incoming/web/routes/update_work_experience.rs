use actix_web::{put, web, Responder};
use tracing::info;
use uuid::Uuid;

use super::{work_experience_error_response, WorkExperienceBody};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::profile::application::domain::work_experience::WorkExperienceDraft;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/profile/applicant/work-experience/{experience_id}")]
pub async fn update_work_experience_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<WorkExperienceDraft>,
) -> impl Responder {
    let experience_id = path.into_inner();

    match data
        .profile
        .update_work_experience
        .execute(user.caller(), experience_id, payload.into_inner())
        .await
    {
        Ok(work_experience) => {
            info!(
                user_id = %user.user_id,
                work_experience_id = %experience_id,
                "Work experience updated"
            );
            ApiResponse::success(WorkExperienceBody {
                message: "Work experience updated successfully",
                work_experience,
            })
        }
        Err(e) => work_experience_error_response(e),
    }
}
