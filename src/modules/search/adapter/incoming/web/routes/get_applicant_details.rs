use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::profile::application::domain::entities::ApplicantProfile;
use crate::modules::search::application::ports::incoming::use_cases::GetApplicantDetailsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct ApplicantBody {
    applicant: ApplicantProfile,
}

#[get("/api/search/applicants/{applicant_id}")]
pub async fn get_applicant_details_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let applicant_id = path.into_inner();

    match data
        .search
        .get_applicant_details
        .execute(user.caller(), applicant_id)
        .await
    {
        Ok(applicant) => {
            info!(user_id = %user.user_id, %applicant_id, "Applicant details viewed");
            ApiResponse::success(ApplicantBody { applicant })
        }

        Err(GetApplicantDetailsError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "Access denied. Recruiter role required.")
        }

        Err(GetApplicantDetailsError::NotFound) => {
            ApiResponse::not_found("APPLICANT_NOT_FOUND", "Applicant not found")
        }

        Err(GetApplicantDetailsError::RepositoryError(e)) => {
            error!(%applicant_id, error = %e, "Failed to fetch applicant details");
            ApiResponse::internal_error()
        }
    }
}
