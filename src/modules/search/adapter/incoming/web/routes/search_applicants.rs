use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::search::application::ports::incoming::use_cases::SearchApplicantsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

/// Documentation shape of a search page; the handler serializes
/// `ApplicantSearchResult` directly.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchApplicantsResponse {
    #[schema(value_type = Vec<Object>)]
    pub applicants: Vec<serde_json::Value>,
    #[schema(value_type = Object, example = json!({
        "currentPage": 1,
        "totalPages": 3,
        "totalCount": 25,
        "hasNextPage": true,
        "hasPrevPage": false,
        "limit": 10
    }))]
    pub pagination: serde_json::Value,
}

/// Search applicants
///
/// Recruiter-only. Every supplied filter narrows the result; list filters
/// (`skills`, `preferredLocations`) match profiles holding any of the given
/// values and accept repeated keys or the `skills[]=` form.
#[utoipa::path(
    get,
    path = "/api/search/applicants",
    tag = "search",
    params(
        ("graduationYear" = Option<i32>, Query, description = "Exact graduation year"),
        ("major" = Option<String>, Query, description = "Case-insensitive substring"),
        ("university" = Option<String>, Query, description = "Case-insensitive substring"),
        ("experienceLevel" = Option<String>, Query, description = "entry | junior | mid | senior"),
        ("minGpa" = Option<f64>, Query, description = "Lower GPA bound, inclusive"),
        ("maxGpa" = Option<f64>, Query, description = "Upper GPA bound, inclusive"),
        ("skills" = Option<Vec<String>>, Query, description = "Matches any of the given skills"),
        ("preferredLocations" = Option<Vec<String>>, Query, description = "Matches any of the given locations"),
        ("page" = Option<i64>, Query, description = "1-based page, default 1"),
        ("limit" = Option<i64>, Query, description = "Page size, default 10, capped at 50"),
    ),
    responses(
        (
            status = 200,
            description = "One page of matching applicants",
            body = inline(SuccessResponse<SearchApplicantsResponse>)
        ),
        (
            status = 400,
            description = "Malformed query parameter",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "code": "VALIDATION_ERROR",
                "message": "minGpa must be a number, got: high"
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (
            status = 403,
            description = "Caller is not a recruiter",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "code": "FORBIDDEN",
                "message": "Access denied. Recruiter role required."
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/search/applicants")]
pub async fn search_applicants_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> impl Responder {
    match data
        .search
        .search_applicants
        .execute(user.caller(), query.into_inner())
        .await
    {
        Ok(result) => ApiResponse::success(result),

        Err(SearchApplicantsError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "Access denied. Recruiter role required.")
        }

        Err(SearchApplicantsError::InvalidParams(msg)) => {
            warn!(user_id = %user.user_id, reason = %msg, "Rejected search parameters");
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(SearchApplicantsError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Applicant search failed");
            ApiResponse::internal_error()
        }
    }
}
