use crate::api::schemas::{ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LoginUserInfo, SignedUpUser, SignupRequestDto, SignupResponse,
};
// Search
use crate::search::adapter::incoming::web::routes::SearchApplicantsResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Talent Search API",
        version = "1.0.0",
        description = "Applicant and recruiter profiles with recruiter-side applicant search",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::signup_user::signup_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,

        // Search endpoints
        crate::search::adapter::incoming::web::routes::search_applicants::search_applicants_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<SignupResponse>,
            SuccessResponse<LoginResponse>,
            SuccessResponse<SearchApplicantsResponse>,
            ErrorResponse,

            // Auth DTOs
            SignupRequestDto,
            SignupResponse,
            SignedUpUser,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,

            // Search DTOs
            SearchApplicantsResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Signup and login"),
        (name = "search", description = "Recruiter search over applicant profiles"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
