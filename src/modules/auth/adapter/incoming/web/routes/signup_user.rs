use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::incoming::use_cases::{
    SignupError, SignupRequest, SignupRequestError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Signup request from client. Every field is optional on the wire so that
/// missing keys surface as a validation error rather than a parse error.
#[derive(Deserialize, ToSchema)]
pub struct SignupRequestDto {
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,

    #[schema(example = "SecurePass123")]
    pub password: Option<String>,

    /// "applicant" or "recruiter"
    #[schema(example = "applicant")]
    pub role: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct SignupResponse {
    #[schema(example = "Signup successful")]
    pub message: String,
    pub user: SignedUpUser,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignedUpUser {
    #[schema(example = "ada@example.com")]
    pub email: String,

    #[schema(value_type = String, example = "applicant")]
    pub role: UserRole,

    /// Always true: the role profile is created with the account
    #[schema(example = true)]
    pub profile_created: bool,
}

/// Create an account
///
/// Registers a user with the given role and creates its empty role profile in
/// the same transaction.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "auth",
    request_body = SignupRequestDto,
    responses(
        (
            status = 201,
            description = "Signup successful",
            body = inline(SuccessResponse<SignupResponse>),
            example = json!({
                "success": true,
                "data": {
                    "message": "Signup successful",
                    "user": {
                        "email": "ada@example.com",
                        "role": "applicant",
                        "profileCreated": true
                    }
                }
            })
        ),
        (
            status = 400,
            description = "Missing or invalid fields, unknown role or duplicate email",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "code": "USER_ALREADY_EXISTS",
                "message": "User already exists"
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "code": "INTERNAL_ERROR",
                "message": "Internal server error"
            })
        ),
    )
)]
#[post("/api/auth/signup")]
pub async fn signup_user_handler(
    req: web::Json<SignupRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match SignupRequest::new(dto.email, dto.password, dto.role) {
        Ok(r) => r,
        Err(e) => {
            warn!(reason = %e, "Signup rejected");
            return match e {
                SignupRequestError::InvalidRole(_) => {
                    ApiResponse::bad_request("INVALID_ROLE", "Invalid role")
                }
                other => ApiResponse::bad_request("VALIDATION_ERROR", &other.to_string()),
            };
        }
    };

    match data.signup_user_use_case.execute(request).await {
        Ok(user) => {
            info!(user_id = %user.user_id, role = %user.role, "User signed up");
            ApiResponse::created(SignupResponse {
                message: "Signup successful".to_string(),
                user: SignedUpUser {
                    email: user.email,
                    role: user.role,
                    profile_created: true,
                },
            })
        }

        Err(SignupError::UserAlreadyExists) => {
            warn!("Signup attempted with an existing email");
            ApiResponse::bad_request("USER_ALREADY_EXISTS", "User already exists")
        }

        Err(e) => {
            error!(error = %e, "Signup failed");
            ApiResponse::internal_error()
        }
    }
}
