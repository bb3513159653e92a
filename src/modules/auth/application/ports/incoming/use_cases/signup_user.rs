use async_trait::async_trait;
use email_address::EmailAddress;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;

pub const MIN_PASSWORD_LENGTH: usize = 8;

//
// ──────────────────────────────────────────────────────────
// Validated request
// ──────────────────────────────────────────────────────────
//

/// Signup input that has passed validation: normalized email, acceptable
/// password, closed role.
#[derive(Debug, Clone)]
pub struct SignupRequest {
    email: String,
    password: String,
    role: UserRole,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SignupRequestError {
    #[error("Missing fields")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("Invalid role")]
    InvalidRole(String),
}

impl SignupRequest {
    pub fn new(
        email: Option<String>,
        password: Option<String>,
        role: Option<String>,
    ) -> Result<Self, SignupRequestError> {
        let (email, password, role) = match (email, password, role) {
            (Some(e), Some(p), Some(r))
                if !e.trim().is_empty() && !p.is_empty() && !r.trim().is_empty() =>
            {
                (e, p, r)
            }
            _ => return Err(SignupRequestError::MissingFields),
        };

        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(SignupRequestError::InvalidEmailFormat);
        }

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(SignupRequestError::PasswordTooShort);
        }

        let role = role
            .trim()
            .parse::<UserRole>()
            .map_err(|e| SignupRequestError::InvalidRole(e.0))?;

        Ok(Self {
            email,
            password,
            role,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn role(&self) -> UserRole {
        self.role
    }
}

//
// ──────────────────────────────────────────────────────────
// Result / Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SignupResult {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SignupError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SignupUserUseCase: Send + Sync {
    async fn execute(&self, request: SignupRequest) -> Result<SignupResult, SignupError>;
}
