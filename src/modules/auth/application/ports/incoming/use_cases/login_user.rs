use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;

// ========================= Login Request =========================

#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Missing fields")]
    MissingFields,
}

impl LoginRequest {
    pub fn new(email: Option<String>, password: Option<String>) -> Result<Self, LoginRequestError> {
        match (email, password) {
            (Some(email), Some(password)) if !email.trim().is_empty() && !password.is_empty() => {
                Ok(Self {
                    email: email.trim().to_lowercase(),
                    password,
                })
            }
            _ => Err(LoginRequestError::MissingFields),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error / Result =============================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginError {
    /// Same variant for unknown email and wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginResult, LoginError>;
}
