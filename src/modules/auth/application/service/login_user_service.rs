use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::ports::incoming::use_cases::{
    LoginError, LoginRequest, LoginResult, LoginUserUseCase,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};

pub struct LoginUserService<Q, H>
where
    Q: UserQuery,
    H: PasswordHasher,
{
    user_query: Q,
    password_hasher: H,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, H> LoginUserService<Q, H>
where
    Q: UserQuery,
    H: PasswordHasher,
{
    pub fn new(
        user_query: Q,
        password_hasher: H,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            user_query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, H> LoginUserUseCase for LoginUserService<Q, H>
where
    Q: UserQuery + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginResult, LoginError> {
        let user = match self
            .user_query
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
        {
            Some(user) => user,
            None => {
                warn!("Login failed: unknown email");
                return Err(LoginError::InvalidCredentials);
            }
        };

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .token_provider
            .generate_access_token(user.id, user.role)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = %user.id, role = %user.role, "User logged in");

        Ok(LoginResult {
            token,
            user_id: user.id,
            email: user.email,
            role: user.role,
        })
    }
}
