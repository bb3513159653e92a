use crate::shared::config::{parse_or, required, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = required("JWT_SECRET")?;

        // HS256 requires at least 32 bytes of key material
        if secret_key.len() < 32 {
            return Err(ConfigError::OutOfRange(
                "JWT_SECRET must be at least 32 characters long for HS256 algorithm".to_string(),
            ));
        }

        let access_token_expiry = parse_or("JWT_ACCESS_EXPIRY", 3600i64)?;
        if access_token_expiry <= 0 || access_token_expiry > 86400 {
            return Err(ConfigError::OutOfRange(
                "JWT_ACCESS_EXPIRY must be between 1 and 86400 seconds (24 hours)".to_string(),
            ));
        }

        let issuer = std::env::var("JWT_ISSUER").unwrap_or_else(|_| "talent-search".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
