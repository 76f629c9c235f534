//! Admin password verification and session tokens.
//!
//! The admin password is never stored; only its SHA-256 hex digest is configured.
//! A successful login yields an HS256 JWT valid for 24 hours carrying
//! `{admin: true, iat, exp}`. Tokens are stateless, so logout is a client-side
//! discard.

use std::sync::Arc;

use chrono::Utc;
use dioxus_logger::tracing;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{
    model::admin::{AdminClaimsDto, MIN_PASSWORD_LENGTH},
    server::{
        config::Config,
        error::{auth::AuthError, internal::InternalError, AppError},
    },
};

/// Token lifetime in seconds.
pub const TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;

/// Claims carried by an admin token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminClaims {
    pub admin: bool,
    pub iat: i64,
    pub exp: i64,
}

impl AdminClaims {
    pub fn into_dto(self) -> AdminClaimsDto {
        AdminClaimsDto {
            admin: self.admin,
            iat: self.iat,
            exp: self.exp,
        }
    }
}

/// A freshly signed admin token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// Seconds until the token expires.
    pub expires_in: i64,
}

/// Lowercase hex SHA-256 digest of `password`.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Verifies admin passwords and signs/validates admin tokens.
///
/// Cheap to clone; keys are shared.
#[derive(Clone)]
pub struct AdminAuthService {
    password_hash: Arc<str>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AdminAuthService {
    /// Creates the service from the configured password hash and signing secret.
    ///
    /// # Arguments
    /// - `password_hash` - Lowercase hex SHA-256 of the admin password
    /// - `jwt_secret` - HMAC secret for HS256
    pub fn new(password_hash: &str, jwt_secret: &str) -> Self {
        Self {
            password_hash: Arc::from(password_hash.to_lowercase()),
            encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.admin_password_hash, &config.jwt_secret)
    }

    /// Checks an admin password and issues a token on success.
    ///
    /// # Arguments
    /// - `password` - Password from the login request, if any
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Password matched
    /// - `Err(AuthError::PasswordRequired)` - No or empty password
    /// - `Err(AuthError::PasswordTooShort)` - Fewer than 12 characters
    /// - `Err(AuthError::IncorrectPassword)` - Digest does not match
    /// - `Err(AppError::InternalErr)` - Token could not be signed
    pub fn login(&self, password: Option<&str>) -> Result<IssuedToken, AppError> {
        let password = match password {
            Some(password) if !password.is_empty() => password,
            _ => return Err(AuthError::PasswordRequired.into()),
        };

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooShort.into());
        }

        if hash_password(password) != *self.password_hash {
            tracing::warn!("Failed admin login attempt");
            return Err(AuthError::IncorrectPassword.into());
        }

        let token = self.issue_token()?;

        tracing::info!("Admin logged in");

        Ok(token)
    }

    /// Signs a token issued now.
    pub fn issue_token(&self) -> Result<IssuedToken, AppError> {
        self.issue_token_at(Utc::now().timestamp())
    }

    /// Signs a token as if issued at `iat` (Unix seconds).
    pub fn issue_token_at(&self, iat: i64) -> Result<IssuedToken, AppError> {
        let claims = AdminClaims {
            admin: true,
            iat,
            exp: iat + TOKEN_TTL_SECONDS,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(InternalError::TokenSigning)?;

        Ok(IssuedToken {
            token,
            expires_in: TOKEN_TTL_SECONDS,
        })
    }

    /// Validates signature, expiry and the admin claim of a token.
    ///
    /// # Returns
    /// - `Ok(AdminClaims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, malformed or not admin
    pub fn verify_token(&self, token: &str) -> Result<AdminClaims, AuthError> {
        let data = decode::<AdminClaims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )
        .map_err(AuthError::InvalidToken)?;

        if !data.claims.admin {
            return Err(AuthError::InvalidToken(ErrorKind::InvalidToken.into()));
        }

        Ok(data.claims)
    }
}
