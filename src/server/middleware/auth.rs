use axum::http::{header::AUTHORIZATION, HeaderMap};
use jsonwebtoken::errors::ErrorKind;

use crate::server::{
    error::{auth::AuthError, AppError},
    service::admin::auth::{AdminAuthService, AdminClaims},
};

/// Guards admin routes behind an `Authorization: Bearer <token>` header.
pub struct AdminGuard<'a> {
    auth: &'a AdminAuthService,
    headers: &'a HeaderMap,
}

impl<'a> AdminGuard<'a> {
    pub fn new(auth: &'a AdminAuthService, headers: &'a HeaderMap) -> Self {
        Self { auth, headers }
    }

    /// Requires a valid admin token.
    ///
    /// A `Bearer ` prefix is stripped when present; any other header value is
    /// verified as-is.
    ///
    /// # Returns
    /// - `Ok(AdminClaims)` - Claims of the verified token
    /// - `Err(AuthError::MissingToken)` - Header absent or carrying an empty token
    /// - `Err(AuthError::InvalidToken)` - Header not UTF-8, or signature, expiry or
    ///   claims check failed
    pub fn require(&self) -> Result<AdminClaims, AppError> {
        let Some(value) = self.headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingToken.into());
        };
        let Ok(value) = value.to_str() else {
            return Err(AuthError::InvalidToken(ErrorKind::InvalidToken.into()).into());
        };

        let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
        if token.is_empty() {
            return Err(AuthError::MissingToken.into());
        }

        Ok(self.auth.verify_token(token)?)
    }
}
