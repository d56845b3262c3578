use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::manager::ManagerRepository,
    error::{auth::AuthError, AppError},
    service::credential::CredentialService,
};

/// Bearer-token guard protecting the administrative reset routes. The
/// token must verify against the signing secret and name a manager that
/// still exists.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt_secret: &'a str,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt_secret: &'a str) -> Self {
        Self { db, jwt_secret }
    }

    pub async fn require(&self, headers: &HeaderMap) -> Result<entity::manager::Model, AppError> {
        let Some(value) = headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingToken.into());
        };

        let token = value
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AuthError::MissingToken)?;

        let claims = CredentialService::new(self.db, self.jwt_secret).verify_token(token)?;

        let Some(manager) = ManagerRepository::new(self.db)
            .find_by_email(&claims.manager_email)
            .await?
        else {
            return Err(AuthError::UnknownManager(claims.manager_email).into());
        };

        Ok(manager)
    }
}
