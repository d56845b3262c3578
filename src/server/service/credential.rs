//! Password hashing and bearer token issuance for manager accounts.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use sea_orm::DatabaseConnection;

use crate::server::data::manager::ManagerRepository;
use crate::server::error::auth::AuthError;
use crate::server::error::AppError;
use crate::server::model::auth::Claims;

const TOKEN_LIFETIME_HOURS: i64 = 2;
const BCRYPT_COST: u32 = 10;

pub struct CredentialService<'a> {
    db: &'a DatabaseConnection,
    jwt_secret: &'a str,
}

impl<'a> CredentialService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt_secret: &'a str) -> Self {
        Self { db, jwt_secret }
    }

    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        Ok(bcrypt::hash(password, BCRYPT_COST)?)
    }

    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        Ok(bcrypt::verify(password, hash)?)
    }

    /// Checks the credentials against the stored hash and returns a signed
    /// token on success. An unknown email is reported as not found, a known
    /// email with the wrong password as an authentication failure.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<String, AppError> {
        let Some(manager) = ManagerRepository::new(self.db).find_by_email(email).await? else {
            return Err(AppError::NotFound("Manager not found".to_string()));
        };

        if !self.verify_password(password, &manager.password)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.issue_token(email)
    }

    pub fn issue_token(&self, email: &str) -> Result<String, AppError> {
        let expires_at = Utc::now() + Duration::hours(TOKEN_LIFETIME_HOURS);
        let claims = Claims {
            manager_email: email.to_string(),
            exp: expires_at.timestamp() as usize,
        };

        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|err| AppError::InternalError(format!("Failed to sign token: {err}")))
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
    }
}
