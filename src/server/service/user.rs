use sea_orm::DatabaseConnection;

use crate::server::data;
use crate::server::data::user::UserRepository;
use crate::server::error::AppError;
use crate::server::model::user::{RegisterUserParams, User};
use crate::server::service::credential::CredentialService;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user with a hashed password and an empty booking list.
    /// The email must be unique; a duplicate is a conflict whether caught
    /// by the pre-check or by the unique index under a race.
    pub async fn register(
        &self,
        params: RegisterUserParams,
        credentials: &CredentialService<'_>,
    ) -> Result<User, AppError> {
        let repository = UserRepository::new(self.db);

        if repository.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict("User already exists".to_string()));
        }

        let password_hash = credentials.hash_password(&params.password)?;
        let created = match repository.insert(&params, password_hash).await {
            Ok(model) => model,
            Err(err) if data::is_unique_violation(&err) => {
                return Err(AppError::Conflict("User already exists".to_string()));
            }
            Err(err) => return Err(err.into()),
        };

        Ok(User::from_entity(created)?)
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).find_all().await?;

        users
            .into_iter()
            .map(|user| User::from_entity(user).map_err(AppError::from))
            .collect()
    }

    pub async fn get_by_email(&self, email: &str) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        Ok(User::from_entity(user)?)
    }
}
