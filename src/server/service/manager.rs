use sea_orm::DatabaseConnection;

use crate::server::data;
use crate::server::data::manager::ManagerRepository;
use crate::server::error::AppError;
use crate::server::model::manager::{
    Manager, PatchManagerParams, RegisterManagerParams, UpdateManagerParams,
};
use crate::server::service::credential::CredentialService;

pub struct ManagerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ManagerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn register(
        &self,
        params: RegisterManagerParams,
        credentials: &CredentialService<'_>,
    ) -> Result<Manager, AppError> {
        let repository = ManagerRepository::new(self.db);

        if repository.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict("Manager already exists".to_string()));
        }

        let password_hash = credentials.hash_password(&params.password)?;
        let created = match repository.insert(&params, password_hash).await {
            Ok(model) => model,
            Err(err) if data::is_unique_violation(&err) => {
                return Err(AppError::Conflict("Manager already exists".to_string()));
            }
            Err(err) => return Err(err.into()),
        };

        Ok(Manager::from_entity(created)?)
    }

    pub async fn get_all(&self) -> Result<Vec<Manager>, AppError> {
        let managers = ManagerRepository::new(self.db).find_all().await?;

        managers
            .into_iter()
            .map(|manager| Manager::from_entity(manager).map_err(AppError::from))
            .collect()
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Manager, AppError> {
        let Some(manager) = ManagerRepository::new(self.db).find_by_email(email).await? else {
            return Err(AppError::NotFound("Manager not found".to_string()));
        };

        Ok(Manager::from_entity(manager)?)
    }

    /// Replaces every profile field of the manager addressed by `email`.
    /// Changing the email to one used by a different manager is a conflict;
    /// re-submitting the current email is allowed.
    pub async fn update_full(
        &self,
        email: &str,
        params: UpdateManagerParams,
        credentials: &CredentialService<'_>,
    ) -> Result<Manager, AppError> {
        let repository = ManagerRepository::new(self.db);

        let Some(manager) = repository.find_by_email(email).await? else {
            return Err(AppError::NotFound("Manager not found".to_string()));
        };

        if params.email != manager.email
            && repository.find_by_email(&params.email).await?.is_some()
        {
            return Err(AppError::Conflict(
                "Manager email already in use".to_string(),
            ));
        }

        let password_hash = credentials.hash_password(&params.password)?;
        let updated = repository.update_full(manager, &params, password_hash).await?;

        Ok(Manager::from_entity(updated)?)
    }

    pub async fn update_partial(
        &self,
        email: &str,
        params: PatchManagerParams,
        credentials: &CredentialService<'_>,
    ) -> Result<Manager, AppError> {
        let repository = ManagerRepository::new(self.db);

        let Some(manager) = repository.find_by_email(email).await? else {
            return Err(AppError::NotFound("Manager not found".to_string()));
        };

        if let Some(new_email) = &params.email {
            if *new_email != manager.email
                && repository.find_by_email(new_email).await?.is_some()
            {
                return Err(AppError::Conflict(
                    "Manager email already in use".to_string(),
                ));
            }
        }

        let password_hash = match &params.password {
            Some(password) => Some(credentials.hash_password(password)?),
            None => None,
        };
        let updated = repository
            .update_partial(manager, &params, password_hash)
            .await?;

        Ok(Manager::from_entity(updated)?)
    }

    pub async fn delete_by_email(&self, email: &str) -> Result<(), AppError> {
        let repository = ManagerRepository::new(self.db);

        let Some(manager) = repository.find_by_email(email).await? else {
            return Err(AppError::NotFound("manager email not found".to_string()));
        };

        repository.delete(manager).await?;

        Ok(())
    }

    pub async fn delete_all(&self) -> Result<u64, AppError> {
        Ok(ManagerRepository::new(self.db).delete_all().await?)
    }
}
