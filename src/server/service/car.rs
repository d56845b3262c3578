use base64::Engine;
use sea_orm::DatabaseConnection;

use crate::server::data::car::CarRepository;
use crate::server::data::manager::ManagerRepository;
use crate::server::error::AppError;
use crate::server::model::car::{Car, CarFilter, CreateCarParams, PatchCarParams};
use crate::server::model::ids;
use crate::server::service::link::{LinkService, ParentLocks};

pub struct CarService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a ParentLocks,
}

impl<'a> CarService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a ParentLocks) -> Self {
        Self { db, locks }
    }

    pub async fn create(&self, params: CreateCarParams) -> Result<Car, AppError> {
        let created = CarRepository::new(self.db).insert(&params).await?;

        Ok(Car::from_entity(created))
    }

    /// Creates a car under a manager: the car row is inserted first, then
    /// its id is appended to the manager's list. The two writes are
    /// sequential; the link service serializes the second per manager.
    pub async fn create_for_manager(
        &self,
        manager_email: &str,
        params: CreateCarParams,
    ) -> Result<Car, AppError> {
        if ManagerRepository::new(self.db)
            .find_by_email(manager_email)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Manager not found!".to_string()));
        }

        let created = CarRepository::new(self.db).insert(&params).await?;
        LinkService::new(self.db, self.locks)
            .link_car_to_manager(manager_email, created.id)
            .await?;

        Ok(Car::from_entity(created))
    }

    pub async fn get_all(&self, filter: &CarFilter) -> Result<Vec<Car>, AppError> {
        let cars = CarRepository::new(self.db).find_all(filter).await?;

        Ok(cars.into_iter().map(Car::from_entity).collect())
    }

    pub async fn get_by_registration(&self, registration: &str) -> Result<Car, AppError> {
        let Some(car) = CarRepository::new(self.db)
            .find_by_registration(registration)
            .await?
        else {
            return Err(AppError::NotFound("Car not found".to_string()));
        };

        Ok(Car::from_entity(car))
    }

    /// Decodes the stored `data:` URL image into raw bytes for serving.
    pub async fn get_image(&self, registration: &str) -> Result<Vec<u8>, AppError> {
        let car = self.get_by_registration(registration).await?;

        let Some(image) = car.image else {
            return Err(AppError::NotFound("Car has no image".to_string()));
        };

        // Stored as "data:image/png;base64,<payload>"; a bare payload
        // without the prefix is accepted as-is.
        let payload = match image.split_once(',') {
            Some((_, payload)) => payload,
            None => image.as_str(),
        };

        base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|_| AppError::BadRequest("Car image is not valid base64".to_string()))
    }

    /// Resolves the manager's car-id list. Ids without a matching row are
    /// skipped silently.
    pub async fn get_for_manager(&self, manager_email: &str) -> Result<Vec<Car>, AppError> {
        let Some(manager) = ManagerRepository::new(self.db)
            .find_by_email(manager_email)
            .await?
        else {
            return Err(AppError::NotFound("Manager not found".to_string()));
        };

        let car_ids = ids::parse_id_list(&manager.cars)?;
        let cars = CarRepository::new(self.db).find_by_ids(&car_ids).await?;

        Ok(cars.into_iter().map(Car::from_entity).collect())
    }

    pub async fn get_for_manager_by_registration(
        &self,
        manager_email: &str,
        registration: &str,
    ) -> Result<Car, AppError> {
        let cars = self.get_for_manager(manager_email).await?;

        cars.into_iter()
            .find(|car| car.registration == registration)
            .ok_or_else(|| AppError::NotFound("Car not found for this manager".to_string()))
    }

    pub async fn update_full(
        &self,
        registration: &str,
        params: CreateCarParams,
    ) -> Result<Car, AppError> {
        let repository = CarRepository::new(self.db);

        let Some(car) = repository.find_by_registration(registration).await? else {
            return Err(AppError::NotFound("Car not found".to_string()));
        };

        let updated = repository.update_full(car, &params).await?;

        Ok(Car::from_entity(updated))
    }

    pub async fn update_partial(
        &self,
        registration: &str,
        params: PatchCarParams,
    ) -> Result<Car, AppError> {
        let repository = CarRepository::new(self.db);

        let Some(car) = repository.find_by_registration(registration).await? else {
            return Err(AppError::NotFound("Car not found".to_string()));
        };

        let updated = repository.update_partial(car, &params).await?;

        Ok(Car::from_entity(updated))
    }

    pub async fn patch_for_manager(
        &self,
        manager_email: &str,
        registration: &str,
        params: PatchCarParams,
    ) -> Result<Car, AppError> {
        let car = self
            .get_for_manager_by_registration(manager_email, registration)
            .await?;

        self.update_partial(&car.registration, params).await
    }

    pub async fn delete_by_registration(&self, registration: &str) -> Result<Car, AppError> {
        let repository = CarRepository::new(self.db);

        let Some(car) = repository.find_by_registration(registration).await? else {
            return Err(AppError::NotFound("Car not found".to_string()));
        };

        let deleted = Car::from_entity(car.clone());
        repository.delete(car).await?;

        Ok(deleted)
    }

    /// Deletes one of a manager's cars and retracts its id from the
    /// manager's list.
    pub async fn delete_for_manager(
        &self,
        manager_email: &str,
        registration: &str,
    ) -> Result<Car, AppError> {
        let car = self
            .get_for_manager_by_registration(manager_email, registration)
            .await?;
        let car_id = car.id;

        let deleted = self.delete_by_registration(&car.registration).await?;
        LinkService::new(self.db, self.locks)
            .unlink_car_from_manager(manager_email, car_id)
            .await?;

        Ok(deleted)
    }

    /// Deleting an empty collection reports not found rather than a
    /// zero count.
    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let deleted = CarRepository::new(self.db).delete_all().await?;

        if deleted == 0 {
            return Err(AppError::NotFound("There are no cars to delete".to_string()));
        }

        Ok(deleted)
    }
}
