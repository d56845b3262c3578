use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};

use crate::server::model::car::{CarFilter, CreateCarParams, PatchCarParams, PriceSort};

pub struct CarRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(&self, params: &CreateCarParams) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            registration: ActiveValue::Set(params.registration.clone()),
            brand: ActiveValue::Set(params.brand.clone()),
            color: ActiveValue::Set(params.color.clone()),
            price: ActiveValue::Set(params.price),
            description: ActiveValue::Set(params.description.clone()),
            image: ActiveValue::Set(params.image.clone()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Lists cars with optional color/brand filters and a price sort.
    pub async fn find_all(&self, filter: &CarFilter) -> Result<Vec<entity::car::Model>, DbErr> {
        let mut query = entity::prelude::Car::find();

        if let Some(color) = &filter.color {
            query = query.filter(entity::car::Column::Color.eq(color));
        }
        if let Some(brand) = &filter.brand {
            query = query.filter(entity::car::Column::Brand.eq(brand));
        }

        query = match filter.sort {
            Some(PriceSort::Ascending) => query.order_by_asc(entity::car::Column::Price),
            Some(PriceSort::Descending) => query.order_by_desc(entity::car::Column::Price),
            None => query,
        };

        query.all(self.db).await
    }

    pub async fn find_by_registration(
        &self,
        registration: &str,
    ) -> Result<Option<entity::car::Model>, DbErr> {
        entity::prelude::Car::find()
            .filter(entity::car::Column::Registration.eq(registration))
            .one(self.db)
            .await
    }

    /// Resolves a manager's car-id list with one `IN` query. Ids without a
    /// matching car (a deleted car whose link was lost) are simply absent
    /// from the result.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::car::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Car::find()
            .filter(entity::car::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Full replacement of all car fields.
    pub async fn update_full(
        &self,
        car: entity::car::Model,
        params: &CreateCarParams,
    ) -> Result<entity::car::Model, DbErr> {
        let mut active: entity::car::ActiveModel = car.into();
        active.registration = ActiveValue::Set(params.registration.clone());
        active.brand = ActiveValue::Set(params.brand.clone());
        active.color = ActiveValue::Set(params.color.clone());
        active.price = ActiveValue::Set(params.price);
        active.description = ActiveValue::Set(params.description.clone());
        active.image = ActiveValue::Set(params.image.clone());
        active.update(self.db).await
    }

    /// Only-if-present overwrite of car fields.
    pub async fn update_partial(
        &self,
        car: entity::car::Model,
        params: &PatchCarParams,
    ) -> Result<entity::car::Model, DbErr> {
        let mut active: entity::car::ActiveModel = car.into();
        if let Some(registration) = &params.registration {
            active.registration = ActiveValue::Set(registration.clone());
        }
        if let Some(brand) = &params.brand {
            active.brand = ActiveValue::Set(Some(brand.clone()));
        }
        if let Some(color) = &params.color {
            active.color = ActiveValue::Set(Some(color.clone()));
        }
        if let Some(price) = params.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(description) = &params.description {
            active.description = ActiveValue::Set(Some(description.clone()));
        }
        if let Some(image) = &params.image {
            active.image = ActiveValue::Set(Some(image.clone()));
        }
        active.update(self.db).await
    }

    pub async fn delete(&self, car: entity::car::Model) -> Result<(), DbErr> {
        car.delete(self.db).await?;

        Ok(())
    }

    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Car::delete_many().exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
