use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter,
};

use crate::server::model::booking::CreateBookingParams;

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a booking referencing already-resolved internal ids. The
    /// unique index on the reference column backs this up under races.
    pub async fn insert(
        &self,
        reference: &str,
        user_id: i32,
        car_id: i32,
        params: &CreateBookingParams,
    ) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            booking_reference: ActiveValue::Set(reference.to_string()),
            user_id: ActiveValue::Set(user_id),
            car_id: ActiveValue::Set(car_id),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            status: ActiveValue::Set(params.status.clone()),
            content: ActiveValue::Set(params.content.clone()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn exists_by_reference(&self, reference: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::BookingReference.eq(reference))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn find_by_reference(
        &self,
        reference: &str,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::BookingReference.eq(reference))
            .one(self.db)
            .await
    }

    pub async fn find_by_reference_with_car(
        &self,
        reference: &str,
    ) -> Result<Option<(entity::booking::Model, Option<entity::car::Model>)>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::BookingReference.eq(reference))
            .find_also_related(entity::prelude::Car)
            .one(self.db)
            .await
    }

    /// Fetches a booking with both endpoints resolved. The user and car are
    /// fetched separately; either may be gone if it was deleted after the
    /// booking was created.
    pub async fn find_by_id_joined(
        &self,
        id: i32,
    ) -> Result<
        Option<(
            entity::booking::Model,
            Option<entity::user::Model>,
            Option<entity::car::Model>,
        )>,
        DbErr,
    > {
        let Some(booking) = entity::prelude::Booking::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let user = entity::prelude::User::find_by_id(booking.user_id)
            .one(self.db)
            .await?;
        let car = entity::prelude::Car::find_by_id(booking.car_id)
            .one(self.db)
            .await?;

        Ok(Some((booking, user, car)))
    }

    pub async fn find_all_with_car(
        &self,
    ) -> Result<Vec<(entity::booking::Model, Option<entity::car::Model>)>, DbErr> {
        entity::prelude::Booking::find()
            .find_also_related(entity::prelude::Car)
            .all(self.db)
            .await
    }

    pub async fn count_by_reference(&self, reference: &str) -> Result<u64, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::BookingReference.eq(reference))
            .count(self.db)
            .await
    }

    pub async fn delete(&self, booking: entity::booking::Model) -> Result<(), DbErr> {
        booking.delete(self.db).await?;

        Ok(())
    }

    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
