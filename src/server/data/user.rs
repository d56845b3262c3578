use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use sea_orm::sea_query::Expr;

use crate::server::model::{ids, user::RegisterUserParams};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with an empty booking list. The password hash is
    /// produced by the credential service; the plaintext never reaches the
    /// data layer.
    pub async fn insert(
        &self,
        params: &RegisterUserParams,
        password_hash: String,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            email: ActiveValue::Set(params.email.clone()),
            fname: ActiveValue::Set(params.fname.clone()),
            lname: ActiveValue::Set(params.lname.clone()),
            password: ActiveValue::Set(password_hash),
            bookings: ActiveValue::Set(ids::empty_id_list()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Email)
            .all(self.db)
            .await
    }

    /// Replaces the user's booking-id list. Callers serialize per-user via
    /// the link service; this method itself is a plain overwrite.
    pub async fn set_booking_ids(
        &self,
        user: entity::user::Model,
        booking_ids: &[i32],
    ) -> Result<entity::user::Model, DbErr> {
        let mut active: entity::user::ActiveModel = user.into();
        active.bookings = ActiveValue::Set(ids::id_list_value(booking_ids));
        active.update(self.db).await
    }

    /// Empties every user's booking list in one statement. Used by the
    /// bulk booking reset so no list keeps ids of deleted bookings.
    pub async fn clear_all_booking_lists(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::Bookings,
                Expr::value(ids::empty_id_list()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
