use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    ids,
    manager::{PatchManagerParams, RegisterManagerParams, UpdateManagerParams},
};

pub struct ManagerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ManagerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new manager with an empty car list.
    pub async fn insert(
        &self,
        params: &RegisterManagerParams,
        password_hash: String,
    ) -> Result<entity::manager::Model, DbErr> {
        entity::manager::ActiveModel {
            email: ActiveValue::Set(params.email.clone()),
            fname: ActiveValue::Set(params.fname.clone()),
            lname: ActiveValue::Set(params.lname.clone()),
            password: ActiveValue::Set(password_hash),
            balance: ActiveValue::Set(params.balance),
            address: ActiveValue::Set(params.address.clone()),
            cars: ActiveValue::Set(ids::empty_id_list()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::manager::Model>, DbErr> {
        entity::prelude::Manager::find()
            .filter(entity::manager::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::manager::Model>, DbErr> {
        entity::prelude::Manager::find_by_id(id).one(self.db).await
    }

    pub async fn find_all(&self) -> Result<Vec<entity::manager::Model>, DbErr> {
        entity::prelude::Manager::find()
            .order_by_asc(entity::manager::Column::Email)
            .all(self.db)
            .await
    }

    /// Full replacement of profile fields; the password hash has already
    /// been recomputed by the credential service.
    pub async fn update_full(
        &self,
        manager: entity::manager::Model,
        params: &UpdateManagerParams,
        password_hash: String,
    ) -> Result<entity::manager::Model, DbErr> {
        let mut active: entity::manager::ActiveModel = manager.into();
        active.email = ActiveValue::Set(params.email.clone());
        active.fname = ActiveValue::Set(params.fname.clone());
        active.lname = ActiveValue::Set(params.lname.clone());
        active.password = ActiveValue::Set(password_hash);
        active.balance = ActiveValue::Set(params.balance);
        active.address = ActiveValue::Set(params.address.clone());
        active.update(self.db).await
    }

    /// Only-if-present overwrite; a `None` password keeps the stored hash.
    pub async fn update_partial(
        &self,
        manager: entity::manager::Model,
        params: &PatchManagerParams,
        password_hash: Option<String>,
    ) -> Result<entity::manager::Model, DbErr> {
        let mut active: entity::manager::ActiveModel = manager.into();
        if let Some(email) = &params.email {
            active.email = ActiveValue::Set(email.clone());
        }
        if let Some(fname) = &params.fname {
            active.fname = ActiveValue::Set(fname.clone());
        }
        if let Some(lname) = &params.lname {
            active.lname = ActiveValue::Set(lname.clone());
        }
        if let Some(hash) = password_hash {
            active.password = ActiveValue::Set(hash);
        }
        if let Some(balance) = params.balance {
            active.balance = ActiveValue::Set(balance);
        }
        if let Some(address) = &params.address {
            active.address = ActiveValue::Set(address.clone());
        }
        active.update(self.db).await
    }

    /// Replaces the manager's car-id list. Callers serialize per-manager
    /// via the link service.
    pub async fn set_car_ids(
        &self,
        manager: entity::manager::Model,
        car_ids: &[i32],
    ) -> Result<entity::manager::Model, DbErr> {
        let mut active: entity::manager::ActiveModel = manager.into();
        active.cars = ActiveValue::Set(ids::id_list_value(car_ids));
        active.update(self.db).await
    }

    pub async fn delete(&self, manager: entity::manager::Model) -> Result<(), DbErr> {
        manager.delete(self.db).await?;

        Ok(())
    }

    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Manager::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
