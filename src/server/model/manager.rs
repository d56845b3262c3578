use sea_orm::DbErr;

use crate::{
    model::{
        api::Links,
        manager::{ManagerDto, PatchManagerDto, RegisterManagerDto, UpdateManagerDto},
    },
    server::{
        error::AppError,
        model::{ids, validate},
    },
};

/// Validated registration input; password is hashed by the credential
/// service before persistence.
#[derive(Debug, Clone)]
pub struct RegisterManagerParams {
    pub email: String,
    pub fname: String,
    pub lname: String,
    pub password: String,
    pub balance: f64,
    pub address: String,
}

impl RegisterManagerParams {
    pub fn from_dto(dto: RegisterManagerDto) -> Result<Self, AppError> {
        validate::email(&dto.email)?;
        validate::non_empty(&dto.fname, "First name cannot be empty")?;
        validate::non_empty(&dto.lname, "Last name cannot be empty")?;
        validate::password(&dto.password)?;

        Ok(Self {
            email: dto.email,
            fname: dto.fname,
            lname: dto.lname,
            password: dto.password,
            balance: dto.balance,
            address: dto.address,
        })
    }
}

/// Full replacement: every field overwrites unconditionally.
#[derive(Debug, Clone)]
pub struct UpdateManagerParams {
    pub email: String,
    pub fname: String,
    pub lname: String,
    pub password: String,
    pub balance: f64,
    pub address: String,
}

impl UpdateManagerParams {
    pub fn from_dto(dto: UpdateManagerDto) -> Result<Self, AppError> {
        validate::email(&dto.email)?;
        validate::password(&dto.password)?;

        Ok(Self {
            email: dto.email,
            fname: dto.fname,
            lname: dto.lname,
            password: dto.password,
            balance: dto.balance,
            address: dto.address,
        })
    }
}

/// Partial update: only supplied fields overwrite; a supplied password is
/// re-hashed, an absent one leaves the stored hash untouched.
#[derive(Debug, Clone, Default)]
pub struct PatchManagerParams {
    pub email: Option<String>,
    pub fname: Option<String>,
    pub lname: Option<String>,
    pub password: Option<String>,
    pub balance: Option<f64>,
    pub address: Option<String>,
}

impl PatchManagerParams {
    pub fn from_dto(dto: PatchManagerDto) -> Result<Self, AppError> {
        if let Some(email) = &dto.email {
            validate::email(email)?;
        }
        if let Some(password) = &dto.password {
            validate::password(password)?;
        }

        Ok(Self {
            email: dto.email,
            fname: dto.fname,
            lname: dto.lname,
            password: dto.password,
            balance: dto.balance,
            address: dto.address,
        })
    }
}

/// Manager domain model with the maintained car-id ownership list.
#[derive(Debug, Clone)]
pub struct Manager {
    pub id: i32,
    pub email: String,
    pub fname: String,
    pub lname: String,
    pub balance: f64,
    pub address: String,
    pub car_ids: Vec<i32>,
}

impl Manager {
    pub fn from_entity(entity: entity::manager::Model) -> Result<Self, DbErr> {
        let car_ids = ids::parse_id_list(&entity.cars)?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            fname: entity.fname,
            lname: entity.lname,
            balance: entity.balance,
            address: entity.address,
            car_ids,
        })
    }

    pub fn into_dto(self, links: Option<Links>) -> ManagerDto {
        ManagerDto {
            id: self.id,
            email: self.email,
            fname: self.fname,
            lname: self.lname,
            balance: self.balance,
            address: self.address,
            cars: self.car_ids,
            links,
        }
    }
}
