use sea_orm::DbErr;

use crate::{
    model::user::{RegisterUserDto, UserDto},
    server::{
        error::AppError,
        model::{ids, validate},
    },
};

/// Validated registration input. The password is still plaintext here; the
/// credential service hashes it before anything is persisted.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub email: String,
    pub fname: String,
    pub lname: String,
    pub password: String,
}

impl RegisterUserParams {
    pub fn from_dto(dto: RegisterUserDto) -> Result<Self, AppError> {
        validate::email(&dto.email)?;
        validate::non_empty(&dto.fname, "First name cannot be empty")?;
        validate::non_empty(&dto.lname, "Last name cannot be empty")?;
        validate::password(&dto.password)?;

        Ok(Self {
            email: dto.email,
            fname: dto.fname,
            lname: dto.lname,
            password: dto.password,
        })
    }
}

/// User domain model with the maintained booking-id back-reference list.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub fname: String,
    pub lname: String,
    pub booking_ids: Vec<i32>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let booking_ids = ids::parse_id_list(&entity.bookings)?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            fname: entity.fname,
            lname: entity.lname,
            booking_ids,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            fname: self.fname,
            lname: self.lname,
            bookings: self.booking_ids,
        }
    }
}
