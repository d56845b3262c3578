use serde::{Deserialize, Serialize};

use crate::model::api::Links;

#[derive(Serialize, Deserialize, Clone)]
pub struct RegisterManagerDto {
    pub email: String,
    pub fname: String,
    pub lname: String,
    pub password: String,
    pub balance: f64,
    pub address: String,
}

/// Full replacement payload for PUT; every field overwrites.
#[derive(Serialize, Deserialize, Clone)]
pub struct UpdateManagerDto {
    pub email: String,
    pub fname: String,
    pub lname: String,
    pub password: String,
    pub balance: f64,
    pub address: String,
}

/// Partial update payload for PATCH; absent fields are left untouched.
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct PatchManagerDto {
    pub email: Option<String>,
    pub fname: Option<String>,
    pub lname: Option<String>,
    pub password: Option<String>,
    pub balance: Option<f64>,
    pub address: Option<String>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct AuthManagerDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct TokenDto {
    pub message: String,
    pub token: String,
}

/// Manager representation. The password hash is never echoed.
#[derive(Serialize, Deserialize, Clone)]
pub struct ManagerDto {
    pub id: i32,
    pub email: String,
    pub fname: String,
    pub lname: String,
    pub balance: f64,
    pub address: String,
    pub cars: Vec<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}
