use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct RegisterUserDto {
    pub email: String,
    pub fname: String,
    pub lname: String,
    pub password: String,
}

/// User representation. The password hash is never echoed.
#[derive(Serialize, Deserialize, Clone)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub fname: String,
    pub lname: String,
    pub bookings: Vec<i32>,
}
