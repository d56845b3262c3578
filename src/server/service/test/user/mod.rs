use crate::server::{
    error::AppError,
    model::user::RegisterUserParams,
    service::{credential::CredentialService, user::UserService},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;


const SECRET: &str = "test-secret";

fn register_params(email: &str) -> RegisterUserParams {
    RegisterUserParams {
        email: email.to_string(),
        fname: "Ada".to_string(),
        lname: "Lovelace".to_string(),
        password: "password123".to_string(),
    }
}
