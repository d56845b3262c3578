use crate::server::{
    error::{auth::AuthError, AppError},
    service::credential::CredentialService,
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::manager::ManagerFactory;


const SECRET: &str = "test-secret";
