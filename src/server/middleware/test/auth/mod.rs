use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    service::credential::CredentialService,
};
use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::manager::ManagerFactory;

mod require;

const SECRET: &str = "test-secret";

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, format!("Bearer {token}").parse().unwrap());
    headers
}
