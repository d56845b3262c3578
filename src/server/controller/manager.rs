use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        manager::{AuthManagerDto, PatchManagerDto, RegisterManagerDto, TokenDto, UpdateManagerDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::manager::{PatchManagerParams, RegisterManagerParams, UpdateManagerParams},
        service::{credential::CredentialService, manager::ManagerService},
        state::AppState,
        util::links,
    },
};

/// Register a manager.
///
/// # Returns
/// - `201 Created` - Manager with an empty car list
/// - `400 Bad Request` - Validation failure
/// - `409 Conflict` - Email already registered
pub async fn register_manager(
    State(state): State<AppState>,
    Json(payload): Json<RegisterManagerDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterManagerParams::from_dto(payload)?;

    let credentials = CredentialService::new(&state.db, &state.jwt_secret);
    let manager = ManagerService::new(&state.db)
        .register(params, &credentials)
        .await?;

    Ok((StatusCode::CREATED, Json(manager.into_dto(None))))
}

/// Exchange manager credentials for a signed bearer token.
///
/// # Returns
/// - `200 OK` - Token valid for two hours
/// - `404 Not Found` - Unknown email
/// - `401 Unauthorized` - Wrong password
pub async fn authenticate_manager(
    State(state): State<AppState>,
    Json(payload): Json<AuthManagerDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = CredentialService::new(&state.db, &state.jwt_secret)
        .authenticate(&payload.email, &payload.password)
        .await?;

    Ok(Json(TokenDto {
        message: "Authentication successful".to_string(),
        token,
    }))
}

pub async fn get_managers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let managers = ManagerService::new(&state.db).get_all().await?;

    let dtos: Vec<_> = managers
        .into_iter()
        .map(|manager| manager.into_dto(None))
        .collect();

    Ok(Json(dtos))
}

pub async fn get_manager(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let manager = ManagerService::new(&state.db).get_by_email(&email).await?;

    let manager_links = links::manager_links(&state.app_url, &manager.email);

    Ok(Json(manager.into_dto(Some(manager_links))))
}

/// Replace every profile field of a manager.
pub async fn update_manager(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<UpdateManagerDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateManagerParams::from_dto(payload)?;

    let credentials = CredentialService::new(&state.db, &state.jwt_secret);
    let manager = ManagerService::new(&state.db)
        .update_full(&email, params, &credentials)
        .await?;

    Ok(Json(manager.into_dto(None)))
}

/// Overwrite only the supplied fields of a manager.
pub async fn patch_manager(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<PatchManagerDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = PatchManagerParams::from_dto(payload)?;

    let credentials = CredentialService::new(&state.db, &state.jwt_secret);
    let manager = ManagerService::new(&state.db)
        .update_partial(&email, params, &credentials)
        .await?;

    Ok(Json(manager.into_dto(None)))
}

pub async fn delete_manager(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    ManagerService::new(&state.db).delete_by_email(&email).await?;

    Ok(Json(MessageDto {
        message: "Manager deleted".to_string(),
    }))
}

/// Delete every manager. Requires a valid manager bearer token.
pub async fn delete_managers(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt_secret)
        .require(&headers)
        .await?;

    let deleted = ManagerService::new(&state.db).delete_all().await?;

    Ok(Json(MessageDto {
        message: format!("{deleted} managers deleted"),
    }))
}
