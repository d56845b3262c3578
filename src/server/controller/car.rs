use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        car::{CarQueryDto, CreateCarDto, PatchCarDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::car::{CarFilter, CreateCarParams, PatchCarParams},
        service::car::CarService,
        state::AppState,
        util::links,
    },
};

/// Create a standalone car.
pub async fn create_car(
    State(state): State<AppState>,
    Json(payload): Json<CreateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateCarParams::from_dto(payload)?;

    let car = CarService::new(&state.db, &state.link_locks)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(car.into_dto(None))))
}

/// List cars, optionally filtered by color and brand and sorted by price.
pub async fn get_cars(
    State(state): State<AppState>,
    Query(query): Query<CarQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let filter = CarFilter::from_dto(query);

    let cars = CarService::new(&state.db, &state.link_locks)
        .get_all(&filter)
        .await?;

    let dtos: Vec<_> = cars.into_iter().map(|car| car.into_dto(None)).collect();

    Ok(Json(dtos))
}

pub async fn get_car(
    State(state): State<AppState>,
    Path(registration): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let car = CarService::new(&state.db, &state.link_locks)
        .get_by_registration(&registration)
        .await?;

    let car_links = links::car_links(&state.app_url, &car.registration);

    Ok(Json(car.into_dto(Some(car_links))))
}

/// Serve a car's stored image as decoded binary.
pub async fn get_car_image(
    State(state): State<AppState>,
    Path(registration): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bytes = CarService::new(&state.db, &state.link_locks)
        .get_image(&registration)
        .await?;

    Ok(([(header::CONTENT_TYPE, "image/png")], bytes))
}

/// Replace every field of a car.
pub async fn update_car(
    State(state): State<AppState>,
    Path(registration): Path<String>,
    Json(payload): Json<CreateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateCarParams::from_dto(payload)?;

    let car = CarService::new(&state.db, &state.link_locks)
        .update_full(&registration, params)
        .await?;

    Ok(Json(car.into_dto(None)))
}

/// Overwrite only the supplied fields of a car.
pub async fn patch_car(
    State(state): State<AppState>,
    Path(registration): Path<String>,
    Json(payload): Json<PatchCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = PatchCarParams::from_dto(payload)?;

    let car = CarService::new(&state.db, &state.link_locks)
        .update_partial(&registration, params)
        .await?;

    Ok(Json(car.into_dto(None)))
}

pub async fn delete_car(
    State(state): State<AppState>,
    Path(registration): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let car = CarService::new(&state.db, &state.link_locks)
        .delete_by_registration(&registration)
        .await?;

    Ok(Json(car.into_dto(None)))
}

/// Delete every car. Requires a valid manager bearer token; reports not
/// found when there is nothing to delete.
pub async fn delete_cars(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt_secret)
        .require(&headers)
        .await?;

    let deleted = CarService::new(&state.db, &state.link_locks)
        .delete_all()
        .await?;

    Ok(Json(MessageDto {
        message: format!("{deleted} cars deleted"),
    }))
}

/// List the cars owned by a manager.
pub async fn get_manager_cars(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let cars = CarService::new(&state.db, &state.link_locks)
        .get_for_manager(&email)
        .await?;

    let dtos: Vec<_> = cars.into_iter().map(|car| car.into_dto(None)).collect();

    Ok(Json(dtos))
}

/// Create a car under a manager and record it in the manager's car list.
pub async fn create_manager_car(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<CreateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateCarParams::from_dto(payload)?;

    let car = CarService::new(&state.db, &state.link_locks)
        .create_for_manager(&email, params)
        .await?;

    Ok((StatusCode::CREATED, Json(car.into_dto(None))))
}

pub async fn get_manager_car(
    State(state): State<AppState>,
    Path((email, registration)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let car = CarService::new(&state.db, &state.link_locks)
        .get_for_manager_by_registration(&email, &registration)
        .await?;

    Ok(Json(car.into_dto(None)))
}

pub async fn patch_manager_car(
    State(state): State<AppState>,
    Path((email, registration)): Path<(String, String)>,
    Json(payload): Json<PatchCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = PatchCarParams::from_dto(payload)?;

    let car = CarService::new(&state.db, &state.link_locks)
        .patch_for_manager(&email, &registration, params)
        .await?;

    Ok(Json(car.into_dto(None)))
}

/// Delete one of a manager's cars and retract it from the manager's list.
pub async fn delete_manager_car(
    State(state): State<AppState>,
    Path((email, registration)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let car = CarService::new(&state.db, &state.link_locks)
        .delete_for_manager(&email, &registration)
        .await?;

    Ok(Json(car.into_dto(None)))
}
