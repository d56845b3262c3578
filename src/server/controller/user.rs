use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::MessageDto, user::RegisterUserDto},
    server::{
        error::AppError,
        model::user::RegisterUserParams,
        service::{booking::BookingService, credential::CredentialService, user::UserService},
        state::AppState,
        util::links,
    },
};

/// Register a user.
///
/// # Returns
/// - `201 Created` - User with an empty booking list
/// - `400 Bad Request` - Validation failure
/// - `409 Conflict` - Email already registered
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterUserParams::from_dto(payload)?;

    let credentials = CredentialService::new(&state.db, &state.jwt_secret);
    let user = UserService::new(&state.db)
        .register(params, &credentials)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    let dtos: Vec<_> = users.into_iter().map(|user| user.into_dto()).collect();

    Ok(Json(dtos))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_by_email(&email).await?;

    Ok(Json(user.into_dto()))
}

/// List a user's bookings, each with user and car resolved.
pub async fn get_user_bookings(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = BookingService::new(&state.db, &state.link_locks)
        .get_for_user(&email)
        .await?;

    let dtos: Vec<_> = bookings
        .into_iter()
        .map(|booking| booking.into_dto(None))
        .collect();

    Ok(Json(dtos))
}

pub async fn get_user_booking(
    State(state): State<AppState>,
    Path((email, reference)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db, &state.link_locks)
        .get_for_user_by_reference(&email, &reference)
        .await?;

    let booking_links = links::user_booking_links(&state.app_url, &email, &reference);

    Ok(Json(booking.into_dto(Some(booking_links))))
}

pub async fn get_user_booking_car(
    State(state): State<AppState>,
    Path((email, reference)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let car = BookingService::new(&state.db, &state.link_locks)
        .get_car_for_user_by_reference(&email, &reference)
        .await?;

    Ok(Json(car.into_dto(None)))
}

/// Delete one of a user's bookings and retract it from the user's list.
pub async fn delete_user_booking(
    State(state): State<AppState>,
    Path((email, reference)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    BookingService::new(&state.db, &state.link_locks)
        .delete_for_user(&email, &reference)
        .await?;

    Ok(Json(MessageDto {
        message: "Booking deleted".to_string(),
    }))
}
