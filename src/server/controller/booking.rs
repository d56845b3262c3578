use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        booking::{CreateBookingDto, CreatedBookingDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::booking::CreateBookingParams,
        service::booking::BookingService,
        state::AppState,
        util::links,
    },
};

/// Create a booking.
///
/// Resolves the user by email and the car by registration, generates a
/// booking reference when none is supplied, and records the booking id in
/// the user's booking list.
///
/// # Returns
/// - `201 Created` - Booking with user and car resolved
/// - `404 Not Found` - Unknown user email or car registration
/// - `409 Conflict` - Supplied reference already in use
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateBookingParams::from_dto(payload)?;

    let booking = BookingService::new(&state.db, &state.link_locks)
        .create(params)
        .await?;

    let booking_links = links::booking_links(&state.app_url, &booking.booking_reference);
    let dto = CreatedBookingDto {
        message: "Booking created".to_string(),
        booking: booking.into_dto(Some(booking_links)),
    };

    Ok((StatusCode::CREATED, Json(dto)))
}

/// List all bookings with their car resolved.
pub async fn get_bookings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let bookings = BookingService::new(&state.db, &state.link_locks)
        .get_all()
        .await?;

    let dtos: Vec<_> = bookings
        .into_iter()
        .map(|booking| booking.into_dto(None))
        .collect();

    Ok(Json(dtos))
}

/// Get one booking by its reference.
pub async fn get_booking(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db, &state.link_locks)
        .get_by_reference(&reference)
        .await?;

    let booking_links = links::booking_links(&state.app_url, &booking.booking_reference);

    Ok(Json(booking.into_dto(Some(booking_links))))
}

/// Get the car attached to a booking.
pub async fn get_booking_car(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let car = BookingService::new(&state.db, &state.link_locks)
        .get_car_by_reference(&reference)
        .await?;

    Ok(Json(car.into_dto(None)))
}

/// Delete every booking and empty every user's booking list. Requires a
/// valid manager bearer token.
pub async fn delete_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt_secret)
        .require(&headers)
        .await?;

    BookingService::new(&state.db, &state.link_locks)
        .delete_all()
        .await?;

    Ok(Json(MessageDto {
        message: "All bookings deleted".to_string(),
    }))
}
