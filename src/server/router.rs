use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{booking, car, manager, user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/bookings",
            post(booking::create_booking)
                .get(booking::get_bookings)
                .delete(booking::delete_bookings),
        )
        .route("/api/v1/bookings/{reference}", get(booking::get_booking))
        .route(
            "/api/v1/bookings/{reference}/car",
            get(booking::get_booking_car),
        )
        .route("/api/v1/users", post(user::register_user).get(user::get_users))
        .route("/api/v1/users/{email}", get(user::get_user))
        .route("/api/v1/users/{email}/bookings", get(user::get_user_bookings))
        .route(
            "/api/v1/users/{email}/bookings/{reference}",
            get(user::get_user_booking).delete(user::delete_user_booking),
        )
        .route(
            "/api/v1/users/{email}/bookings/{reference}/car",
            get(user::get_user_booking_car),
        )
        .route(
            "/api/v1/managers",
            post(manager::register_manager)
                .get(manager::get_managers)
                .delete(manager::delete_managers),
        )
        .route("/api/v1/managers/auth", post(manager::authenticate_manager))
        .route(
            "/api/v1/managers/{email}",
            get(manager::get_manager)
                .put(manager::update_manager)
                .patch(manager::patch_manager)
                .delete(manager::delete_manager),
        )
        .route(
            "/api/v1/managers/{email}/cars",
            get(car::get_manager_cars).post(car::create_manager_car),
        )
        .route(
            "/api/v1/managers/{email}/cars/{registration}",
            get(car::get_manager_car)
                .patch(car::patch_manager_car)
                .delete(car::delete_manager_car),
        )
        .route(
            "/api/v1/cars",
            post(car::create_car).get(car::get_cars).delete(car::delete_cars),
        )
        .route(
            "/api/v1/cars/{registration}",
            get(car::get_car)
                .put(car::update_car)
                .patch(car::patch_car)
                .delete(car::delete_car),
        )
        .route(
            "/api/v1/cars/{registration}/image",
            get(car::get_car_image),
        )
}
