//! HATEOAS link builders. Pure functions from the configured base URL and
//! route context to a named link map.

use std::collections::HashMap;

use crate::model::api::{LinkDto, Links};

fn link(href: String) -> LinkDto {
    LinkDto { href }
}

pub fn booking_links(base_url: &str, reference: &str) -> Links {
    let mut links = HashMap::new();
    links.insert(
        "self".to_string(),
        link(format!("{base_url}/api/v1/bookings/{reference}")),
    );
    links.insert(
        "car".to_string(),
        link(format!("{base_url}/api/v1/bookings/{reference}/car")),
    );
    links
}

pub fn user_booking_links(base_url: &str, email: &str, reference: &str) -> Links {
    let mut links = HashMap::new();
    links.insert(
        "self".to_string(),
        link(format!("{base_url}/api/v1/users/{email}/bookings/{reference}")),
    );
    links.insert(
        "car".to_string(),
        link(format!(
            "{base_url}/api/v1/users/{email}/bookings/{reference}/car"
        )),
    );
    links
}

pub fn manager_links(base_url: &str, email: &str) -> Links {
    let mut links = HashMap::new();
    links.insert(
        "self".to_string(),
        link(format!("{base_url}/api/v1/managers/{email}/cars")),
    );
    links
}

pub fn car_links(base_url: &str, registration: &str) -> Links {
    let mut links = HashMap::new();
    links.insert(
        "self".to_string(),
        link(format!("{base_url}/api/v1/cars/{registration}")),
    );
    links.insert(
        "image".to_string(),
        link(format!("{base_url}/api/v1/cars/{registration}/image")),
    );
    links
}
