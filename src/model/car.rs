use serde::{Deserialize, Serialize};

use crate::model::api::Links;

#[derive(Serialize, Deserialize, Clone)]
pub struct CreateCarDto {
    pub registration: String,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub price: f64,
    pub description: Option<String>,
    /// `data:`-prefixed base64 string.
    pub image: Option<String>,
}

/// Partial update payload for PATCH; absent fields are left untouched.
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct PatchCarDto {
    pub registration: Option<String>,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Query parameters for the car list: optional color/brand filters and a
/// price sort direction (`asc` or `desc`).
#[derive(Deserialize, Default)]
pub struct CarQueryDto {
    pub color: Option<String>,
    pub brand: Option<String>,
    pub sort: Option<String>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct CarDto {
    pub id: i32,
    pub registration: String,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub price: f64,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}
