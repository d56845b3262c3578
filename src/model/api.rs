use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Error payload returned for every failed request.
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub message: String,
}

/// Confirmation payload for operations that return no resource body.
#[derive(Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}

/// A single HATEOAS link.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LinkDto {
    pub href: String,
}

/// Named links attached to a resource representation.
pub type Links = HashMap<String, LinkDto>;
