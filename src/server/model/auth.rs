use serde::{Deserialize, Serialize};

/// Claims carried by a manager bearer token.
///
/// `exp` is a unix timestamp two hours after issuance; jsonwebtoken rejects
/// the token once it has passed.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Claims {
    #[serde(rename = "managerEmail")]
    pub manager_email: String,
    pub exp: usize,
}
