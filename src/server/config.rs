use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_APP_URL: &str = "http://localhost:3000";

pub struct Config {
    pub database_url: String,

    /// Process-wide secret used to sign bearer tokens. Injected here at
    /// startup; business logic never reads the environment directly.
    pub jwt_secret: String,

    /// Base URL used when constructing HATEOAS links.
    pub app_url: String,

    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string(), raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            app_url: std::env::var("APP_URL").unwrap_or_else(|_| DEFAULT_APP_URL.to_string()),
            port,
        })
    }
}
