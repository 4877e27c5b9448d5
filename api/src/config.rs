use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

/// Page size used when a listing request does not specify one
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Upper bound for the requested page size
pub const MAX_PAGE_SIZE: u64 = 2000;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub default_page_size: u64,
    pub max_page_size: u64,
    /// Create the books table (and its unique ISBN index) at startup when missing
    pub auto_create_schema: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let config = Self {
            database_url,
            port: parse_var("PORT", 8080)?,
            default_page_size: parse_var("DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE)?,
            max_page_size: parse_var("MAX_PAGE_SIZE", MAX_PAGE_SIZE)?,
            auto_create_schema: parse_var("AUTO_CREATE_SCHEMA", true)?,
        };
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_size == 0 {
            return Err(ConfigError::Invalid {
                name: "DEFAULT_PAGE_SIZE",
                value: "0".to_string(),
            });
        }
        if self.max_page_size < self.default_page_size {
            return Err(ConfigError::Invalid {
                name: "MAX_PAGE_SIZE",
                value: self.max_page_size.to_string(),
            });
        }
        Ok(())
    }
}

/// Read an optional variable, falling back to `default` when unset
fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}
