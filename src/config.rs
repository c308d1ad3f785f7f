//! Deployment configuration resolved at build time.
//!
//! DESIGN
//! ======
//! A WASM client has no process environment, so the API host is baked in at
//! compile time via `option_env!` and validated before any component can
//! fetch with it. Components receive the whole [`AppConfig`] through context
//! rather than reading globals, which keeps fetch targets testable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt;

/// Build-time environment variable naming the courseroom API origin.
pub const API_HOST_ENV: &str = "COURSEROOM_API_HOST";

/// Catalog page requested on the home page: first five courses.
pub const DEFAULT_CATALOG_WINDOW: PageWindow = PageWindow { offset: 0, limit: 5 };

/// Route a lesson row navigates to when opened.
pub const DEFAULT_LECTURE_ROUTE: &str = "/lecture";

/// An offset/limit slice of the course catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u32,
    pub limit: u32,
}

/// Validated client configuration, provided once via Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// API origin without a trailing slash (e.g. `https://api.example.com`).
    pub api_host: String,
    /// Catalog slice the home page requests.
    pub catalog_window: PageWindow,
    /// Destination for lesson navigation.
    pub lecture_route: String,
}

impl AppConfig {
    /// Builds a config from an API host string, normalizing and validating it.
    pub fn new(api_host: &str) -> Result<Self, ConfigError> {
        let host = api_host.trim().trim_end_matches('/');
        if host.is_empty() {
            return Err(ConfigError::MissingApiHost);
        }
        Ok(Self {
            api_host: host.to_owned(),
            catalog_window: DEFAULT_CATALOG_WINDOW,
            lecture_route: DEFAULT_LECTURE_ROUTE.to_owned(),
        })
    }

    /// Resolves the config from the compile-time environment.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(option_env!("COURSEROOM_API_HOST").unwrap_or(""))
    }
}

/// Why configuration resolution failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The API host variable was absent or blank at build time.
    MissingApiHost,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiHost => {
                write!(f, "{API_HOST_ENV} was not set when this client was built")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
