//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::appwrite::AppwriteConfig;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend settings read at startup
    pub appwrite: AppwriteConfig,

    /// Backend settings compiled into the client bundle
    pub bundled: AppwriteConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            appwrite: AppwriteConfig::from_env(),
            bundled: AppwriteConfig::from_build_env(),
        }
    }

    /// Check if the backend endpoint is configured
    pub fn has_backend_url(&self) -> bool {
        self.appwrite.url.is_some()
    }

    /// Check if the project id is configured
    pub fn has_project(&self) -> bool {
        self.appwrite.project_id.is_some()
    }

    /// Check if database and users collection are configured
    pub fn has_user_collection(&self) -> bool {
        self.appwrite.database_id.is_some() && self.appwrite.user_collection_id.is_some()
    }

    /// Whether the running environment agrees with the values in the bundle
    ///
    /// The forms talk to whatever was compiled in, so a mismatch means the
    /// bundle needs rebuilding.
    pub fn bundle_matches_env(&self) -> bool {
        self.appwrite == self.bundled
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
