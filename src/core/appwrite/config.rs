//! Backend connection settings
//!
//! The browser bundle cannot read the environment at runtime, so the values
//! are captured at build time with `option_env!`. The server reads the same
//! variable names at startup (see `core::config`).

use super::error::AppwriteError;

pub const ENV_URL: &str = "APPWRITE_URL";
pub const ENV_PROJECT_ID: &str = "APPWRITE_PROJECT_ID";
pub const ENV_DATABASE_ID: &str = "APPWRITE_DATABASE_ID";
pub const ENV_USER_COLLECTION_ID: &str = "APPWRITE_USER_COLLECTION_ID";

/// Backend endpoint and resource identifiers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppwriteConfig {
    /// API root, e.g. `https://cloud.appwrite.io/v1`
    pub url: Option<String>,
    pub project_id: Option<String>,
    pub database_id: Option<String>,
    /// Collection holding one profile document per account
    pub user_collection_id: Option<String>,
}

impl AppwriteConfig {
    /// Settings baked into the binary at compile time
    pub fn from_build_env() -> Self {
        Self {
            url: option_env!("APPWRITE_URL").map(str::to_string),
            project_id: option_env!("APPWRITE_PROJECT_ID").map(str::to_string),
            database_id: option_env!("APPWRITE_DATABASE_ID").map(str::to_string),
            user_collection_id: option_env!("APPWRITE_USER_COLLECTION_ID").map(str::to_string),
        }
    }

    /// Settings read from the process environment
    pub fn from_env() -> Self {
        Self {
            url: std::env::var(ENV_URL).ok(),
            project_id: std::env::var(ENV_PROJECT_ID).ok(),
            database_id: std::env::var(ENV_DATABASE_ID).ok(),
            user_collection_id: std::env::var(ENV_USER_COLLECTION_ID).ok(),
        }
    }

    /// API root without a trailing slash
    pub fn endpoint(&self) -> Result<&str, AppwriteError> {
        self.url
            .as_deref()
            .map(|u| u.trim_end_matches('/'))
            .ok_or(AppwriteError::NotConfigured(ENV_URL))
    }

    pub fn project(&self) -> Result<&str, AppwriteError> {
        self.project_id
            .as_deref()
            .ok_or(AppwriteError::NotConfigured(ENV_PROJECT_ID))
    }

    pub fn database(&self) -> Result<&str, AppwriteError> {
        self.database_id
            .as_deref()
            .ok_or(AppwriteError::NotConfigured(ENV_DATABASE_ID))
    }

    pub fn user_collection(&self) -> Result<&str, AppwriteError> {
        self.user_collection_id
            .as_deref()
            .ok_or(AppwriteError::NotConfigured(ENV_USER_COLLECTION_ID))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> AppwriteConfig {
        AppwriteConfig {
            url: Some("https://cloud.appwrite.io/v1/".to_string()),
            project_id: Some("snapgram".to_string()),
            database_id: Some("main".to_string()),
            user_collection_id: Some("users".to_string()),
        }
    }

    #[test]
    fn test_complete_config() {
        let config = full();
        assert_eq!(config.project().unwrap(), "snapgram");
        assert_eq!(config.database().unwrap(), "main");
        assert_eq!(config.user_collection().unwrap(), "users");
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        assert_eq!(full().endpoint().unwrap(), "https://cloud.appwrite.io/v1");
    }

    #[test]
    fn test_missing_values_name_the_variable() {
        let config = AppwriteConfig::default();

        assert_eq!(
            config.endpoint(),
            Err(AppwriteError::NotConfigured("APPWRITE_URL"))
        );
        assert_eq!(
            config.user_collection(),
            Err(AppwriteError::NotConfigured("APPWRITE_USER_COLLECTION_ID"))
        );
    }

    #[test]
    fn test_partial_config_fails_only_on_missing_value() {
        let config = AppwriteConfig {
            database_id: None,
            ..full()
        };
        assert!(config.endpoint().is_ok());
        assert_eq!(
            config.database(),
            Err(AppwriteError::NotConfigured("APPWRITE_DATABASE_ID"))
        );
    }
}
