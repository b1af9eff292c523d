//! Request construction for the backend REST API
//!
//! Builders here are pure: they turn config and form values into a method,
//! URL and JSON body. Sending is left to a [`super::Transport`].

use url::Url;

use super::config::AppwriteConfig;
use super::error::AppwriteError;
use super::models::{
    CreateAccountRequest, CreateDocumentRequest, EmailSessionRequest, NewUserDocument,
};
use crate::core::validation::{Credentials, SignUpInput};

/// Header carrying the project id on every request
pub const PROJECT_HEADER: &str = "X-Appwrite-Project";

/// Header used to mirror session cookies when the browser blocks them
pub const FALLBACK_COOKIES_HEADER: &str = "X-Fallback-Cookies";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// A fully resolved backend request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub project_id: String,
    /// JSON body, if any
    pub body: Option<String>,
}

impl ApiRequest {
    fn new(config: &AppwriteConfig, method: Method, path: &str) -> Result<Self, AppwriteError> {
        let url = Url::parse(&format!("{}{}", config.endpoint()?, path))?;
        Ok(Self {
            method,
            url,
            project_id: config.project()?.to_string(),
            body: None,
        })
    }

    fn with_json<T: serde::Serialize>(mut self, body: &T) -> Result<Self, AppwriteError> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }

    fn with_query(mut self, key: &str, value: &str) -> Self {
        self.url.query_pairs_mut().append_pair(key, value);
        self
    }

    /// `POST /account`
    pub fn create_account(
        config: &AppwriteConfig,
        user_id: &str,
        input: &SignUpInput,
    ) -> Result<Self, AppwriteError> {
        Self::new(config, Method::Post, "/account")?.with_json(&CreateAccountRequest {
            user_id,
            email: &input.email,
            password: &input.password,
            name: &input.name,
        })
    }

    /// `POST /account/sessions/email`
    pub fn create_email_session(
        config: &AppwriteConfig,
        credentials: &Credentials,
    ) -> Result<Self, AppwriteError> {
        Self::new(config, Method::Post, "/account/sessions/email")?.with_json(
            &EmailSessionRequest {
                email: &credentials.email,
                password: &credentials.password,
            },
        )
    }

    /// `GET /account`
    pub fn get_account(config: &AppwriteConfig) -> Result<Self, AppwriteError> {
        Self::new(config, Method::Get, "/account")
    }

    /// `DELETE /account/sessions/current`
    pub fn delete_current_session(config: &AppwriteConfig) -> Result<Self, AppwriteError> {
        Self::new(config, Method::Delete, "/account/sessions/current")
    }

    /// `POST /databases/{db}/collections/{users}/documents`
    pub fn create_user_document(
        config: &AppwriteConfig,
        document_id: &str,
        data: &NewUserDocument,
    ) -> Result<Self, AppwriteError> {
        let path = documents_path(config)?;
        Self::new(config, Method::Post, &path)?.with_json(&CreateDocumentRequest {
            document_id,
            data,
        })
    }

    /// `GET /databases/{db}/collections/{users}/documents` filtered by account
    pub fn list_users_by_account(
        config: &AppwriteConfig,
        account_id: &str,
    ) -> Result<Self, AppwriteError> {
        let path = documents_path(config)?;
        let filter = equal_query("accountId", account_id)?;
        Ok(Self::new(config, Method::Get, &path)?.with_query("queries[]", &filter))
    }
}

fn documents_path(config: &AppwriteConfig) -> Result<String, AppwriteError> {
    Ok(format!(
        "/databases/{}/collections/{}/documents",
        config.database()?,
        config.user_collection()?
    ))
}

/// Query string filter in the backend's `equal("attr", [value])` syntax
fn equal_query(attribute: &str, value: &str) -> Result<String, AppwriteError> {
    Ok(format!(
        "equal({}, [{}])",
        serde_json::to_string(attribute)?,
        serde_json::to_string(value)?
    ))
}

/// Public URL of the generated initials avatar for a display name
pub fn avatar_initials_url(config: &AppwriteConfig, name: &str) -> Result<Url, AppwriteError> {
    let mut url = Url::parse(&format!("{}/avatars/initials", config.endpoint()?))?;
    url.query_pairs_mut()
        .append_pair("name", name)
        .append_pair("project", config.project()?);
    Ok(url)
}

/// Fresh identifier for accounts and documents
pub fn unique_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppwriteConfig {
        AppwriteConfig {
            url: Some("https://cloud.appwrite.io/v1".to_string()),
            project_id: Some("snapgram".to_string()),
            database_id: Some("main".to_string()),
            user_collection_id: Some("users".to_string()),
        }
    }

    fn body(request: &ApiRequest) -> serde_json::Value {
        serde_json::from_str(request.body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn test_create_account_request() {
        let input = SignUpInput {
            name: "Ada".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "analytical".to_string(),
        };
        let request = ApiRequest::create_account(&config(), "uid1", &input).unwrap();

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url.as_str(), "https://cloud.appwrite.io/v1/account");
        assert_eq!(request.project_id, "snapgram");

        let json = body(&request);
        assert_eq!(json["userId"], "uid1");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["password"], "analytical");
        assert_eq!(json["name"], "Ada");
        assert!(json.get("username").is_none());
    }

    #[test]
    fn test_email_session_request() {
        let creds = Credentials::new("ada@example.com", "analytical");
        let request = ApiRequest::create_email_session(&config(), &creds).unwrap();

        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.url.path(),
            "/v1/account/sessions/email"
        );
        assert_eq!(
            body(&request),
            serde_json::json!({"email": "ada@example.com", "password": "analytical"})
        );
    }

    #[test]
    fn test_account_and_session_requests_have_no_body() {
        let get = ApiRequest::get_account(&config()).unwrap();
        let delete = ApiRequest::delete_current_session(&config()).unwrap();

        assert_eq!(get.method, Method::Get);
        assert!(get.body.is_none());
        assert_eq!(delete.method, Method::Delete);
        assert_eq!(delete.url.path(), "/v1/account/sessions/current");
    }

    #[test]
    fn test_list_users_by_account_encodes_filter() {
        let request = ApiRequest::list_users_by_account(&config(), "acc42").unwrap();

        assert_eq!(
            request.url.path(),
            "/v1/databases/main/collections/users/documents"
        );
        let pairs: Vec<(String, String)> = request
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![(
                "queries[]".to_string(),
                r#"equal("accountId", ["acc42"])"#.to_string()
            )]
        );
    }

    #[test]
    fn test_create_user_document_request() {
        let data = NewUserDocument {
            account_id: "acc42".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            username: "ada".to_string(),
            image_url: "https://img".to_string(),
        };
        let request = ApiRequest::create_user_document(&config(), "doc1", &data).unwrap();
        let json = body(&request);

        assert_eq!(json["documentId"], "doc1");
        assert_eq!(json["data"]["username"], "ada");
    }

    #[test]
    fn test_avatar_url_encodes_name() {
        let url = avatar_initials_url(&config(), "Ada Lovelace").unwrap();

        assert_eq!(url.path(), "/v1/avatars/initials");
        let name = url
            .query_pairs()
            .find(|(k, _)| k == "name")
            .map(|(_, v)| v.into_owned());
        assert_eq!(name.as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_missing_config_fails_before_building() {
        let err = ApiRequest::get_account(&AppwriteConfig::default()).unwrap_err();
        assert_eq!(err, AppwriteError::NotConfigured("APPWRITE_URL"));
    }

    #[test]
    fn test_unique_ids_are_distinct_and_short() {
        let a = unique_id();
        let b = unique_id();

        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
