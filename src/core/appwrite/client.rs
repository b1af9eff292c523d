//! Backend client
//!
//! [`AppwriteClient`] composes the request builders from [`super::api`] into
//! the account operations the auth forms need. The HTTP call itself goes
//! through a [`Transport`]; in the browser that is [`FetchTransport`] on top
//! of `gloo-net`.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::api::{ApiRequest, avatar_initials_url, unique_id};
use super::config::AppwriteConfig;
use super::error::AppwriteError;
use super::models::{Account, DocumentList, NewUserDocument, Session, UserDocument};
use super::storage;
use crate::core::validation::{Credentials, SignUpInput};

/// Status, body and fallback cookies of a completed request
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
    pub fallback_cookies: Option<String>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a resolved request and returns the raw response
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, AppwriteError>;
}

/// Browser `fetch` transport
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    #[cfg(target_arch = "wasm32")]
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, AppwriteError> {
        use super::api::{FALLBACK_COOKIES_HEADER, Method, PROJECT_HEADER};
        use gloo_net::http::Request;
        use web_sys::RequestCredentials;

        let url = request.url.as_str();
        let mut builder = match request.method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Delete => Request::delete(url),
        }
        .header(PROJECT_HEADER, &request.project_id)
        .credentials(RequestCredentials::Include);

        if let Some(cookies) = storage::load_cookie_fallback() {
            builder = builder.header(FALLBACK_COOKIES_HEADER, &cookies);
        }

        let prepared = match request.body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body)?,
            None => builder.build()?,
        };

        let response = prepared.send().await?;
        let fallback_cookies = response.headers().get(FALLBACK_COOKIES_HEADER);
        if let Some(cookies) = fallback_cookies.as_deref() {
            storage::save_cookie_fallback(cookies);
        }

        Ok(RawResponse {
            status: response.status(),
            body: response.text().await?,
            fallback_cookies,
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn execute(&self, _request: ApiRequest) -> Result<RawResponse, AppwriteError> {
        Err(AppwriteError::Unavailable)
    }
}

/// Account operations against the backend
#[derive(Debug, Clone)]
pub struct AppwriteClient<T = FetchTransport> {
    config: Arc<AppwriteConfig>,
    transport: T,
}

impl AppwriteClient<FetchTransport> {
    pub fn new(config: AppwriteConfig) -> Self {
        Self::with_transport(config, FetchTransport)
    }
}

impl<T: Transport> AppwriteClient<T> {
    pub fn with_transport(config: AppwriteConfig, transport: T) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &AppwriteConfig {
        &self.config
    }

    async fn send<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, AppwriteError> {
        let raw = self.transport.execute(request).await?;
        if !raw.is_success() {
            return Err(AppwriteError::from_response(raw.status, &raw.body));
        }
        Ok(serde_json::from_str(&raw.body)?)
    }

    async fn send_empty(&self, request: ApiRequest) -> Result<(), AppwriteError> {
        let raw = self.transport.execute(request).await?;
        if !raw.is_success() {
            return Err(AppwriteError::from_response(raw.status, &raw.body));
        }
        Ok(())
    }

    /// Create the auth account and its profile document
    ///
    /// Returns `Ok(None)` when the backend rejects the account or the profile
    /// document cannot be saved.
    pub async fn create_account(
        &self,
        input: &SignUpInput,
    ) -> Result<Option<UserDocument>, AppwriteError> {
        let request = ApiRequest::create_account(&self.config, &unique_id(), input)?;
        let account: Account = match self.send(request).await {
            Ok(account) => account,
            Err(err @ AppwriteError::Api { .. }) => {
                leptos::logging::warn!("Account creation rejected: {}", err);
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        let avatar = avatar_initials_url(&self.config, &account.name)?;
        let data = NewUserDocument {
            account_id: account.id,
            name: account.name,
            email: account.email,
            username: input.username.clone(),
            image_url: avatar.to_string(),
        };

        let request = ApiRequest::create_user_document(&self.config, &unique_id(), &data)?;
        match self.send::<UserDocument>(request).await {
            Ok(document) => Ok(Some(document)),
            Err(err) => {
                leptos::logging::warn!("Failed to save user profile: {}", err);
                Ok(None)
            }
        }
    }

    /// Open an email/password session
    ///
    /// Returns `Ok(None)` when the backend rejects the credentials.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Option<Session>, AppwriteError> {
        let request = ApiRequest::create_email_session(&self.config, credentials)?;
        match self.send::<Session>(request).await {
            Ok(session) => Ok(Some(session)),
            Err(err @ AppwriteError::Api { .. }) => {
                leptos::logging::warn!("Sign in rejected: {}", err);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Account behind the current session, `None` when signed out
    pub async fn current_account(&self) -> Result<Option<Account>, AppwriteError> {
        match self.send(ApiRequest::get_account(&self.config)?).await {
            Ok(account) => Ok(Some(account)),
            Err(err) if err.is_unauthorized() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Profile document for an account
    pub async fn find_user_document(
        &self,
        account_id: &str,
    ) -> Result<Option<UserDocument>, AppwriteError> {
        let request = ApiRequest::list_users_by_account(&self.config, account_id)?;
        let list: DocumentList<UserDocument> = self.send(request).await?;
        Ok(list.documents.into_iter().next())
    }

    /// Profile of the signed-in user
    pub async fn current_user(&self) -> Result<Option<UserDocument>, AppwriteError> {
        let Some(account) = self.current_account().await? else {
            return Ok(None);
        };
        self.find_user_document(&account.id).await
    }

    /// Delete the current session and forget the cookie fallback
    pub async fn sign_out(&self) -> Result<(), AppwriteError> {
        let result = self
            .send_empty(ApiRequest::delete_current_session(&self.config)?)
            .await;
        storage::clear_cookie_fallback();
        result
    }
}
