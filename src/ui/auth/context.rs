//! Auth context for managing user authentication state
//!
//! This module provides a reactive authentication context that:
//! - Stores the signed-in user and the authenticated flag
//! - Verifies a fresh session against the backend (`check_auth_user`)
//! - Signs the user out

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use super::submit::{AuthError, SessionCheck};
use crate::core::appwrite::{AppwriteClient, AppwriteConfig, UserDocument};

/// Signed-in user profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub image_url: String,
    pub bio: String,
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        User {
            id: doc.id,
            name: doc.name,
            username: doc.username,
            email: doc.email,
            image_url: doc.image_url,
            bio: doc.bio.unwrap_or_default(),
        }
    }
}

/// Auth context providing authentication state and actions
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current user (if authenticated)
    pub user: RwSignal<Option<User>>,
    pub is_authenticated: RwSignal<bool>,
    /// Set while `check_auth_user` is running
    pub is_loading: RwSignal<bool>,
    client: StoredValue<AppwriteClient>,
}

impl AuthContext {
    pub fn new(client: AppwriteClient) -> Self {
        Self {
            user: RwSignal::new(None),
            is_authenticated: RwSignal::new(false),
            is_loading: RwSignal::new(false),
            client: StoredValue::new(client),
        }
    }

    /// Backend client shared by the forms
    pub fn client(&self) -> AppwriteClient {
        self.client.get_value()
    }

    /// Load the current user and report whether a session is established
    ///
    /// Errors are logged and count as "not authenticated".
    pub async fn check_auth_user(&self) -> bool {
        self.is_loading.set(true);

        let client = self.client();
        let authenticated = match client.current_user().await {
            Ok(Some(doc)) => {
                self.user.set(Some(doc.into()));
                self.is_authenticated.set(true);
                true
            }
            Ok(None) => false,
            Err(err) => {
                leptos::logging::error!("Failed to load current user: {}", err);
                false
            }
        };

        self.is_loading.set(false);
        authenticated
    }

    /// Delete the session and clear local state regardless of the API result
    pub async fn sign_out(&self) {
        if let Err(err) = self.client().sign_out().await {
            leptos::logging::warn!("Sign out request failed: {}", err);
        }
        self.user.set(None);
        self.is_authenticated.set(false);
    }
}

impl SessionCheck for AuthContext {
    async fn check_auth_user(&self) -> Result<bool, AuthError> {
        Ok(AuthContext::check_auth_user(self).await)
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    let ctx = AuthContext::new(AppwriteClient::new(AppwriteConfig::from_build_env()));
    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn doc(bio: Option<&str>) -> UserDocument {
        UserDocument {
            id: "doc1".to_string(),
            account_id: "acc42".to_string(),
            name: "Ada".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            image_url: "https://img".to_string(),
            bio: bio.map(str::to_string),
        }
    }

    #[test]
    fn test_user_from_document() {
        let user = User::from(doc(Some("Hello")));

        assert_eq!(user.id, "doc1");
        assert_eq!(user.username, "ada");
        assert_eq!(user.bio, "Hello");
    }

    #[test]
    fn test_user_from_document_without_bio() {
        assert_eq!(User::from(doc(None)).bio, "");
    }

    #[tokio::test]
    async fn test_check_auth_user_without_backend_is_false() {
        let owner = Owner::new();
        let ctx = owner.with(|| AuthContext::new(AppwriteClient::new(AppwriteConfig::default())));

        assert!(!ctx.check_auth_user().await);
        assert!(!ctx.is_authenticated.get_untracked());
        assert!(!ctx.is_loading.get_untracked());
        assert_eq!(ctx.user.get_untracked(), None);
    }

    #[tokio::test]
    async fn test_sign_out_clears_state() {
        let owner = Owner::new();
        let ctx = owner.with(|| AuthContext::new(AppwriteClient::new(AppwriteConfig::default())));
        ctx.user.set(Some(User::from(doc(None))));
        ctx.is_authenticated.set(true);

        ctx.sign_out().await;

        assert!(!ctx.is_authenticated.get_untracked());
        assert_eq!(ctx.user.get_untracked(), None);
    }
}
