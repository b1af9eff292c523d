//! Wire models for the backend REST API
//!
//! The backend prefixes system attributes with `$`; everything else is
//! camelCase.

use serde::{Deserialize, Serialize};

/// Auth account as returned by `POST /account` and `GET /account`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
}

/// Session issued by `POST /account/sessions/email`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(rename = "$id")]
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub expire: String,
}

/// Profile document stored in the users collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(rename = "$id")]
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub image_url: String,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Attributes written when a profile document is created
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserDocument {
    pub account_id: String,
    pub name: String,
    pub email: String,
    pub username: String,
    pub image_url: String,
}

/// Page of documents from a list call
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentList<T> {
    pub total: u64,
    pub documents: Vec<T>,
}

/// Body of `POST /account`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateAccountRequest<'a> {
    pub user_id: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub name: &'a str,
}

/// Body of `POST /account/sessions/email`
#[derive(Debug, Serialize)]
pub(crate) struct EmailSessionRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /databases/{db}/collections/{col}/documents`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateDocumentRequest<'a, T> {
    pub document_id: &'a str,
    pub data: &'a T,
}
