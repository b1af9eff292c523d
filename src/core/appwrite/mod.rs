//! Client for the Appwrite-compatible auth backend
//!
//! - `config`: endpoint and resource identifiers
//! - `api`: pure request builders
//! - `client`: account operations over a pluggable transport
//! - `storage`: cookie fallback kept in localStorage

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use client::{AppwriteClient, FetchTransport, RawResponse, Transport};
pub use config::AppwriteConfig;
pub use error::AppwriteError;
pub use models::{Account, Session, UserDocument};
