pub mod auth;
pub mod common;
pub mod icon;
pub mod layouts;
pub mod notifications;
pub mod pages;

pub use auth::{AuthContext, provide_auth_context, use_auth_context};
pub use icon::{Icon, icons};
pub use layouts::{AuthLayout, RootLayout};
pub use notifications::{Toaster, provide_toaster, use_toaster};
