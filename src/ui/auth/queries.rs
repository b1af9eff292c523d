//! Pending-state tracking around the account operations
//!
//! The forms disable their submit button and show a loader while any request
//! is in flight. [`Mutation`] flips a signal around one future;
//! [`AccountMutations`] wraps the backend client with one mutation per
//! operation and is what the forms hand to the submit flows.

use std::future::Future;

use leptos::prelude::*;

use super::submit::{AccountBackend, AuthError};
use crate::core::appwrite::{AppwriteClient, Session, Transport, UserDocument};
use crate::core::validation::{Credentials, SignUpInput};

/// Pending flag for one kind of request
#[derive(Clone, Copy)]
pub struct Mutation {
    pending: RwSignal<bool>,
}

impl Mutation {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(false),
        }
    }

    /// Reactive pending flag
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Run a future with the pending flag raised
    pub async fn run<F: Future>(&self, fut: F) -> F::Output {
        self.pending.set(true);
        let output = fut.await;
        self.pending.set(false);
        output
    }
}

impl Default for Mutation {
    fn default() -> Self {
        Self::new()
    }
}

/// Backend client with pending flags for account creation and sign-in
#[derive(Clone)]
pub struct AccountMutations<T = crate::core::appwrite::FetchTransport> {
    client: AppwriteClient<T>,
    pub create_account: Mutation,
    pub sign_in: Mutation,
}

impl<T: Transport> AccountMutations<T> {
    pub fn new(client: AppwriteClient<T>) -> Self {
        Self {
            client,
            create_account: Mutation::new(),
            sign_in: Mutation::new(),
        }
    }

    /// Loader flag for a form: a wrapped request is in flight or the
    /// session check is running
    pub fn busy(&self, session_loading: RwSignal<bool>) -> Signal<bool> {
        let create_account = self.create_account;
        let sign_in = self.sign_in;
        Signal::derive(move || {
            create_account.is_pending() || sign_in.is_pending() || session_loading.get()
        })
    }
}

impl<T: Transport> AccountBackend for AccountMutations<T> {
    async fn create_account(
        &self,
        input: &SignUpInput,
    ) -> Result<Option<UserDocument>, AuthError> {
        Ok(self
            .create_account
            .run(self.client.create_account(input))
            .await?)
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Option<Session>, AuthError> {
        Ok(self.sign_in.run(self.client.sign_in(credentials)).await?)
    }
}
