//! Submit flows for the sign-in and sign-up forms
//!
//! Both flows are strictly sequential chains over three seams:
//! [`AccountBackend`] for the remote calls, [`SessionCheck`] to confirm the
//! session landed, and [`FormUi`] for toasts, form reset and navigation.
//! A backend that answers "nothing" produces a toast; an error at any step is
//! only logged and leaves the form untouched.

use leptos_router::NavigateOptions;

use crate::core::appwrite::{AppwriteError, Session, UserDocument};
use crate::core::validation::{Credentials, SignUpInput};
use crate::ui::notifications::{Toast, ToastManager};

pub const SIGN_UP_FAILED: &str = "Sign up failed, Please try again.";
pub const SIGN_IN_FAILED: &str = "Sign in failed, Please try again.";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";

/// Route shown once the user is signed in
pub const HOME_PATH: &str = "/";

/// Errors raised while a submit flow is running
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Backend(#[from] AppwriteError),
}

/// Remote account operations used by the forms
#[allow(async_fn_in_trait)]
pub trait AccountBackend {
    async fn create_account(&self, input: &SignUpInput)
    -> Result<Option<UserDocument>, AuthError>;

    async fn sign_in(&self, credentials: &Credentials) -> Result<Option<Session>, AuthError>;
}

/// Confirms that a session is usable and loads the signed-in user
#[allow(async_fn_in_trait)]
pub trait SessionCheck {
    async fn check_auth_user(&self) -> Result<bool, AuthError>;
}

/// Side effects a form can perform
pub trait FormUi {
    fn notify(&self, title: &str);
    fn reset_form(&self);
    fn navigate(&self, path: &str, replace: bool);
}

/// Why a flow stopped with a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    AccountNotCreated,
    NoSession,
    NotAuthenticated,
}

impl Rejection {
    pub fn message(self) -> &'static str {
        match self {
            Rejection::AccountNotCreated => SIGN_UP_FAILED,
            Rejection::NoSession => SIGN_IN_FAILED,
            Rejection::NotAuthenticated => LOGIN_FAILED,
        }
    }
}

/// How a submission ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Form reset and navigated home
    SignedIn,
    /// A notification was shown
    Rejected(Rejection),
    /// An error was logged; nothing was shown
    Failed(AuthError),
}

/// Sign in, verify the session, then go home replacing the history entry
pub async fn submit_sign_in<B, S, U>(
    backend: &B,
    session: &S,
    ui: &U,
    credentials: &Credentials,
) -> SubmitOutcome
where
    B: AccountBackend,
    S: SessionCheck,
    U: FormUi,
{
    match sign_in_and_verify(backend, session, ui, credentials, true).await {
        Ok(outcome) => outcome,
        Err(err) => {
            leptos::logging::error!("Sign in error: {}", err);
            SubmitOutcome::Failed(err)
        }
    }
}

/// Create the account, then run the sign-in chain and go home
pub async fn submit_sign_up<B, S, U>(
    backend: &B,
    session: &S,
    ui: &U,
    input: &SignUpInput,
) -> SubmitOutcome
where
    B: AccountBackend,
    S: SessionCheck,
    U: FormUi,
{
    match create_and_sign_in(backend, session, ui, input).await {
        Ok(outcome) => outcome,
        Err(err) => {
            leptos::logging::error!("Sign up error: {}", err);
            SubmitOutcome::Failed(err)
        }
    }
}

async fn create_and_sign_in<B, S, U>(
    backend: &B,
    session: &S,
    ui: &U,
    input: &SignUpInput,
) -> Result<SubmitOutcome, AuthError>
where
    B: AccountBackend,
    S: SessionCheck,
    U: FormUi,
{
    if backend.create_account(input).await?.is_none() {
        return Ok(reject(ui, Rejection::AccountNotCreated));
    }
    sign_in_and_verify(backend, session, ui, &input.credentials(), false).await
}

async fn sign_in_and_verify<B, S, U>(
    backend: &B,
    session: &S,
    ui: &U,
    credentials: &Credentials,
    replace: bool,
) -> Result<SubmitOutcome, AuthError>
where
    B: AccountBackend,
    S: SessionCheck,
    U: FormUi,
{
    if backend.sign_in(credentials).await?.is_none() {
        return Ok(reject(ui, Rejection::NoSession));
    }

    if !session.check_auth_user().await? {
        return Ok(reject(ui, Rejection::NotAuthenticated));
    }

    ui.reset_form();
    ui.navigate(HOME_PATH, replace);
    Ok(SubmitOutcome::SignedIn)
}

fn reject<U: FormUi>(ui: &U, rejection: Rejection) -> SubmitOutcome {
    ui.notify(rejection.message());
    SubmitOutcome::Rejected(rejection)
}

/// [`FormUi`] backed by the toast manager and the router
pub struct LeptosFormUi<N, R> {
    toasts: ToastManager,
    navigate: N,
    reset: R,
}

impl<N, R> LeptosFormUi<N, R>
where
    N: Fn(&str, NavigateOptions),
    R: Fn(),
{
    pub fn new(toasts: ToastManager, navigate: N, reset: R) -> Self {
        Self {
            toasts,
            navigate,
            reset,
        }
    }
}

impl<N, R> FormUi for LeptosFormUi<N, R>
where
    N: Fn(&str, NavigateOptions),
    R: Fn(),
{
    fn notify(&self, title: &str) {
        self.toasts.toast(Toast::new(title));
    }

    fn reset_form(&self) {
        (self.reset)();
    }

    fn navigate(&self, path: &str, replace: bool) {
        (self.navigate)(
            path,
            NavigateOptions {
                replace,
                ..Default::default()
            },
        );
    }
}
