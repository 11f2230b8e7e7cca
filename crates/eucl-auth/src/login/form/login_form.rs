use std::sync::{Arc, Mutex, MutexGuard};

use eucl_core::ApiError;
use eucl_state::Repository;

use crate::{
    login::{
        AuthToken, LoginResponse, LoginService, TOKEN_STORAGE_KEY,
        form::{Credentials, LoginField, SubmissionState, SubmitInProgressError},
    },
    navigation::{Navigator, Route},
};

/// Banner text used when the service refuses a login without giving a reason.
const GENERIC_LOGIN_ERROR: &str = "Something went wrong";

/// Failure modes of [`LoginForm::submit`].
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// A previous submit is still in flight.
    #[error(transparent)]
    InProgress(#[from] SubmitInProgressError),
    /// The request never produced a service answer.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Headless controller for the login screen.
///
/// Owns the transient UI state (field values, touched flags, the submission
/// state machine) while the host app owns rendering: it binds inputs to
/// [`set_field`]/[`blur_field`], shows [`field_error`] and [`banner_error`],
/// and disables the button on [`is_submitting`].
///
/// All platform pieces are injected: the authentication call as a
/// [`LoginService`], the secure token store as a [`Repository`], and the
/// router as a [`Navigator`]. Cloning the form returns a handle to the same
/// state, matching the `Client` shape used across the SDK.
///
/// State lives for the duration of the screen; a remount is a new `LoginForm`.
///
/// [`set_field`]: LoginForm::set_field
/// [`blur_field`]: LoginForm::blur_field
/// [`field_error`]: LoginForm::field_error
/// [`banner_error`]: LoginForm::banner_error
/// [`is_submitting`]: LoginForm::is_submitting
#[derive(Clone)]
pub struct LoginForm {
    state: Arc<Mutex<FormState>>,
    service: Arc<dyn LoginService>,
    token_repository: Arc<dyn Repository<AuthToken>>,
    navigator: Arc<dyn Navigator>,
}

#[derive(Default)]
struct FormState {
    credentials: Credentials,
    touched_email: bool,
    touched_password: bool,
    submission: SubmissionState,
}

impl FormState {
    fn touched(&self, field: LoginField) -> bool {
        match field {
            LoginField::Email => self.touched_email,
            LoginField::Password => self.touched_password,
        }
    }
}

impl LoginForm {
    /// Creates a form with empty fields and an idle state machine.
    pub fn new(
        service: Arc<dyn LoginService>,
        token_repository: Arc<dyn Repository<AuthToken>>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState::default())),
            service,
            token_repository,
            navigator,
        }
    }

    /// Updates one field's value. No side effects beyond the state update;
    /// validation is derived on read.
    pub fn set_field(&self, field: LoginField, value: impl Into<String>) {
        let mut state = self.lock_state();
        match field {
            LoginField::Email => state.credentials.email = value.into(),
            LoginField::Password => state.credentials.password = value.into(),
        }
    }

    /// Marks a field as touched. Called when the user leaves the input;
    /// from then on its validation errors are displayed.
    pub fn blur_field(&self, field: LoginField) {
        let mut state = self.lock_state();
        match field {
            LoginField::Email => state.touched_email = true,
            LoginField::Password => state.touched_password = true,
        }
    }

    /// The validation message to display under a field: present only when the
    /// field has been touched AND the schema reports an error for it.
    pub fn field_error(&self, field: LoginField) -> Option<String> {
        let state = self.lock_state();
        if !state.touched(field) {
            return None;
        }
        state.credentials.first_error(field)
    }

    /// The screen-level error banner: present only after a refused login.
    pub fn banner_error(&self) -> Option<String> {
        match &self.lock_state().submission {
            SubmissionState::Failed { message } => Some(message.clone()),
            _ => None,
        }
    }

    /// Current submission state.
    pub fn submission(&self) -> SubmissionState {
        self.lock_state().submission.clone()
    }

    /// True strictly while the authentication request is in flight.
    pub fn is_submitting(&self) -> bool {
        self.lock_state().submission.is_submitting()
    }

    /// A copy of the current field values.
    pub fn credentials(&self) -> Credentials {
        self.lock_state().credentials.clone()
    }

    /// Submits the form with the current credentials.
    ///
    /// Entering `Submitting` clears any previous banner. Validation errors do
    /// not block submission; the service is the authority on whether the
    /// credentials are acceptable.
    ///
    /// On an authenticated response the token is handed to the secure store
    /// (fire and forget: a storage failure is logged, not surfaced) and the
    /// user is navigated to [`Route::App`]. On a rejected response the state
    /// machine lands in `Failed` carrying the server's message, or a generic
    /// fallback when there is none.
    ///
    /// A second submit while one is in flight returns
    /// [`SubmitError::InProgress`] without touching the request. Dropping the
    /// returned future mid-request rolls the state machine back to `Idle`.
    pub async fn submit(&self) -> Result<(), SubmitError> {
        let (guard, credentials) = InFlight::begin(&self.state)?;

        // The only suspension point. No lock is held while suspended.
        let response = match self.service.login(&credentials).await {
            Ok(response) => response,
            Err(error) => {
                guard.finish(SubmissionState::Idle);
                return Err(error.into());
            }
        };

        // The request has resolved; leave Submitting before branching.
        guard.finish(SubmissionState::Idle);

        match response {
            LoginResponse::Authenticated(success) => {
                if let Err(error) = self
                    .token_repository
                    .set(TOKEN_STORAGE_KEY.to_string(), success.token)
                    .await
                {
                    // Must not keep the user out of the app; they just won't
                    // have a persisted session.
                    log::warn!("failed to persist auth token: {error}");
                }
                self.navigator.navigate(Route::App);
                self.lock_state().submission = SubmissionState::Succeeded;
            }
            LoginResponse::Rejected { message } => {
                let message = message
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| GENERIC_LOGIN_ERROR.to_string());
                self.lock_state().submission = SubmissionState::Failed { message };
            }
        }

        Ok(())
    }

    /// Sends the user to the registration screen.
    pub fn go_to_register(&self) {
        self.navigator.navigate(Route::Register);
    }

    fn lock_state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().expect("Mutex is not poisoned")
    }
}

/// Marks the state machine `Submitting` for the duration of one request.
///
/// Rolls back to `Idle` on drop, so a `submit` future dropped mid-request
/// (screen dismissed, task cancelled) cannot leave the form stuck in flight.
struct InFlight {
    state: Arc<Mutex<FormState>>,
    armed: bool,
}

impl InFlight {
    fn begin(
        state: &Arc<Mutex<FormState>>,
    ) -> Result<(Self, Credentials), SubmitInProgressError> {
        let mut form = state.lock().expect("Mutex is not poisoned");
        if form.submission.is_submitting() {
            return Err(SubmitInProgressError);
        }
        form.submission = SubmissionState::Submitting;
        let credentials = form.credentials.clone();
        drop(form);

        Ok((
            Self {
                state: Arc::clone(state),
                armed: true,
            },
            credentials,
        ))
    }

    fn finish(mut self, next: SubmissionState) {
        self.armed = false;
        self.state.lock().expect("Mutex is not poisoned").submission = next;
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if self.armed {
            if let Ok(mut form) = self.state.lock() {
                form.submission = SubmissionState::Idle;
            }
        }
    }
}
