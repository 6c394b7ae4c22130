//! Session-aware wrapper around the API client.

use chrono::Utc;
use portal_api::{
    AccessModuleQuery, ApiConfig, AuthContext, CancelToken, Client, Envelope, LoginRequest,
};
use serde::Serialize;

use crate::config::PortalConfig;
use crate::error::PortalError;
use crate::session::{Session, SessionStore};
use crate::validation::{validate_id, validate_username, validate_year};

/// API client whose credentials come from the stored session.
///
/// The session is read once at construction; IDs are validated before any
/// request is built. Failures are returned unchanged as [`PortalError::Api`].
pub struct PortalClient {
    inner: Client,
    store: SessionStore,
}

impl PortalClient {
    /// Builds a client from resolved configuration, running every call under `cancel`.
    pub fn new(config: &PortalConfig, cancel: CancelToken) -> Result<Self, PortalError> {
        Self::with_store(
            config.api_config(),
            SessionStore::new(config.session_file.clone()),
            cancel,
        )
    }

    /// Builds a client against explicit services and session file. Used for testing.
    pub fn with_store(
        api: ApiConfig,
        store: SessionStore,
        cancel: CancelToken,
    ) -> Result<Self, PortalError> {
        let auth = match store.load()? {
            Some(session) => session.auth_context(Utc::now()).unwrap_or_else(|e| {
                tracing::warn!(
                    "Ignoring unusable token in {}: {}",
                    store.path().display(),
                    e
                );
                AuthContext::anonymous()
            }),
            None => AuthContext::anonymous(),
        };
        tracing::debug!(
            "Portal client ready (authenticated: {})",
            auth.is_authenticated()
        );
        let inner = Client::new(api, auth)?.with_cancel_token(cancel);
        Ok(Self { inner, store })
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.auth().is_authenticated()
    }

    /// Logs in, stores the returned session and switches this client to it.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<Session, PortalError> {
        let credentials = LoginRequest {
            username: validate_username(username)?,
            password: password.to_string(),
        };
        let resp = self.inner.login(&credentials).await?;
        let session = Session::from_login(&resp, Utc::now());
        // a token that cannot be sent is never persisted
        let auth = session.auth_context(Utc::now())?;
        self.store.save(&session)?;
        tracing::info!("Logged in as {}", credentials.username);

        self.inner.set_auth(auth);
        Ok(session)
    }

    /// Forgets the stored session. Returns whether one existed.
    pub fn logout(&mut self) -> Result<bool, PortalError> {
        let existed = self.store.clear()?;
        self.inner.set_auth(AuthContext::anonymous());
        Ok(existed)
    }

    pub fn session(&self) -> Result<Option<Session>, PortalError> {
        self.store.load()
    }

    pub async fn program_allocations(&self) -> Result<Envelope, PortalError> {
        Ok(self.inner.get_program_allocations().await?)
    }

    pub async fn create_program_allocation<B: Serialize + ?Sized>(
        &self,
        allocation: &B,
    ) -> Result<Envelope, PortalError> {
        Ok(self.inner.create_program_allocation(allocation).await?)
    }

    pub async fn access_modules(&self, query: &AccessModuleQuery) -> Result<Envelope, PortalError> {
        Ok(self.inner.get_access_modules(query).await?)
    }

    pub async fn teacher(&self, teacher_id: &str) -> Result<Envelope, PortalError> {
        let id = validate_id("teacher", teacher_id)?;
        Ok(self.inner.get_teacher(&id).await?)
    }

    pub async fn exam_schedule(&self, teacher_id: &str) -> Result<Envelope, PortalError> {
        let id = validate_id("teacher", teacher_id)?;
        Ok(self.inner.get_exam_schedule(&id).await?)
    }

    pub async fn tasks(&self, teacher_id: &str) -> Result<Envelope, PortalError> {
        let id = validate_id("teacher", teacher_id)?;
        Ok(self.inner.get_tasks(&id).await?)
    }

    pub async fn create_task<B: Serialize + ?Sized>(&self, task: &B) -> Result<Envelope, PortalError> {
        Ok(self.inner.create_task(task).await?)
    }

    pub async fn feedback_forms(&self, student_id: &str) -> Result<Envelope, PortalError> {
        let id = validate_id("student", student_id)?;
        Ok(self.inner.get_feedback_forms(&id).await?)
    }

    pub async fn submit_feedback<B: Serialize + ?Sized>(
        &self,
        form_id: &str,
        response: &B,
    ) -> Result<Envelope, PortalError> {
        let id = validate_id("form", form_id)?;
        Ok(self.inner.submit_feedback(&id, response).await?)
    }

    pub async fn placements(&self, student_id: &str) -> Result<Envelope, PortalError> {
        let id = validate_id("student", student_id)?;
        Ok(self.inner.get_placements(&id).await?)
    }

    pub async fn academic_calendar(&self, year: u16) -> Result<Envelope, PortalError> {
        let year = validate_year(year)?;
        Ok(self.inner.get_academic_calendar(year).await?)
    }
}
