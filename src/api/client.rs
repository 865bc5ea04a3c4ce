//! API client for the Healto doctor REST API.
//!
//! This module provides the `ApiClient` struct for making authenticated
//! requests: it resolves catalog paths against the fixed base URL, attaches
//! the bearer token read from the injected session provider, bounds every
//! request with a timeout, and flattens all outcomes into [`ApiError`].
//!
//! There is no retry or backoff anywhere; every surfaced error is re-issued
//! only by explicit caller action.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::{header, multipart, Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::{endpoints, ApiError, ApiResult};
use crate::auth::SessionProvider;
use crate::models::{
    Appointment, AppointmentFilters, DashboardSummary, DoctorRecord, Envelope, ImageAttachment,
    LoginResponse, ProfileUpdate, Specialization,
};

/// API client for the Healto doctor service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    sessions: Arc<dyn SessionProvider>,
    timeout: Duration,
    upload_timeout: Duration,
}

impl ApiClient {
    /// Create a client against the production base URL.
    pub fn new(sessions: Arc<dyn SessionProvider>) -> Result<Self> {
        Self::with_base_url(sessions, endpoints::BASE_URL)
    }

    /// Create a client against a non-default base URL. The production URL
    /// is fixed; this exists so tests can point at a local server.
    pub fn with_base_url(
        sessions: Arc<dyn SessionProvider>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            sessions,
            timeout: Duration::from_secs(endpoints::REQUEST_TIMEOUT_SECS),
            upload_timeout: Duration::from_secs(endpoints::UPLOAD_TIMEOUT_SECS),
        })
    }

    /// Override both request timeouts (tests).
    pub fn with_timeouts(mut self, timeout: Duration, upload_timeout: Duration) -> Self {
        self.timeout = timeout;
        self.upload_timeout = upload_timeout;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a request for a catalog path. Authenticated requests read the
    /// bearer token from the session provider on every call; a missing
    /// token sends no Authorization header at all and lets the server
    /// answer 401 through the normal error path.
    fn request(&self, method: Method, path: &str, authenticated: bool) -> RequestBuilder {
        let url = self.url(path);
        debug!(method = %method, url = %url, "API request");
        let mut req = self
            .client
            .request(method, &url)
            .header(header::ACCEPT, "application/json")
            .timeout(self.timeout);
        if authenticated {
            if let Some(token) = self.sessions.bearer_token() {
                req = req.bearer_auth(token);
            }
        }
        req
    }

    /// Send and check the response status. Non-2xx reads the body text into
    /// the error; a 401 on an authenticated call additionally invalidates
    /// the stored session before the error propagates. A 401 from the login
    /// endpoint is just a wrong credential and leaves any stored session
    /// alone.
    async fn send(
        &self,
        req: RequestBuilder,
        authenticated: bool,
    ) -> ApiResult<reqwest::Response> {
        let response = req.send().await.map_err(ApiError::from_reqwest)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        if authenticated && status == reqwest::StatusCode::UNAUTHORIZED {
            warn!("Authentication rejected by server, clearing stored session");
            self.sessions.invalidate();
        }
        Err(ApiError::from_status(status, &body))
    }

    /// Decode a 2xx body into the caller-chosen type. A body that does not
    /// match is a `Decode` error, distinct from transport failures.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let text = response.text().await.map_err(ApiError::from_reqwest)?;
        serde_json::from_str(&text).map_err(|err| {
            warn!(error = %err, "Failed to decode response body");
            ApiError::Decode(err.to_string())
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .send(self.request(Method::GET, path, true), true)
            .await?;
        Self::decode(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let req = self.request(Method::POST, path, true).json(body);
        let response = self.send(req, true).await?;
        Self::decode(response).await
    }

    /// POST without a body (start/end/mark-available style actions).
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .send(self.request(Method::POST, path, true), true)
            .await?;
        Self::decode(response).await
    }

    /// POST a multipart form. Content-Type is left to the transport so the
    /// part boundary is set correctly; uploads get the longer timeout.
    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> ApiResult<T> {
        let req = self
            .request(Method::POST, path, true)
            .timeout(self.upload_timeout)
            .multipart(form);
        let response = self.send(req, true).await?;
        Self::decode(response).await
    }

    // ===== Session lifecycle =====

    /// Authenticate a doctor. The only unauthenticated call; the caller
    /// persists the resulting session via `SessionStore::save`, typically
    /// through [`Session::from_login`](crate::auth::Session::from_login).
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });
        let req = self.request(Method::POST, endpoints::LOGIN, false).json(&body);
        let response = self.send(req, false).await?;
        Self::decode(response).await
    }

    /// Server-side logout. The local session is cleared separately by the
    /// caller; a failed call here does not resurrect it.
    pub async fn logout(&self) -> ApiResult<Envelope<Value>> {
        self.post_empty(endpoints::LOGOUT).await
    }

    // ===== Profile =====

    /// Fetch the logged-in doctor's profile.
    pub async fn profile(&self) -> ApiResult<DoctorRecord> {
        let envelope: Envelope<DoctorRecord> = self.get(endpoints::PROFILE).await?;
        Ok(envelope.data)
    }

    /// Update profile fields as a JSON body.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<DoctorRecord> {
        let envelope: Envelope<DoctorRecord> =
            self.post(endpoints::UPDATE_PROFILE, update).await?;
        Ok(envelope.data)
    }

    /// Update profile fields as multipart form data, optionally attaching
    /// a new profile image. JSON and multipart are mutually exclusive per
    /// call; this is the path the image picker uses.
    pub async fn update_profile_multipart(
        &self,
        update: &ProfileUpdate,
        image: Option<ImageAttachment>,
    ) -> ApiResult<DoctorRecord> {
        let mut form = multipart::Form::new();
        for (key, value) in update.form_fields() {
            form = form.text(key, value);
        }
        if let Some(image) = image {
            let part = multipart::Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.mime_type)
                .map_err(|err| {
                    ApiError::Decode(format!("Invalid image MIME type {}: {err}", image.mime_type))
                })?;
            form = form.part("profile_image", part);
        }
        let envelope: Envelope<DoctorRecord> =
            self.post_multipart(endpoints::UPDATE_PROFILE, form).await?;
        Ok(envelope.data)
    }

    /// Change the account password.
    pub async fn change_password(
        &self,
        current: &str,
        new: &str,
        confirmation: &str,
    ) -> ApiResult<Envelope<Value>> {
        let body = serde_json::json!({
            "current_password": current,
            "new_password": new,
            "new_password_confirmation": confirmation,
        });
        self.post(endpoints::CHANGE_PASSWORD, &body).await
    }

    /// Fetch specializations for the profile-edit dropdown.
    pub async fn specializations(&self) -> ApiResult<Vec<Specialization>> {
        let envelope: Envelope<Vec<Specialization>> =
            self.get(endpoints::SPECIALIZATIONS).await?;
        Ok(envelope.data)
    }

    // ===== Dashboard and appointments =====

    /// Fetch the dashboard counters.
    pub async fn dashboard(&self) -> ApiResult<DashboardSummary> {
        let envelope: Envelope<DashboardSummary> = self.get(endpoints::DASHBOARD).await?;
        Ok(envelope.data)
    }

    /// Fetch today's appointments only.
    pub async fn today_appointments(&self) -> ApiResult<Vec<Appointment>> {
        let envelope: Envelope<Vec<Appointment>> =
            self.get(endpoints::TODAY_APPOINTMENTS).await?;
        Ok(envelope.data)
    }

    /// List appointments, optionally filtered. Only filters that are set
    /// are sent; values go through verbatim for the server to validate.
    pub async fn appointments(
        &self,
        filters: &AppointmentFilters,
    ) -> ApiResult<Vec<Appointment>> {
        let mut req = self.request(Method::GET, endpoints::APPOINTMENTS, true);
        if !filters.is_empty() {
            req = req.query(&filters.query_pairs());
        }
        let response = self.send(req, true).await?;
        let envelope: Envelope<Vec<Appointment>> = Self::decode(response).await?;
        Ok(envelope.data)
    }

    /// Fetch one appointment's detail by id.
    pub async fn appointment(&self, id: i64) -> ApiResult<Appointment> {
        let envelope: Envelope<Appointment> =
            self.get(&endpoints::appointment_detail(id)).await?;
        Ok(envelope.data)
    }

    /// Mark an appointment as started.
    pub async fn start_appointment(&self, id: i64) -> ApiResult<Envelope<Value>> {
        self.post_empty(&endpoints::start_appointment(id)).await
    }

    /// Mark an appointment as completed.
    pub async fn end_appointment(&self, id: i64) -> ApiResult<Envelope<Value>> {
        self.post_empty(&endpoints::end_appointment(id)).await
    }

    /// Fetch completed appointment history.
    pub async fn appointment_history(&self) -> ApiResult<Vec<Appointment>> {
        let envelope: Envelope<Vec<Appointment>> =
            self.get(endpoints::APPOINTMENT_HISTORY).await?;
        Ok(envelope.data)
    }

    // ===== Availability =====

    /// Mark the doctor unavailable for a datetime window. Sent as multipart
    /// form fields; the "YYYY-MM-DD HH:MM:SS" strings pass through verbatim
    /// and the server validates format and ordering.
    pub async fn mark_unavailable(
        &self,
        reason: &str,
        unavailable_from: &str,
        unavailable_until: &str,
    ) -> ApiResult<Envelope<Value>> {
        let form = multipart::Form::new()
            .text("reason", reason.to_string())
            .text("unavailable_from", unavailable_from.to_string())
            .text("unavailable_until", unavailable_until.to_string());
        self.post_multipart(endpoints::MARK_UNAVAILABLE, form).await
    }

    /// Mark the doctor available again.
    pub async fn mark_available(&self) -> ApiResult<Envelope<Value>> {
        self.post_empty(endpoints::MARK_AVAILABLE).await
    }

    // ===== Untyped escape hatch =====

    /// Fetch an endpoint as untyped JSON. The full server payload reaches
    /// the caller unmodified, including the server's own `success` field.
    pub async fn get_json(&self, path: &str) -> ApiResult<Value> {
        self.get(path).await
    }
}
