//! Core library for the Healto doctor app.
//!
//! This crate contains the non-UI core of the doctor-facing appointment
//! app:
//!
//! - `auth`: the persisted login session and its store
//! - `api`: the authenticated HTTP client for the Healto doctor REST API
//! - `models`: typed response decoders for each endpoint
//!
//! Screens, navigation, and rendering live in the app layer and call into
//! this crate. The app creates one [`SessionStore`], hands it to one
//! [`ApiClient`], persists the session it builds from a successful login,
//! and clears it on logout.

pub mod api;
pub mod auth;
pub mod models;

pub use api::{ApiClient, ApiError, ApiResult};
pub use auth::{Session, SessionProvider, SessionStore};
