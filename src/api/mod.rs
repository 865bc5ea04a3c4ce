//! REST API client module for the Healto doctor service.
//!
//! This module provides the `ApiClient` for communicating with the Healto
//! doctor API: login, profile management, appointments, and availability.
//!
//! The API uses bearer token authentication; the token is obtained at login
//! and read from the injected session provider before every call.

pub mod client;
pub mod endpoints;
pub mod error;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
