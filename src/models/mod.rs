//! Data models for the Healto doctor API.
//!
//! This module contains the typed response decoders for each endpoint:
//!
//! - `DoctorRecord`, `Specialization`: the logged-in doctor and profile data
//! - `Appointment`, `AppointmentFilters`: appointment lists and list filters
//! - `DashboardSummary`: the dashboard counters
//! - `Envelope`, `LoginResponse`: the server's `{success, message, data}`
//!   wrapper and the login payload
//!
//! Each endpoint decoder names where its payload lives; nothing probes
//! response shapes at runtime.

pub mod appointment;
pub mod dashboard;
pub mod doctor;
pub mod response;

pub use appointment::{Appointment, AppointmentFilters};
pub use dashboard::DashboardSummary;
pub use doctor::{DoctorRecord, ImageAttachment, ProfileUpdate, Specialization};
pub use response::{Envelope, LoginData, LoginResponse};
