//! Endpoint catalog for the Healto doctor API.
//!
//! A static table of operation paths relative to [`BASE_URL`]. Paths with
//! an embedded appointment id are produced by helper functions so callers
//! never substitute placeholders by hand.

/// Base URL for all doctor API endpoints. Fixed at build time - the app
/// does not reconfigure it at runtime.
pub const BASE_URL: &str = "https://spidermart.in/healto/public/api";

/// HTTP request timeout for JSON calls in seconds.
/// 10s allows for slow mobile links while failing fast enough for the
/// retry button to make sense.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// HTTP request timeout for multipart uploads in seconds.
/// Profile image uploads need a longer bound than plain JSON calls.
pub const UPLOAD_TIMEOUT_SECS: u64 = 30;

pub const LOGIN: &str = "/doctor/login";
pub const LOGOUT: &str = "/doctor/logout";
pub const PROFILE: &str = "/doctor/profile";
pub const UPDATE_PROFILE: &str = "/doctor/update-profile";
pub const CHANGE_PASSWORD: &str = "/doctor/change-password";
pub const DASHBOARD: &str = "/doctor/dashboard";
pub const SPECIALIZATIONS: &str = "/doctor/specializations";
pub const TODAY_APPOINTMENTS: &str = "/doctor/today-appointments";
pub const APPOINTMENTS: &str = "/doctor/appointments";
pub const MARK_UNAVAILABLE: &str = "/doctor/mark-unavailable";
pub const MARK_AVAILABLE: &str = "/doctor/mark-available";
pub const APPOINTMENT_HISTORY: &str = "/doctor/appointment-history";

/// Path for a single appointment's detail.
pub fn appointment_detail(id: i64) -> String {
    format!("{APPOINTMENTS}/{id}")
}

/// Path to mark an appointment as started.
pub fn start_appointment(id: i64) -> String {
    format!("{APPOINTMENTS}/{id}/start")
}

/// Path to mark an appointment as completed.
pub fn end_appointment(id: i64) -> String {
    format!("{APPOINTMENTS}/{id}/end")
}
