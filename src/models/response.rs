//! Server response wrappers.
//!
//! Every Healto endpoint answers `{success, message, data}`; `Envelope<T>`
//! is that wrapper with the payload type chosen per endpoint by the caller.

use serde::Deserialize;

use crate::models::DoctorRecord;

/// The server's `{success, message, data}` wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

/// Payload of a successful login: the bearer token plus the doctor record.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub token: String,
    pub data: LoginData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub doctor: DoctorRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_response() {
        let json = r#"{
            "success": true,
            "message": "Login successful",
            "token": "tok-abc123",
            "data": {
                "doctor": {"id": 12, "name": "Asha Rao", "email": "asha@example.com"}
            }
        }"#;

        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.token, "tok-abc123");
        assert_eq!(response.data.doctor.id, Some(12));
        assert_eq!(response.data.doctor.name.as_deref(), Some("Asha Rao"));
    }

    #[test]
    fn test_parse_envelope_with_list_payload() {
        let json = r#"{"success": true, "data": [{"id": 1, "name": "Cardiology"}]}"#;
        let envelope: Envelope<Vec<crate::models::Specialization>> =
            serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.message, None);
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].name, "Cardiology");
    }
}
