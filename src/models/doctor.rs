// Allow dead code: API response structs have fields for completeness
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// The server-defined doctor record, as returned by login and profile
/// endpoints and persisted inside the session.
///
/// Fields the core does not model are preserved in `extra` so a round-trip
/// through the session store never drops server data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorRecord {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub qualification: Option<String>,
    pub experience_years: Option<i64>,
    pub blood_group: Option<String>,
    pub address: Option<String>,
    pub specialization_id: Option<i64>,
    pub profile_image: Option<String>,
    pub is_available: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DoctorRecord {
    /// Name for greeting text, e.g. "Dr. Asha".
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => format!("Dr. {}", name),
            _ => "Doctor".to_string(),
        }
    }
}

/// Profile fields a doctor can edit.
///
/// Serialized directly for the JSON update path; `form_fields` feeds the
/// multipart path. Only fields that are set are sent either way.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    pub doctor_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization_id: Option<i64>,
}

impl ProfileUpdate {
    /// Field/value pairs for the multipart form variant of update-profile.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("doctor_id", self.doctor_id.to_string())];
        if let Some(ref v) = self.name {
            fields.push(("name", v.clone()));
        }
        if let Some(ref v) = self.email {
            fields.push(("email", v.clone()));
        }
        if let Some(ref v) = self.phone {
            fields.push(("phone", v.clone()));
        }
        if let Some(ref v) = self.gender {
            fields.push(("gender", v.clone()));
        }
        if let Some(ref v) = self.qualification {
            fields.push(("qualification", v.clone()));
        }
        if let Some(v) = self.experience_years {
            fields.push(("experience_years", v.to_string()));
        }
        if let Some(ref v) = self.blood_group {
            fields.push(("blood_group", v.clone()));
        }
        if let Some(ref v) = self.address {
            fields.push(("address", v.clone()));
        }
        if let Some(v) = self.specialization_id {
            fields.push(("specialization_id", v.to_string()));
        }
        fields
    }
}

/// A binary image to attach to a multipart profile update.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    pub fn jpeg(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: "image/jpeg".to_string(),
            bytes,
        }
    }
}

/// A specialization entry for the profile-edit dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialization {
    pub id: i64,
    pub name: String,
}
