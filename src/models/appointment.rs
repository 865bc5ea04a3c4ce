// Allow dead code: API response structs have fields for completeness
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// One appointment row as returned by the list, detail, today, and history
/// endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Option<i64>,
    pub token_number: Option<i64>,
    pub patient_name: Option<String>,
    pub patient_image: Option<String>,
    pub patient_phone: Option<String>,
    pub age: Option<i64>,
    pub symptoms: Option<String>,
    pub appointment_date: Option<String>,
    pub scheduled_time: Option<String>,
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Appointment {
    pub fn is_scheduled(&self) -> bool {
        self.status.as_deref() == Some("scheduled")
    }

    pub fn is_completed(&self) -> bool {
        self.status.as_deref() == Some("completed")
    }
}

/// Optional filters for the list-appointments endpoint.
///
/// Only the filters that are set are emitted; values go through verbatim.
/// Date strings are not validated client-side - the server is the source
/// of truth and its validation errors come back through the normal error
/// path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentFilters {
    pub status: Option<String>,
    pub date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub patient_name: Option<String>,
    pub sort_by: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl AppointmentFilters {
    /// Query pairs for the filters that are set, in catalog order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(ref v) = self.status {
            pairs.push(("status", v.clone()));
        }
        if let Some(ref v) = self.date {
            pairs.push(("date", v.clone()));
        }
        if let Some(ref v) = self.start_date {
            pairs.push(("start_date", v.clone()));
        }
        if let Some(ref v) = self.end_date {
            pairs.push(("end_date", v.clone()));
        }
        if let Some(ref v) = self.patient_name {
            pairs.push(("patient_name", v.clone()));
        }
        if let Some(ref v) = self.sort_by {
            pairs.push(("sort_by", v.clone()));
        }
        if let Some(v) = self.page {
            pairs.push(("page", v.to_string()));
        }
        if let Some(v) = self.per_page {
            pairs.push(("per_page", v.to_string()));
        }
        pairs
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_appointment() {
        let json = r#"{
            "id": 301,
            "token_number": 14,
            "patient_name": "Ravi Kumar",
            "patient_phone": "9000000000",
            "age": 42,
            "symptoms": "Fever and cough",
            "appointment_date": "2026-01-25",
            "scheduled_time": "09:30:00",
            "status": "scheduled",
            "clinic_id": 1
        }"#;

        let apt: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(apt.id, Some(301));
        assert_eq!(apt.patient_name.as_deref(), Some("Ravi Kumar"));
        assert_eq!(apt.scheduled_time.as_deref(), Some("09:30:00"));
        assert!(apt.is_scheduled());
        assert!(!apt.is_completed());
        assert_eq!(apt.extra.get("clinic_id").and_then(|v| v.as_i64()), Some(1));
    }

    #[test]
    fn test_query_pairs_only_set_filters() {
        let filters = AppointmentFilters {
            status: Some("scheduled".to_string()),
            patient_name: Some("Ravi".to_string()),
            ..Default::default()
        };

        let pairs = filters.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("status", "scheduled".to_string()),
                ("patient_name", "Ravi".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_values_verbatim() {
        // No client-side date validation; whatever the caller set is sent
        let filters = AppointmentFilters {
            date: Some("not-a-date".to_string()),
            page: Some(2),
            per_page: Some(25),
            ..Default::default()
        };

        let pairs = filters.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("date", "not-a-date".to_string()),
                ("page", "2".to_string()),
                ("per_page", "25".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_filters() {
        assert!(AppointmentFilters::default().is_empty());
        assert!(AppointmentFilters::default().query_pairs().is_empty());
    }
}
