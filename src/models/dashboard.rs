// Allow dead code: API response structs have fields for completeness
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use crate::models::Appointment;

/// Counters shown on the dashboard screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_patients_today: Option<i64>,
    pub pending_patients: Option<i64>,
    pub completed_patients: Option<i64>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dashboard_summary() {
        let json = r#"{
            "total_patients_today": 12,
            "pending_patients": 5,
            "completed_patients": 7,
            "appointments": [
                {"id": 301, "patient_name": "Ravi Kumar", "status": "scheduled"}
            ]
        }"#;

        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_patients_today, Some(12));
        assert_eq!(summary.pending_patients, Some(5));
        assert_eq!(summary.appointments.len(), 1);
        assert!(summary.appointments[0].is_scheduled());
    }

    #[test]
    fn test_parse_dashboard_without_appointments() {
        let json = r#"{"total_patients_today": 0, "pending_patients": 0}"#;
        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        assert!(summary.appointments.is_empty());
        assert_eq!(summary.completed_patients, None);
    }
}
