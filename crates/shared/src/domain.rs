use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One appointment as served by the `/api/citas/` endpoint.
///
/// Fields are kept as optional text because the endpoint's shape is not
/// validated: whatever arrives is rendered as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    #[serde(rename = "paciente", default, skip_serializing_if = "Option::is_none")]
    pub patient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor: Option<String>,
    #[serde(rename = "fecha", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl AppointmentRecord {
    pub fn new(
        patient: impl Into<String>,
        doctor: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            patient: Some(patient.into()),
            doctor: Some(doctor.into()),
            date: Some(date.into()),
        }
    }

    /// Builds a record from an arbitrary JSON element without rejecting it.
    ///
    /// Non-object elements produce a record with every field absent.
    pub fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        Self {
            patient: object.get("paciente").and_then(field_text),
            doctor: object.get("doctor").and_then(field_text),
            date: object.get("fecha").and_then(field_text),
        }
    }
}

fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Decodes a response body that must be a JSON array of appointment-like
/// elements.
pub fn decode_appointment_list(body: &[u8]) -> Result<Vec<AppointmentRecord>, serde_json::Error> {
    let elements: Vec<Value> = serde_json::from_slice(body)?;
    Ok(elements.iter().map(AppointmentRecord::from_json).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_well_formed_records_in_server_order() {
        let body = json!([
            {"paciente": "Ana Torres", "doctor": "Dr. Ruiz", "fecha": "2024-05-02T09:30:00Z"},
            {"paciente": "Luis Vega", "doctor": "Dra. Paz", "fecha": "2024-05-01T16:00:00Z"},
        ])
        .to_string();

        let records = decode_appointment_list(body.as_bytes()).expect("decode");
        assert_eq!(
            records,
            vec![
                AppointmentRecord::new("Ana Torres", "Dr. Ruiz", "2024-05-02T09:30:00Z"),
                AppointmentRecord::new("Luis Vega", "Dra. Paz", "2024-05-01T16:00:00Z"),
            ]
        );
    }

    #[test]
    fn missing_and_null_fields_become_absent() {
        let body = br#"[{"paciente": "Ana", "doctor": null}]"#;
        let records = decode_appointment_list(body).expect("decode");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].patient.as_deref(), Some("Ana"));
        assert_eq!(records[0].doctor, None);
        assert_eq!(records[0].date, None);
    }

    #[test]
    fn non_string_fields_pass_through_as_json_text() {
        let body = br#"[{"paciente": 42, "doctor": true, "fecha": ["2024", "05"]}, "stray"]"#;
        let records = decode_appointment_list(body).expect("decode");
        assert_eq!(records[0].patient.as_deref(), Some("42"));
        assert_eq!(records[0].doctor.as_deref(), Some("true"));
        assert_eq!(records[0].date.as_deref(), Some(r#"["2024","05"]"#));
        assert_eq!(records[1], AppointmentRecord::default());
    }

    #[test]
    fn rejects_bodies_that_are_not_arrays() {
        assert!(decode_appointment_list(br#"{"results": []}"#).is_err());
        assert!(decode_appointment_list(b"<html>").is_err());
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let value = serde_json::to_value(AppointmentRecord::new("Ana", "Dr. Ruiz", "hoy"))
            .expect("serialize");
        assert_eq!(value, json!({"paciente": "Ana", "doctor": "Dr. Ruiz", "fecha": "hoy"}));
    }
}
