use shared::domain::AppointmentRecord;

pub const LIST_HEADING: &str = "Citas médicas";
pub const PATIENT_LABEL: &str = "Paciente:";
pub const DOCTOR_LABEL: &str = "Doctor:";
pub const DATE_LABEL: &str = "Fecha:";
pub const MISSING_FIELD_PLACEHOLDER: &str = "-";

/// One visual row. `key` is the list position, so row identity does not
/// survive a reordered response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRow {
    pub key: usize,
    pub patient: String,
    pub doctor: String,
    pub date: String,
}

impl AppointmentRow {
    pub fn labelled_fields(&self) -> [(&'static str, &str); 3] {
        [
            (PATIENT_LABEL, self.patient.as_str()),
            (DOCTOR_LABEL, self.doctor.as_str()),
            (DATE_LABEL, self.date.as_str()),
        ]
    }
}

pub fn render_rows(records: &[AppointmentRecord]) -> Vec<AppointmentRow> {
    records
        .iter()
        .enumerate()
        .map(|(key, record)| AppointmentRow {
            key,
            patient: field_or_placeholder(record.patient.as_deref()),
            doctor: field_or_placeholder(record.doctor.as_deref()),
            date: field_or_placeholder(record.date.as_deref()),
        })
        .collect()
}

pub fn render_text(rows: &[AppointmentRow]) -> String {
    let mut out = format!("{LIST_HEADING}\n");
    for row in rows {
        out.push('\n');
        for (label, value) in row.labelled_fields() {
            out.push_str(label);
            out.push(' ');
            out.push_str(value);
            out.push('\n');
        }
    }
    out
}

fn field_or_placeholder(value: Option<&str>) -> String {
    value.unwrap_or(MISSING_FIELD_PLACEHOLDER).to_string()
}
