use serde::{Deserialize, Serialize};

/// A legal matter owned by the backend. Read-only reference data here: it
/// only populates the case picker and the case column of document lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub case_id: i64,
    pub case_number: String,
    pub case_track_number: String,
    pub case_description: String,
}

impl Case {
    /// Label used in pickers and list rows.
    pub fn display(&self) -> String {
        format!("{} — {}", self.case_number, self.case_description)
    }
}
