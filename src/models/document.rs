use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A document record as held by the backend. `document_id` is assigned once
/// by the server and never reused; `updated_at` advances on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseDocument {
    pub document_id: i64,
    /// Absent for general (non-case) documents.
    pub case_id: Option<i64>,
    pub document_name: String,
    pub document_url: String,
    pub mime_type: String,
    pub file_size: i64,
    pub updated_at: DateTime<Utc>,
    /// Advisory content hash. Sent on create, never verified client-side.
    pub checksum: Option<String>,
}

impl CaseDocument {
    /// Human-readable file size for list rows and the delete prompt.
    pub fn size_display(&self) -> String {
        format_size(self.file_size)
    }
}

/// Payload for a new document: raw upload and generated artifacts both end
/// up here before the multipart POST.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub case_id: Option<i64>,
    pub document_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    pub checksum: Option<String>,
}

/// Partial update of the mutable fields. The absence of size/mime/checksum
/// fields here is what keeps `update` from touching them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
}

/// Acknowledgment returned by the backend on delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteReceipt {
    pub success: bool,
    pub document_id: i64,
}

/// Case-insensitive substring filter over `document_name` and the
/// stringified `case_id`. An empty term matches everything. Purely derived:
/// the input set is never mutated.
pub fn filter_documents<'a>(docs: &'a [CaseDocument], term: &str) -> Vec<&'a CaseDocument> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return docs.iter().collect();
    }
    docs.iter()
        .filter(|d| {
            d.document_name.to_lowercase().contains(&needle)
                || d.case_id
                    .map(|id| id.to_string().contains(&needle))
                    .unwrap_or(false)
        })
        .collect()
}

/// Format a byte count as a short human-readable string.
pub fn format_size(bytes: i64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes.max(0) as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}
