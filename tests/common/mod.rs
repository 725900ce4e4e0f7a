//! Shared test infrastructure.
//!
//! Provides an in-memory [`MockBackend`] standing in for the document
//! backend: it applies mutations to a plain `Vec`, hands out monotonically
//! increasing `updated_at` stamps, and counts every call so tests can assert
//! on exactly how often the network would have been touched.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use wakili::errors::AppError;
use wakili::backend::DocumentBackend;
use wakili::models::case::Case;
use wakili::models::document::{CaseDocument, DeleteReceipt, DocumentUpdate, NewDocument};

const EPOCH: i64 = 1_700_000_000;

pub struct MockBackend {
    docs: Mutex<Vec<CaseDocument>>,
    cases: Vec<Case>,
    next_id: AtomicI64,
    tick: AtomicI64,
    /// When set, every call fails with a transport error.
    pub offline: AtomicBool,
    pub list_calls: AtomicUsize,
    pub get_calls: AtomicUsize,
    pub by_case_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub case_calls: AtomicUsize,
    pub logs: Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::with_docs(vec![])
    }

    pub fn with_docs(docs: Vec<CaseDocument>) -> Self {
        let next_id = docs.iter().map(|d| d.document_id).max().unwrap_or(0) + 1;
        Self {
            docs: Mutex::new(docs),
            cases: sample_cases(),
            next_id: AtomicI64::new(next_id),
            tick: AtomicI64::new(1),
            offline: AtomicBool::new(false),
            list_calls: AtomicUsize::new(0),
            get_calls: AtomicUsize::new(0),
            by_case_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            case_calls: AtomicUsize::new(0),
            logs: Mutex::new(vec![]),
        }
    }

    fn now(&self) -> DateTime<Utc> {
        let tick = self.tick.fetch_add(1, Ordering::SeqCst);
        Utc.timestamp_opt(EPOCH + tick, 0).unwrap()
    }

    fn check_online(&self) -> Result<(), AppError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(AppError::Network("connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    pub fn documents(&self) -> Vec<CaseDocument> {
        self.docs.lock().unwrap().clone()
    }

    pub fn recorded_logs(&self) -> Vec<String> {
        self.logs.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentBackend for MockBackend {
    async fn list_documents(&self) -> Result<Vec<CaseDocument>, AppError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        Ok(self.docs.lock().unwrap().clone())
    }

    async fn get_document(&self, document_id: i64) -> Result<CaseDocument, AppError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        self.docs
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.document_id == document_id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn documents_by_case(&self, case_id: i64) -> Result<Vec<CaseDocument>, AppError> {
        self.by_case_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        Ok(self
            .docs
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.case_id == Some(case_id))
            .cloned()
            .collect())
    }

    async fn create_document(&self, new: NewDocument) -> Result<CaseDocument, AppError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let doc = CaseDocument {
            document_id: id,
            case_id: new.case_id,
            document_url: format!("https://files.wakili.example/{id}/{}", new.document_name),
            document_name: new.document_name,
            mime_type: new.mime_type,
            file_size: new.bytes.len() as i64,
            updated_at: self.now(),
            checksum: new.checksum,
        };
        self.docs.lock().unwrap().push(doc.clone());
        Ok(doc)
    }

    async fn update_document(
        &self,
        document_id: i64,
        update: DocumentUpdate,
    ) -> Result<CaseDocument, AppError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        let now = self.now();
        let mut docs = self.docs.lock().unwrap();
        let doc = docs
            .iter_mut()
            .find(|d| d.document_id == document_id)
            .ok_or(AppError::NotFound)?;
        if let Some(name) = update.document_name {
            doc.document_name = name;
        }
        if let Some(url) = update.document_url {
            doc.document_url = url;
        }
        doc.updated_at = now;
        Ok(doc.clone())
    }

    async fn delete_document(&self, document_id: i64) -> Result<DeleteReceipt, AppError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        let mut docs = self.docs.lock().unwrap();
        let before = docs.len();
        docs.retain(|d| d.document_id != document_id);
        if docs.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(DeleteReceipt {
            success: true,
            document_id,
        })
    }

    async fn list_cases(&self) -> Result<Vec<Case>, AppError> {
        self.case_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        Ok(self.cases.clone())
    }

    async fn record_log(&self, action: &str) -> Result<(), AppError> {
        self.check_online()?;
        self.logs.lock().unwrap().push(action.to_string());
        Ok(())
    }
}

pub fn sample_cases() -> Vec<Case> {
    vec![
        Case {
            case_id: 7,
            case_number: "HCCC/7/2026".to_string(),
            case_track_number: "TRK-0007".to_string(),
            case_description: "Succession dispute".to_string(),
        },
        Case {
            case_id: 12,
            case_number: "MCCC/12/2026".to_string(),
            case_track_number: "TRK-0012".to_string(),
            case_description: "Contract claim".to_string(),
        },
    ]
}

pub fn sample_doc(document_id: i64, case_id: Option<i64>, name: &str) -> CaseDocument {
    CaseDocument {
        document_id,
        case_id,
        document_name: name.to_string(),
        document_url: format!("https://files.wakili.example/{document_id}/{name}"),
        mime_type: "application/pdf".to_string(),
        file_size: 4096,
        updated_at: Utc.timestamp_opt(EPOCH, 0).unwrap(),
        checksum: None,
    }
}
