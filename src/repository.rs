//! Single point of truth for reading and mutating document records.
//!
//! Wraps the backend with a client-side cache keyed by document identity and
//! by case identity. Every successful mutation discards the whole document
//! cache ("Document" tag semantics) before returning, so a reader never
//! observes a set older than its own last successful write. Freshness over
//! efficiency: no incremental patching, no coherency edge cases.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::backend::DocumentBackend;
use crate::errors::AppError;
use crate::models::case::Case;
use crate::models::document::{CaseDocument, DeleteReceipt, DocumentUpdate, NewDocument};

#[derive(Default)]
struct DocumentCache {
    all: Option<Vec<CaseDocument>>,
    by_case: HashMap<i64, Vec<CaseDocument>>,
    by_id: HashMap<i64, CaseDocument>,
}

pub struct DocumentRepository {
    backend: Arc<dyn DocumentBackend>,
    cache: Mutex<DocumentCache>,
    // Cases are reference data; cached once per process lifetime.
    cases: Mutex<Option<Vec<Case>>>,
}

impl DocumentRepository {
    pub fn new(backend: Arc<dyn DocumentBackend>) -> Self {
        Self {
            backend,
            cache: Mutex::new(DocumentCache::default()),
            cases: Mutex::new(None),
        }
    }

    /// Handle for fire-and-forget collaborators (the audit trail).
    pub fn backend_handle(&self) -> Arc<dyn DocumentBackend> {
        Arc::clone(&self.backend)
    }

    fn invalidate_documents(&self) {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.all = None;
        cache.by_case.clear();
        cache.by_id.clear();
    }

    pub async fn list(&self) -> Result<Vec<CaseDocument>, AppError> {
        {
            let cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(docs) = &cache.all {
                return Ok(docs.clone());
            }
        }
        let docs = self.backend.list_documents().await?;
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.all = Some(docs.clone());
        for doc in &docs {
            cache.by_id.insert(doc.document_id, doc.clone());
        }
        Ok(docs)
    }

    pub async fn get(&self, document_id: i64) -> Result<CaseDocument, AppError> {
        {
            let cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(doc) = cache.by_id.get(&document_id) {
                return Ok(doc.clone());
            }
        }
        let doc = self.backend.get_document(document_id).await?;
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.by_id.insert(doc.document_id, doc.clone());
        Ok(doc)
    }

    /// Case-scoped listing. Empty result is an empty vector, not an error.
    pub async fn list_by_case(&self, case_id: i64) -> Result<Vec<CaseDocument>, AppError> {
        {
            let cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(docs) = cache.by_case.get(&case_id) {
                return Ok(docs.clone());
            }
        }
        let docs = self.backend.documents_by_case(case_id).await?;
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.by_case.insert(case_id, docs.clone());
        for doc in &docs {
            cache.by_id.insert(doc.document_id, doc.clone());
        }
        Ok(docs)
    }

    pub async fn create(&self, new: NewDocument) -> Result<CaseDocument, AppError> {
        let doc = self.backend.create_document(new).await?;
        self.invalidate_documents();
        Ok(doc)
    }

    pub async fn update(
        &self,
        document_id: i64,
        update: DocumentUpdate,
    ) -> Result<CaseDocument, AppError> {
        let doc = self.backend.update_document(document_id, update).await?;
        self.invalidate_documents();
        Ok(doc)
    }

    pub async fn delete(&self, document_id: i64) -> Result<DeleteReceipt, AppError> {
        let receipt = self.backend.delete_document(document_id).await?;
        self.invalidate_documents();
        Ok(receipt)
    }

    pub async fn list_cases(&self) -> Result<Vec<Case>, AppError> {
        {
            let cases = self.cases.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(cases) = cases.as_ref() {
                return Ok(cases.clone());
            }
        }
        let fetched = self.backend.list_cases().await?;
        let mut cases = self.cases.lock().unwrap_or_else(|e| e.into_inner());
        *cases = Some(fetched.clone());
        Ok(fetched)
    }

    /// Case lookup for page headers; unknown ids are `NotFound`.
    pub async fn get_case(&self, case_id: i64) -> Result<Case, AppError> {
        let cases = self.list_cases().await?;
        cases
            .into_iter()
            .find(|c| c.case_id == case_id)
            .ok_or(AppError::NotFound)
    }
}
