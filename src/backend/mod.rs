//! Access to the document backend.
//!
//! Everything the dashboard knows about persistence goes through the
//! [`DocumentBackend`] trait: document CRUD, the case list, and the
//! success-path audit log. Production uses the HTTP implementation in
//! [`http`]; tests substitute an in-memory fake.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::case::Case;
use crate::models::document::{CaseDocument, DeleteReceipt, DocumentUpdate, NewDocument};

mod http;

pub use http::HttpBackend;

#[async_trait]
pub trait DocumentBackend: Send + Sync {
    async fn list_documents(&self) -> Result<Vec<CaseDocument>, AppError>;

    async fn get_document(&self, document_id: i64) -> Result<CaseDocument, AppError>;

    /// Documents scoped to one case. A backend 404 on this route means "no
    /// documents for this case" and is folded into an empty listing.
    async fn documents_by_case(&self, case_id: i64) -> Result<Vec<CaseDocument>, AppError>;

    async fn create_document(&self, new: NewDocument) -> Result<CaseDocument, AppError>;

    async fn update_document(
        &self,
        document_id: i64,
        update: DocumentUpdate,
    ) -> Result<CaseDocument, AppError>;

    async fn delete_document(&self, document_id: i64) -> Result<DeleteReceipt, AppError>;

    async fn list_cases(&self) -> Result<Vec<Case>, AppError>;

    /// Best-effort audit record. Callers treat failure as non-fatal.
    async fn record_log(&self, action: &str) -> Result<(), AppError>;
}
