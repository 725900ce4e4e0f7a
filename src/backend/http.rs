use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde_json::json;

use crate::errors::AppError;
use crate::models::case::Case;
use crate::models::document::{CaseDocument, DeleteReceipt, DocumentUpdate, NewDocument};

use super::DocumentBackend;

/// HTTP client for the document backend. Thin and stateless: the caching
/// layer lives in the repository, not here.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Classify a transport-level failure.
    fn transport(e: reqwest::Error) -> AppError {
        AppError::Network(e.to_string())
    }

    /// Map a non-success status into the error taxonomy, consuming the body
    /// for the message where the backend provides one.
    async fn fail(resp: Response) -> AppError {
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return AppError::NotFound;
        }
        let detail = resp.text().await.unwrap_or_default();
        if detail.is_empty() {
            AppError::Server(format!("backend returned {status}"))
        } else {
            AppError::Server(format!("backend returned {status}: {detail}"))
        }
    }

    async fn read_json<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, AppError> {
        if !resp.status().is_success() {
            return Err(Self::fail(resp).await);
        }
        resp.json::<T>()
            .await
            .map_err(|e| AppError::Server(format!("bad backend payload: {e}")))
    }
}

#[async_trait]
impl DocumentBackend for HttpBackend {
    async fn list_documents(&self) -> Result<Vec<CaseDocument>, AppError> {
        let resp = self
            .client
            .get(self.url("/documents"))
            .send()
            .await
            .map_err(Self::transport)?;
        Self::read_json(resp).await
    }

    async fn get_document(&self, document_id: i64) -> Result<CaseDocument, AppError> {
        let resp = self
            .client
            .get(self.url(&format!("/documents/{document_id}")))
            .send()
            .await
            .map_err(Self::transport)?;
        Self::read_json(resp).await
    }

    async fn documents_by_case(&self, case_id: i64) -> Result<Vec<CaseDocument>, AppError> {
        let resp = self
            .client
            .get(self.url(&format!("/documents/by-case/{case_id}")))
            .send()
            .await
            .map_err(Self::transport)?;
        match Self::read_json(resp).await {
            Ok(docs) => Ok(docs),
            // "No documents for this case" comes back as a 404.
            Err(AppError::NotFound) => Ok(vec![]),
            Err(e) => Err(e),
        }
    }

    async fn create_document(&self, new: NewDocument) -> Result<CaseDocument, AppError> {
        let part = Part::bytes(new.bytes)
            .file_name(new.document_name.clone())
            .mime_str(&new.mime_type)
            .map_err(|e| AppError::Validation(format!("bad mime type: {e}")))?;

        let mut form = Form::new()
            .text("document_name", new.document_name)
            .part("file", part);
        if let Some(case_id) = new.case_id {
            form = form.text("case_id", case_id.to_string());
        }
        if let Some(checksum) = new.checksum {
            form = form.text("checksum", checksum);
        }

        let resp = self
            .client
            .post(self.url("/documents"))
            .multipart(form)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::read_json(resp).await
    }

    async fn update_document(
        &self,
        document_id: i64,
        update: DocumentUpdate,
    ) -> Result<CaseDocument, AppError> {
        let resp = self
            .client
            .put(self.url(&format!("/documents/{document_id}")))
            .json(&update)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::read_json(resp).await
    }

    async fn delete_document(&self, document_id: i64) -> Result<DeleteReceipt, AppError> {
        let resp = self
            .client
            .delete(self.url(&format!("/documents/{document_id}")))
            .send()
            .await
            .map_err(Self::transport)?;
        Self::read_json(resp).await
    }

    async fn list_cases(&self) -> Result<Vec<Case>, AppError> {
        let resp = self
            .client
            .get(self.url("/cases"))
            .send()
            .await
            .map_err(Self::transport)?;
        Self::read_json(resp).await
    }

    async fn record_log(&self, action: &str) -> Result<(), AppError> {
        let resp = self
            .client
            .post(self.url("/logs"))
            .json(&json!({ "action": action }))
            .send()
            .await
            .map_err(Self::transport)?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(Self::fail(resp).await)
        }
    }
}
