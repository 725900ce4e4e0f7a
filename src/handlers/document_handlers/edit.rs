use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::config::Config;
use crate::errors::{AppError, render};
use crate::models::document::DocumentUpdate;
use crate::repository::DocumentRepository;
use crate::templates_structs::{DocumentEditTemplate, PageContext};
use crate::web::csrf;
use crate::web::session::set_flash;

#[derive(Debug, Deserialize)]
pub struct EditForm {
    pub document_name: String,
    pub document_url: String,
    pub csrf_token: String,
}

/// GET /documents/{id}/edit
/// Edit form pre-filled with the document's name and url reference.
pub async fn edit_form(
    repo: web::Data<DocumentRepository>,
    config: web::Data<Config>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let document_id = path.into_inner();
    let document = repo.get(document_id).await?;

    let ctx = PageContext::build(&session, &config, "/documents");
    let tmpl = DocumentEditTemplate {
        ctx,
        document,
        errors: vec![],
    };
    render(tmpl)
}

/// POST /documents/{id}
/// Rename and/or repoint the document. Size, mime type, and checksum are
/// not editable from here.
pub async fn update(
    repo: web::Data<DocumentRepository>,
    config: web::Data<Config>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<EditForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let document_id = path.into_inner();
    let name = form.document_name.trim();
    let url = form.document_url.trim();

    let mut errors = vec![];
    if name.is_empty() {
        errors.push("Document name is required".to_string());
    }
    if url.is_empty() {
        errors.push("Document location is required".to_string());
    }
    if !errors.is_empty() {
        let document = repo.get(document_id).await?;
        let ctx = PageContext::build(&session, &config, "/documents");
        let tmpl = DocumentEditTemplate {
            ctx,
            document,
            errors,
        };
        return render(tmpl);
    }

    let update = DocumentUpdate {
        document_name: Some(name.to_string()),
        document_url: Some(url.to_string()),
    };
    match repo.update(document_id, update).await {
        Ok(doc) => {
            set_flash(&session, &format!("Document '{}' updated", doc.document_name));
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/documents"))
                .finish())
        }
        Err(AppError::NotFound) => Err(AppError::NotFound),
        Err(e) => {
            // Retryable: surface the failure on the form and keep the input.
            let mut document = repo.get(document_id).await?;
            document.document_name = name.to_string();
            document.document_url = url.to_string();
            let ctx = PageContext::build(&session, &config, "/documents");
            let tmpl = DocumentEditTemplate {
                ctx,
                document,
                errors: vec![e.to_string()],
            };
            render(tmpl)
        }
    }
}
