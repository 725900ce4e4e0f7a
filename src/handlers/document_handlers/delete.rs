use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::config::Config;
use crate::errors::{AppError, render};
use crate::repository::DocumentRepository;
use crate::templates_structs::{ConfirmDeleteTemplate, PageContext};
use crate::web::csrf;
use crate::web::session::{arm_delete, set_flash, take_delete_confirmation};

async fn case_label(repo: &DocumentRepository, case_id: Option<i64>) -> Option<String> {
    let case_id = case_id?;
    repo.get_case(case_id).await.ok().map(|c| c.display())
}

/// GET /documents/{id}/delete
/// The confirmation page. Shows the document's identifying fields and arms
/// a one-time token for this exact document id — no delete request can be
/// issued without it.
pub async fn confirm_form(
    repo: web::Data<DocumentRepository>,
    config: web::Data<Config>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let document_id = path.into_inner();
    let document = repo.get(document_id).await?;
    let case_label = case_label(&repo, document.case_id).await;

    let confirm_token = arm_delete(&session, document_id);
    let ctx = PageContext::build(&session, &config, "/documents");
    let tmpl = ConfirmDeleteTemplate {
        ctx,
        document,
        case_label,
        confirm_token,
        error: None,
    };
    render(tmpl)
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub confirm_token: String,
    pub csrf_token: String,
}

/// POST /documents/{id}/delete
/// Delete is terminal; it only proceeds with the token issued by the
/// confirmation page for this document. On failure the confirmation stays
/// open so the user can retry or cancel.
pub async fn delete(
    repo: web::Data<DocumentRepository>,
    config: web::Data<Config>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<DeleteForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let document_id = path.into_inner();
    if !take_delete_confirmation(&session, document_id, &form.confirm_token) {
        return Err(AppError::Forbidden(
            "Deletion was not confirmed for this document".to_string(),
        ));
    }

    match repo.delete(document_id).await {
        Ok(receipt) => {
            set_flash(
                &session,
                &format!("Document {} deleted", receipt.document_id),
            );
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/documents"))
                .finish())
        }
        Err(e) => {
            // Keep the dialog open: re-arm and surface the failure. The
            // record was not removed, so the cached copy is still valid.
            match repo.get(document_id).await {
                Ok(document) => {
                    let case_label = case_label(&repo, document.case_id).await;
                    let confirm_token = arm_delete(&session, document_id);
                    let ctx = PageContext::build(&session, &config, "/documents");
                    let tmpl = ConfirmDeleteTemplate {
                        ctx,
                        document,
                        case_label,
                        confirm_token,
                        error: Some(e.to_string()),
                    };
                    render(tmpl)
                }
                Err(_) => Err(e),
            }
        }
    }
}
