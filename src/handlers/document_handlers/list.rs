use std::collections::HashMap;

use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::config::Config;
use crate::errors::{AppError, render};
use crate::models::document::{CaseDocument, filter_documents};
use crate::repository::DocumentRepository;
use crate::templates_structs::{DocumentListTemplate, PageContext};

fn apply_filter(docs: &[CaseDocument], term: &str) -> Vec<CaseDocument> {
    filter_documents(docs, term).into_iter().cloned().collect()
}

/// GET /documents
/// All documents, with optional substring filtering via `?q=`.
pub async fn list(
    repo: web::Data<DocumentRepository>,
    config: web::Data<Config>,
    session: Session,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let search = query.get("q").cloned().unwrap_or_default();
    let ctx = PageContext::build(&session, &config, "/documents");

    // A fetch failure still renders the page: banner plus a retry link that
    // re-issues this same request. No automatic retry.
    let tmpl = match repo.list().await {
        Ok(docs) => DocumentListTemplate {
            ctx,
            total_count: docs.len(),
            documents: apply_filter(&docs, &search),
            search_query: search,
            case: None,
            fetch_error: None,
        },
        Err(e) => DocumentListTemplate {
            ctx,
            documents: vec![],
            search_query: search,
            total_count: 0,
            case: None,
            fetch_error: Some(e.to_string()),
        },
    };
    render(tmpl)
}

/// GET /cases/{case_id}/documents
/// Documents scoped to one case. An empty case is an empty table, not an
/// error.
pub async fn list_by_case(
    repo: web::Data<DocumentRepository>,
    config: web::Data<Config>,
    session: Session,
    path: web::Path<i64>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let case_id = path.into_inner();
    let search = query.get("q").cloned().unwrap_or_default();
    let case = repo.get_case(case_id).await?;
    let ctx = PageContext::build(&session, &config, &format!("/cases/{case_id}/documents"));

    let tmpl = match repo.list_by_case(case_id).await {
        Ok(docs) => DocumentListTemplate {
            ctx,
            total_count: docs.len(),
            documents: apply_filter(&docs, &search),
            search_query: search,
            case: Some(case),
            fetch_error: None,
        },
        Err(e) => DocumentListTemplate {
            ctx,
            documents: vec![],
            search_query: search,
            total_count: 0,
            case: Some(case),
            fetch_error: Some(e.to_string()),
        },
    };
    render(tmpl)
}
