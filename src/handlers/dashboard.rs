use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::config::Config;
use crate::errors::{AppError, render};
use crate::repository::DocumentRepository;
use crate::templates_structs::{DashboardTemplate, PageContext};

/// GET /dashboard
/// Overview: counts plus the five most recently touched documents.
pub async fn index(
    repo: web::Data<DocumentRepository>,
    config: web::Data<Config>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config, "/dashboard");

    let (document_count, case_count, recent, fetch_error) = match repo.list().await {
        Ok(docs) => {
            let case_count = repo.list_cases().await.map(|c| c.len()).unwrap_or(0);
            let mut recent = docs.clone();
            recent.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
            recent.truncate(5);
            (docs.len(), case_count, recent, None)
        }
        Err(e) => (0, 0, vec![], Some(e.to_string())),
    };

    let tmpl = DashboardTemplate {
        ctx,
        document_count,
        case_count,
        recent,
        fetch_error,
    };
    render(tmpl)
}
