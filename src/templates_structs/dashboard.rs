use askama::Template;

use crate::models::document::CaseDocument;

use super::PageContext;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub document_count: usize,
    pub case_count: usize,
    pub recent: Vec<CaseDocument>,
    pub fetch_error: Option<String>,
}
