use askama::Template;

use crate::catalog::DocTemplate;
use crate::models::case::Case;
use crate::models::document::CaseDocument;

use super::PageContext;

#[derive(Template)]
#[template(path = "documents/list.html")]
pub struct DocumentListTemplate {
    pub ctx: PageContext,
    /// Filtered rows; `total_count` is the unfiltered size.
    pub documents: Vec<CaseDocument>,
    pub search_query: String,
    pub total_count: usize,
    /// Set when the listing is scoped to one case.
    pub case: Option<Case>,
    /// Set when the fetch failed; the page then shows a retry link instead
    /// of rows.
    pub fetch_error: Option<String>,
}

#[derive(Template)]
#[template(path = "documents/compose.html")]
pub struct ComposeTemplate {
    pub ctx: PageContext,
    pub templates: &'static [DocTemplate],
    pub cases: Vec<Case>,
    pub pages: Vec<String>,
    pub selected_template: Option<String>,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "documents/edit.html")]
pub struct DocumentEditTemplate {
    pub ctx: PageContext,
    pub document: CaseDocument,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "documents/confirm_delete.html")]
pub struct ConfirmDeleteTemplate {
    pub ctx: PageContext,
    pub document: CaseDocument,
    pub case_label: Option<String>,
    pub confirm_token: String,
    pub error: Option<String>,
}
