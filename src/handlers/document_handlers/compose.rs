use actix_multipart::form::{MultipartForm, bytes::Bytes as UploadedBytes, text::Text};
use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::composer::DraftStore;
use crate::config::Config;
use crate::errors::{AppError, render};
use crate::models::document::NewDocument;
use crate::pdf::{PdfSurface, layout};
use crate::repository::DocumentRepository;
use crate::templates_structs::{ComposeTemplate, PageContext};
use crate::web::csrf;
use crate::web::session::{draft_id, set_flash, set_flash_error};
use crate::{audit, catalog};

fn checksum(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.to_string()))
        .finish()
}

fn landing(case_id: Option<i64>) -> String {
    match case_id {
        Some(id) => format!("/cases/{id}/documents"),
        None => "/documents".to_string(),
    }
}

/// The case picker posts "" (nothing chosen), "general", or a case id.
/// "Nothing chosen" keeps the case requirement armed so the composer guard
/// rejects the submit; "general" is an explicit opt-out.
fn parse_case_choice(raw: &str) -> (Option<i64>, bool) {
    match raw.trim() {
        "" => (None, true),
        "general" => (None, false),
        s => (s.parse::<i64>().ok(), true),
    }
}

/// GET /documents/new
/// The composer page: template picker, page editor, and raw upload form.
pub async fn new_form(
    repo: web::Data<DocumentRepository>,
    config: web::Data<Config>,
    drafts: web::Data<DraftStore>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let draft = drafts.snapshot(draft_id(&session));
    let ctx = PageContext::build(&session, &config, "/documents/new");

    let mut errors = vec![];
    let cases = match repo.list_cases().await {
        Ok(cases) => cases,
        Err(e) => {
            errors.push(format!("Case list unavailable: {e}"));
            vec![]
        }
    };

    let tmpl = ComposeTemplate {
        ctx,
        templates: catalog::all(),
        cases,
        pages: draft.pages().to_vec(),
        selected_template: draft.template_name().map(str::to_string),
        errors,
    };
    render(tmpl)
}

#[derive(Debug, Deserialize)]
pub struct TemplateForm {
    pub template_id: String,
    pub csrf_token: String,
}

/// POST /documents/compose/template
/// Seed the draft from a catalog template. Clears any chosen file.
pub async fn choose_template(
    drafts: web::Data<DraftStore>,
    session: Session,
    form: web::Form<TemplateForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let template = catalog::find(&form.template_id).ok_or(AppError::NotFound)?;
    let seed = catalog::seed_text(template.id)?;

    let result = drafts.with(draft_id(&session), |c| {
        c.choose_template(template.id, template.name, seed)
    });
    match result {
        Ok(()) => set_flash(&session, &format!("Template '{}' loaded", template.name)),
        Err(e) => set_flash_error(&session, &e.to_string()),
    }
    Ok(see_other("/documents/new"))
}

/// POST /documents/compose/discard
/// Drop the draft and return to an idle composer.
pub async fn discard(
    drafts: web::Data<DraftStore>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    drafts.with(draft_id(&session), |c| c.discard());
    set_flash(&session, "Draft discarded");
    Ok(see_other("/documents/new"))
}

#[derive(Debug, Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

/// POST /documents/compose
/// The page-editor form: saves every page's text, then either stops there,
/// appends a page, or generates and submits the artifact — according to the
/// `action` field.
pub async fn compose_submit(
    repo: web::Data<DocumentRepository>,
    drafts: web::Data<DraftStore>,
    session: Session,
    form: web::Form<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
    let fields = form.into_inner();
    let field = |name: &str| {
        fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    };
    csrf::validate_csrf(&session, field("csrf_token"))?;

    let action = field("action").to_string();
    let (case_id, _) = parse_case_choice(field("case_choice"));
    let pages: Vec<String> = fields
        .iter()
        .filter(|(k, _)| k == "page")
        .map(|(_, v)| v.clone())
        .collect();

    let id = draft_id(&session);

    // Fold the submitted textareas back into the draft before acting.
    let saved: Result<(), AppError> = drafts.with(id, |c| {
        for (i, text) in pages.iter().enumerate() {
            if i >= c.pages().len() {
                c.add_page()?;
            }
            c.edit_page(i, text.clone())?;
        }
        Ok(())
    });
    if let Err(e) = saved {
        set_flash_error(&session, &e.to_string());
        return Ok(see_other("/documents/new"));
    }

    match action.as_str() {
        "add_page" => {
            if let Err(e) = drafts.with(id, |c| c.add_page()) {
                set_flash_error(&session, &e.to_string());
            }
            Ok(see_other("/documents/new"))
        }
        "generate" => generate(&repo, &drafts, &session, id, case_id).await,
        _ => {
            set_flash(&session, "Draft saved");
            Ok(see_other("/documents/new"))
        }
    }
}

/// Build the PDF artifact from the draft pages and submit it. The composer
/// guard runs first; a guard failure never touches the network. A failed
/// upload keeps the pages (the artifact bytes are discarded and rebuilt on
/// the next attempt).
async fn generate(
    repo: &DocumentRepository,
    drafts: &DraftStore,
    session: &Session,
    id: uuid::Uuid,
    case_id: Option<i64>,
) -> Result<HttpResponse, AppError> {
    let job = match drafts.with(id, |c| c.begin_generate(case_id, Utc::now())) {
        Ok(job) => job,
        Err(e) => {
            set_flash_error(session, &e.to_string());
            return Ok(see_other("/documents/new"));
        }
    };

    let mut surface = PdfSurface::new();
    layout::render(&mut surface, &job.pages);
    let bytes = match surface.into_bytes() {
        Ok(bytes) => bytes,
        Err(e) => {
            drafts.with(id, |c| c.finish(false));
            set_flash_error(session, &e.to_string());
            return Ok(see_other("/documents/new"));
        }
    };

    let new = NewDocument {
        case_id: job.case_id,
        document_name: job.document_name.clone(),
        mime_type: "application/pdf".to_string(),
        checksum: Some(checksum(&bytes)),
        bytes,
    };
    match repo.create(new).await {
        Ok(doc) => {
            drafts.with(id, |c| c.finish(true));
            audit::record(
                repo.backend_handle(),
                format!("Created document: {}", doc.document_name),
            );
            set_flash(session, &format!("Document '{}' created", doc.document_name));
            Ok(see_other(&landing(job.case_id)))
        }
        Err(e) => {
            drafts.with(id, |c| c.finish(false));
            set_flash_error(session, &e.to_string());
            Ok(see_other("/documents/new"))
        }
    }
}

#[derive(Debug, MultipartForm)]
pub struct UploadForm {
    #[multipart(limit = "20MB")]
    pub file: Option<UploadedBytes>,
    pub case_choice: Text<String>,
    pub csrf_token: Text<String>,
}

/// POST /documents/upload
/// Raw file upload. Choosing a file clears any template-seeded pages; the
/// composer guard enforces that a case (or the explicit "general" choice)
/// was picked before anything is sent.
pub async fn upload(
    repo: web::Data<DocumentRepository>,
    drafts: web::Data<DraftStore>,
    session: Session,
    MultipartForm(form): MultipartForm<UploadForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let (case_id, case_required) = parse_case_choice(&form.case_choice);
    let chosen = form.file.as_ref().and_then(|f| {
        let name = f.file_name.clone()?;
        if name.is_empty() || f.data.is_empty() {
            return None;
        }
        let mime = f
            .content_type
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());
        Some((name, mime, f.data.to_vec()))
    });

    let id = draft_id(&session);
    let job = drafts.with(id, |c| {
        if let Some((name, mime, bytes)) = chosen {
            c.choose_file(&name, &mime, bytes)?;
        }
        c.begin_upload(case_id, case_required)
    });
    let job = match job {
        Ok(job) => job,
        Err(e) => {
            set_flash_error(&session, &e.to_string());
            return Ok(see_other("/documents/new"));
        }
    };

    let new = NewDocument {
        case_id: job.case_id,
        document_name: job.file.name.clone(),
        mime_type: job.file.mime.clone(),
        checksum: Some(checksum(&job.file.bytes)),
        bytes: job.file.bytes,
    };
    match repo.create(new).await {
        Ok(doc) => {
            drafts.with(id, |c| c.finish(true));
            audit::record(
                repo.backend_handle(),
                format!("Uploaded document: {}", doc.document_name),
            );
            set_flash(
                &session,
                &format!("Document '{}' uploaded", doc.document_name),
            );
            Ok(see_other(&landing(job.case_id)))
        }
        Err(e) => {
            drafts.with(id, |c| c.finish(false));
            set_flash_error(&session, &e.to_string());
            Ok(see_other("/documents/new"))
        }
    }
}
