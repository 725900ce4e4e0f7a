//! The ephemeral editing session that produces a new document artifact.
//!
//! A composer is either uploading a raw file or editing free-text pages
//! (optionally seeded from a template) — never both. Submission guards live
//! here so a bad submit fails locally, before anything touches the network.

use chrono::{DateTime, Utc};

use crate::errors::AppError;

pub mod drafts;

pub use drafts::DraftStore;

/// Where to land if an in-flight submission fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resume {
    Uploading,
    Editing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// No file, no template, one empty page.
    Idle,
    /// A raw file is chosen; page editing is locked out.
    Uploading,
    /// Free-text pages exist; file upload is locked out.
    Editing,
    /// A submission is in flight; all other actions are rejected.
    Submitting(Resume),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChosenFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Everything `submit_upload` needs to hand to the repository.
#[derive(Debug, Clone)]
pub struct UploadJob {
    pub file: ChosenFile,
    pub case_id: Option<i64>,
}

/// Everything artifact generation needs: name and page texts. The PDF bytes
/// are produced by the caller so the composer stays free of drawing code.
#[derive(Debug, Clone)]
pub struct GenerateJob {
    pub document_name: String,
    pub pages: Vec<String>,
    pub case_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Composer {
    mode: Mode,
    template_id: Option<String>,
    template_name: Option<String>,
    pages: Vec<String>,
    file: Option<ChosenFile>,
}

impl Composer {
    pub fn new() -> Self {
        Self {
            mode: Mode::Idle,
            template_id: None,
            template_name: None,
            pages: vec![String::new()],
            file: None,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn template_id(&self) -> Option<&str> {
        self.template_id.as_deref()
    }

    pub fn template_name(&self) -> Option<&str> {
        self.template_name.as_deref()
    }

    pub fn chosen_file(&self) -> Option<&ChosenFile> {
        self.file.as_ref()
    }

    fn reject_if_submitting(&self) -> Result<(), AppError> {
        if matches!(self.mode, Mode::Submitting(_)) {
            return Err(AppError::Validation(
                "A submission is already in progress".to_string(),
            ));
        }
        Ok(())
    }

    /// Enter upload mode. Clears any template selection and page content —
    /// the two composition paths never coexist.
    pub fn choose_file(&mut self, name: &str, mime: &str, bytes: Vec<u8>) -> Result<(), AppError> {
        self.reject_if_submitting()?;
        self.template_id = None;
        self.template_name = None;
        self.pages = vec![String::new()];
        self.file = Some(ChosenFile {
            name: name.to_string(),
            mime: mime.to_string(),
            bytes,
        });
        self.mode = Mode::Uploading;
        Ok(())
    }

    /// Enter editing mode with a single template-seeded page. Clears any
    /// chosen file.
    pub fn choose_template(
        &mut self,
        template_id: &str,
        template_name: &str,
        seed: String,
    ) -> Result<(), AppError> {
        self.reject_if_submitting()?;
        self.file = None;
        self.template_id = Some(template_id.to_string());
        self.template_name = Some(template_name.to_string());
        self.pages = vec![seed];
        self.mode = Mode::Editing;
        Ok(())
    }

    /// Append one empty page. Valid while editing (an idle composer becomes
    /// an editing one), never while a file is chosen.
    pub fn add_page(&mut self) -> Result<(), AppError> {
        self.reject_if_submitting()?;
        if self.mode == Mode::Uploading {
            return Err(AppError::Validation(
                "Discard the chosen file before editing pages".to_string(),
            ));
        }
        self.pages.push(String::new());
        self.mode = Mode::Editing;
        Ok(())
    }

    /// Replace the text of page `index`.
    pub fn edit_page(&mut self, index: usize, text: String) -> Result<(), AppError> {
        self.reject_if_submitting()?;
        if self.mode == Mode::Uploading {
            return Err(AppError::Validation(
                "Discard the chosen file before editing pages".to_string(),
            ));
        }
        let page = self
            .pages
            .get_mut(index)
            .ok_or_else(|| AppError::Validation(format!("No page {}", index + 1)))?;
        *page = text;
        self.mode = Mode::Editing;
        Ok(())
    }

    /// Guarded entry into upload submission. Local check only — a failure
    /// here has had zero network effect.
    pub fn begin_upload(
        &mut self,
        case_id: Option<i64>,
        case_required: bool,
    ) -> Result<UploadJob, AppError> {
        self.reject_if_submitting()?;
        let Some(file) = self.file.clone() else {
            return Err(AppError::Validation(
                "Choose a document to upload".to_string(),
            ));
        };
        if self.mode != Mode::Uploading {
            return Err(AppError::Validation(
                "Choose a document to upload".to_string(),
            ));
        }
        if case_required && case_id.is_none() {
            return Err(AppError::Validation(
                "Select a case before uploading".to_string(),
            ));
        }
        self.mode = Mode::Submitting(Resume::Uploading);
        Ok(UploadJob { file, case_id })
    }

    /// Guarded entry into artifact generation. Requires at least one
    /// non-blank page; names the artifact after the selected template or a
    /// timestamp-based default.
    pub fn begin_generate(
        &mut self,
        case_id: Option<i64>,
        now: DateTime<Utc>,
    ) -> Result<GenerateJob, AppError> {
        self.reject_if_submitting()?;
        if self.mode == Mode::Uploading {
            return Err(AppError::Validation(
                "Discard the chosen file before generating".to_string(),
            ));
        }
        if !self.pages.iter().any(|p| !p.trim().is_empty()) {
            return Err(AppError::Validation(
                "Cannot submit an empty document".to_string(),
            ));
        }
        let document_name = match &self.template_name {
            Some(name) => format!("{name}.pdf"),
            None => format!("document-{}.pdf", now.format("%Y%m%d-%H%M%S")),
        };
        let job = GenerateJob {
            document_name,
            pages: self.pages.clone(),
            case_id,
        };
        self.mode = Mode::Submitting(Resume::Editing);
        Ok(job)
    }

    /// Resolve an in-flight submission. Success resets the session to Idle;
    /// failure restores the pre-submit mode with all entered data intact so
    /// the user can retry.
    pub fn finish(&mut self, success: bool) {
        let resume = match self.mode {
            Mode::Submitting(resume) => resume,
            _ => return,
        };
        if success {
            *self = Composer::new();
        } else {
            self.mode = match resume {
                Resume::Uploading => Mode::Uploading,
                Resume::Editing => Mode::Editing,
            };
        }
    }

    /// Drop everything and return to Idle.
    pub fn discard(&mut self) {
        *self = Composer::new();
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}
