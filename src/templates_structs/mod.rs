// Template context structures for Askama templates, organized by domain.

use actix_session::Session;

use crate::config::Config;
use crate::web::csrf;
use crate::web::session::{take_flash, take_flash_error, theme};

/// Common context shared by all pages. Templates access these as
/// `ctx.app_name`, `ctx.flash`, etc.
pub struct PageContext {
    pub app_name: String,
    pub flash: Option<String>,
    pub flash_error: Option<String>,
    pub csrf_token: String,
    pub theme: String,
    /// Current path, for nav highlighting and retry links.
    pub active: String,
}

impl PageContext {
    pub fn build(session: &Session, config: &Config, current_path: &str) -> Self {
        Self {
            app_name: config.app_name.clone(),
            flash: take_flash(session),
            flash_error: take_flash_error(session),
            csrf_token: csrf::get_or_create_token(session),
            theme: theme(session),
            active: current_path.to_string(),
        }
    }
}

mod dashboard;
mod document;

pub use self::dashboard::DashboardTemplate;
pub use self::document::{
    ComposeTemplate, ConfirmDeleteTemplate, DocumentEditTemplate, DocumentListTemplate,
};
