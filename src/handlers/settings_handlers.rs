use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::AppError;
use crate::web::csrf;
use crate::web::session::set_theme;

#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    pub theme: String,
    pub csrf_token: String,
}

/// POST /settings/theme
/// Persist the dark/light/auto preference in the session and bounce back.
pub async fn save_theme(
    session: Session,
    form: web::Form<ThemeForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    set_theme(&session, &form.theme);
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/documents"))
        .finish())
}
