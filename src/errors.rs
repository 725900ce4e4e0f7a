use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

/// One tagged error shape for the whole app. Backend-facing failures are
/// classified at the repository boundary so every consumer matches on a
/// single enum instead of probing nested error fields.
#[derive(Debug)]
pub enum AppError {
    /// Local precondition failure. Never reaches the network.
    Validation(String),
    /// The referenced document/case/template does not exist.
    NotFound,
    /// Transport failure talking to the backend (connect, timeout, body).
    Network(String),
    /// The backend answered with a non-404 error status.
    Server(String),
    /// Missing or mismatched CSRF / confirmation token.
    Forbidden(String),
    Session(String),
    Template(askama::Error),
    /// PDF artifact assembly failed.
    Artifact(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "{msg}"),
            AppError::NotFound => write!(f, "Not found"),
            AppError::Network(msg) => write!(f, "Network error: {msg}"),
            AppError::Server(msg) => write!(f, "Backend error: {msg}"),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {msg}"),
            AppError::Session(msg) => write!(f, "Session error: {msg}"),
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Artifact(msg) => write!(f, "Artifact error: {msg}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(msg) => HttpResponse::BadRequest().body(msg.clone()),
            AppError::NotFound => HttpResponse::NotFound().body("Not Found"),
            AppError::Forbidden(msg) => HttpResponse::Forbidden().body(msg.clone()),
            AppError::Network(_) | AppError::Server(_) => {
                log::error!("{self}");
                HttpResponse::BadGateway().body("Backend unavailable")
            }
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

/// Render an Askama template into an HTML response.
pub fn render<T: Template>(tmpl: T) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
