use actix_session::Session;
use uuid::Uuid;

use super::csrf;

/// Take (and clear) the success flash notice.
pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}

/// Take (and clear) the error flash notice.
pub fn take_flash_error(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash_error").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash_error");
    }
    flash
}

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert("flash", message);
}

pub fn set_flash_error(session: &Session, message: &str) {
    let _ = session.insert("flash_error", message);
}

/// Theme preference: "auto", "light", or "dark". Pure UI state, kept in the
/// session and never entangled with document data.
pub fn theme(session: &Session) -> String {
    session
        .get::<String>("theme")
        .unwrap_or(None)
        .unwrap_or_else(|| "auto".to_string())
}

pub fn set_theme(session: &Session, theme: &str) {
    let value = match theme {
        "light" | "dark" => theme,
        _ => "auto",
    };
    let _ = session.insert("theme", value);
}

/// Draft id tying this visitor to their composer session in the draft
/// store. Created on first use.
pub fn draft_id(session: &Session) -> Uuid {
    if let Ok(Some(id)) = session.get::<String>("draft_id") {
        if let Ok(parsed) = Uuid::parse_str(&id) {
            return parsed;
        }
    }
    let id = Uuid::new_v4();
    let _ = session.insert("draft_id", id.to_string());
    id
}

pub fn clear_draft_id(session: &Session) {
    session.remove("draft_id");
}

/// Arm the delete-confirmation for one specific document and return the
/// one-time token the confirmation form must echo back.
pub fn arm_delete(session: &Session, document_id: i64) -> String {
    let token = csrf::generate_token();
    let _ = session.insert("confirm_delete_id", document_id);
    let _ = session.insert("confirm_delete_token", &token);
    token
}

/// Check the submitted confirmation token against the armed one, for this
/// exact document. Consumes the token on success, so a stale form cannot
/// trigger a second delete.
pub fn take_delete_confirmation(session: &Session, document_id: i64, submitted: &str) -> bool {
    let armed_id = session.get::<i64>("confirm_delete_id").unwrap_or(None);
    let armed_token = session
        .get::<String>("confirm_delete_token")
        .unwrap_or(None)
        .unwrap_or_default();
    let ok = armed_id == Some(document_id)
        && !armed_token.is_empty()
        && csrf::constant_time_eq(&armed_token, submitted);
    if ok {
        session.remove("confirm_delete_id");
        session.remove("confirm_delete_token");
    }
    ok
}

/// Disarm without deleting (cancel path, or after a successful delete).
pub fn disarm_delete(session: &Session) {
    session.remove("confirm_delete_id");
    session.remove("confirm_delete_token");
}
