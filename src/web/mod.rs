//! Session-backed request plumbing: flash notices, theme preference, draft
//! ids, CSRF tokens, and the one-time delete-confirmation token.

pub mod csrf;
pub mod session;
