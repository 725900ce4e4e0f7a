pub mod dashboard;
pub mod document_handlers;
pub mod settings_handlers;
