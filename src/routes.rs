use actix_web::web;

use crate::handlers;

/// Route table, shared by the binary and the handler tests.
/// `/documents/new` is registered before `/documents/{id}` routes to avoid
/// a routing conflict.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/",
        web::get().to(|| async {
            actix_web::HttpResponse::SeeOther()
                .insert_header(("Location", "/documents"))
                .finish()
        }),
    )
    .route("/dashboard", web::get().to(handlers::dashboard::index))
    // Document composer
    .route(
        "/documents/new",
        web::get().to(handlers::document_handlers::compose::new_form),
    )
    .route(
        "/documents/compose",
        web::post().to(handlers::document_handlers::compose::compose_submit),
    )
    .route(
        "/documents/compose/template",
        web::post().to(handlers::document_handlers::compose::choose_template),
    )
    .route(
        "/documents/compose/discard",
        web::post().to(handlers::document_handlers::compose::discard),
    )
    .route(
        "/documents/upload",
        web::post().to(handlers::document_handlers::compose::upload),
    )
    // Document listing and row actions
    .route(
        "/documents",
        web::get().to(handlers::document_handlers::list::list),
    )
    .route(
        "/documents/{id}/edit",
        web::get().to(handlers::document_handlers::edit::edit_form),
    )
    .route(
        "/documents/{id}",
        web::post().to(handlers::document_handlers::edit::update),
    )
    .route(
        "/documents/{id}/delete",
        web::get().to(handlers::document_handlers::delete::confirm_form),
    )
    .route(
        "/documents/{id}/delete",
        web::post().to(handlers::document_handlers::delete::delete),
    )
    // Case-scoped listing
    .route(
        "/cases/{id}/documents",
        web::get().to(handlers::document_handlers::list::list_by_case),
    )
    // Settings
    .route(
        "/settings/theme",
        web::post().to(handlers::settings_handlers::save_theme),
    );
}
