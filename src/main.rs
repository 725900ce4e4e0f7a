use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use wakili::backend::HttpBackend;
use wakili::composer::DraftStore;
use wakili::config::Config;
use wakili::repository::DocumentRepository;
use wakili::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let backend = Arc::new(HttpBackend::new(&config.backend_url));
    let repository = web::Data::new(DocumentRepository::new(backend));
    let drafts = web::Data::new(DraftStore::new());
    let config_data = web::Data::new(config.clone());

    // Session encryption key — load from SESSION_KEY env var for persistent
    // sessions across restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+) — generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    log::info!(
        "Starting {} at http://{} (backend: {})",
        config.app_name,
        config.bind,
        config.backend_url
    );

    HttpServer::new(move || {
        let session_mw =
            SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                .cookie_secure(false)
                .cookie_http_only(true)
                .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(repository.clone())
            .app_data(drafts.clone())
            .app_data(config_data.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            .configure(routes::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(config.bind.as_str())?
    .run()
    .await
}
