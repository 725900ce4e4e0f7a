/// Runtime configuration, read once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the document backend, e.g. `http://127.0.0.1:9000/api`.
    pub backend_url: String,
    /// Address the dashboard binds to.
    pub bind: String,
    /// Display name shown in the page header.
    pub app_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        let backend_url = std::env::var("WAKILI_BACKEND_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:9000/api".to_string());
        let backend_url = backend_url.trim_end_matches('/').to_string();
        let bind = std::env::var("WAKILI_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let app_name =
            std::env::var("WAKILI_APP_NAME").unwrap_or_else(|_| "Wakili".to_string());
        Self {
            backend_url,
            bind,
            app_name,
        }
    }
}
