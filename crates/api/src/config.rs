use std::path::PathBuf;

use usher_openai::api::DEFAULT_API_URL;

/// How non-API requests are answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServeMode {
    /// Serve the compiled front-end from a directory, with SPA fallback to
    /// `index.html`.
    Static { dir: PathBuf },
    /// Forward every non-API request to a running front-end dev server.
    Development { upstream: String },
}

impl ServeMode {
    /// Resolve the `SERVE_MODE` value. Returns `None` for unknown modes.
    pub fn from_values(mode: &str, static_dir: &str, dev_server_url: &str) -> Option<Self> {
        match mode.trim().to_ascii_lowercase().as_str() {
            "static" | "production" => Some(Self::Static {
                dir: PathBuf::from(static_dir),
            }),
            "development" | "dev" => Some(Self::Development {
                upstream: dev_server_url.trim_end_matches('/').to_string(),
            }),
            _ => None,
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the provider API key have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5173`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// Empty means any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `60`).
    pub request_timeout_secs: u64,
    /// API key injected into provider calls. Never sent to clients.
    pub openai_api_key: String,
    /// Provider base URL (default: the hosted OpenAI API).
    pub openai_base_url: String,
    /// Front-end serving mode.
    pub serve_mode: ServeMode,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                      |
    /// |------------------------|------------------------------|
    /// | `OPENAI_API_KEY`       | `VITE_OPENAI_API_KEY`, else required |
    /// | `OPENAI_BASE_URL`      | `https://api.openai.com/v1`  |
    /// | `HOST`                 | `0.0.0.0`                    |
    /// | `PORT`                 | `5173`                       |
    /// | `CORS_ORIGINS`         | *(any origin)*               |
    /// | `REQUEST_TIMEOUT_SECS` | `60`                         |
    /// | `SERVE_MODE`           | `development`                |
    /// | `STATIC_DIR`           | `dist`                       |
    /// | `DEV_SERVER_URL`       | `http://localhost:5174`      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5173".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let openai_api_key = std::env::var("OPENAI_API_KEY")
            .or_else(|_| std::env::var("VITE_OPENAI_API_KEY"))
            .ok()
            .filter(|k| !k.trim().is_empty())
            .expect("OPENAI_API_KEY must be set");

        let openai_base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());

        let mode = std::env::var("SERVE_MODE").unwrap_or_else(|_| "development".into());
        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "dist".into());
        let dev_server_url =
            std::env::var("DEV_SERVER_URL").unwrap_or_else(|_| "http://localhost:5174".into());
        let serve_mode = ServeMode::from_values(&mode, &static_dir, &dev_server_url)
            .unwrap_or_else(|| panic!("SERVE_MODE must be 'static' or 'development', got '{mode}'"));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            openai_api_key,
            openai_base_url,
            serve_mode,
        }
    }
}
