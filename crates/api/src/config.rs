use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// Loaded once at startup and carried in `AppState` behind an `Arc`;
/// nothing reads the environment after boot.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins: the `CORS_ORIGINS` list plus the deployed
    /// frontend from `FRONTEND_URL`, if set.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry duration).
    pub jwt: JwtConfig,
}

/// Development-frontend origins allowed by default.
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:8100,http://127.0.0.1:8100";

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                       |
    /// |------------------------|-----------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                     |
    /// | `PORT`                 | `3000`                                        |
    /// | `CORS_ORIGINS`         | `http://localhost:8100,http://127.0.0.1:8100` |
    /// | `FRONTEND_URL`         | (unset -- appended to the allow-list if set)  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                          |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let mut cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Deployed frontend joins the allow-list alongside the dev origins.
        if let Ok(frontend_url) = std::env::var("FRONTEND_URL") {
            let frontend_url = frontend_url.trim().to_string();
            if !frontend_url.is_empty() && !cors_origins.contains(&frontend_url) {
                cors_origins.push(frontend_url);
            }
        }

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
        }
    }
}
