use cbprep_core::error::CoreError;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Addressing for the two notification emails.
///
/// Both values are optional at load time so the server can start without
/// them; the intake handler refuses to send when either is missing.
#[derive(Debug, Clone, Default)]
pub struct NotifyConfig {
    /// Sender, e.g. `Chargeback Prep <hello@chargebackprep.com>` (`EMAIL_FROM`).
    pub from: Option<String>,
    /// Where owner notifications go (`EMAIL_OWNER`).
    pub owner: Option<String>,
}

impl NotifyConfig {
    /// Load from `EMAIL_FROM` and `EMAIL_OWNER`. Blank values count as unset.
    pub fn from_env() -> Self {
        Self {
            from: non_blank_env("EMAIL_FROM"),
            owner: non_blank_env("EMAIL_OWNER"),
        }
    }

    pub fn from_address(&self) -> Result<&str, CoreError> {
        self.from
            .as_deref()
            .ok_or(CoreError::Configuration("EMAIL_FROM"))
    }

    pub fn owner_address(&self) -> Result<&str, CoreError> {
        self.owner
            .as_deref()
            .ok_or(CoreError::Configuration("EMAIL_OWNER"))
    }
}

fn non_blank_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
