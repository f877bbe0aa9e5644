use std::env;

const ENV_HOST: &str = "HOST";
const ENV_PORT: &str = "PORT";
const ENV_ALLOWED_ORIGINS: &str = "ALLOWED_ORIGINS";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Application configuration
///
/// Constructed once at process start from environment input and passed into
/// the server setup; nothing else reads the environment ad hoc.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Cross-origin allow list; `["*"]` means any origin
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var(ENV_PORT)
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let host = env::var(ENV_HOST).unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let allowed_origins = parse_origins(env::var(ENV_ALLOWED_ORIGINS).ok().as_deref());

        Self {
            host,
            port,
            allowed_origins,
        }
    }

    /// Whether the origin list collapsed to the wildcard
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a comma-separated origin list
///
/// An unset or empty value, or a list containing a literal `*`, collapses to
/// the wildcard `["*"]`; otherwise each entry is trimmed and kept verbatim.
fn parse_origins(raw: Option<&str>) -> Vec<String> {
    let origins: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect();

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        vec!["*".to_string()]
    } else {
        origins
    }
}
