use anyhow::{bail, Context, Result};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Secret used when running locally without `SESSION_SECRET`.
/// Refused in production.
pub const DEV_SESSION_SECRET: &str = "dev-secret-key-change-in-production";

/// Minimum length accepted for a production session secret.
const MIN_PRODUCTION_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => bail!(
                "Invalid APP_ENV '{}': expected 'development' or 'production'",
                other
            ),
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub environment: Environment,

    // Session signing
    /// Only validated at startup. No handler signs sessions with it.
    pub session_secret: String,

    // Web server
    pub host: String,
    pub port: u16,

    // Translation provider
    pub translate_api_url: String,
    pub translate_api_key: Option<String>,
    pub gateway_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let environment: Environment = parse_env("APP_ENV", Environment::Development)?;

        let session_secret = match (std::env::var("SESSION_SECRET").ok(), environment) {
            (Some(secret), Environment::Production) => {
                validate_production_secret(&secret)?;
                secret
            }
            (None, Environment::Production) => {
                bail!("SESSION_SECRET must be set when APP_ENV=production")
            }
            (Some(secret), Environment::Development) => secret,
            (None, Environment::Development) => {
                tracing::warn!("SESSION_SECRET not set, using insecure development secret");
                DEV_SESSION_SECRET.to_string()
            }
        };

        let gateway_timeout_secs: u64 = parse_env("GATEWAY_TIMEOUT_SECS", 10)?;
        if gateway_timeout_secs == 0 {
            bail!("GATEWAY_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Self {
            environment,
            session_secret,

            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_env("PORT", 5000)?,

            translate_api_url: std::env::var("TRANSLATE_API_URL")
                .unwrap_or_else(|_| "https://libretranslate.com".to_string())
                .trim_end_matches('/')
                .to_string(),
            translate_api_key: std::env::var("TRANSLATE_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            gateway_timeout: Duration::from_secs(gateway_timeout_secs),
        })
    }

    /// Socket address string for the listener (e.g., "0.0.0.0:5000").
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Keeps the secret and API key out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("session_secret", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("translate_api_url", &self.translate_api_url)
            .field(
                "translate_api_key",
                &self.translate_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("gateway_timeout", &self.gateway_timeout)
            .finish()
    }
}

fn validate_production_secret(secret: &str) -> Result<()> {
    if secret == DEV_SESSION_SECRET {
        bail!("SESSION_SECRET must not be the development default in production");
    }
    if secret.len() < MIN_PRODUCTION_SECRET_LEN {
        bail!(
            "SESSION_SECRET must be at least {} bytes in production",
            MIN_PRODUCTION_SECRET_LEN
        );
    }
    Ok(())
}

/// Read and parse an optional env var. Unset means `default`; a value that
/// does not parse is an error rather than a silent fallback.
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("Invalid value for {}: '{}'", key, raw)),
        Err(_) => Ok(default),
    }
}
