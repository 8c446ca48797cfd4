//! Server configuration read from the environment.

use std::time::Duration;

use faceid_store::UpdatePolicy;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind: an IP address or a host name resolved at bind time.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Release mode: JSON logs instead of human-readable ones.
    pub release: bool,
    /// Deadline attached to every request. `None` disables it.
    pub request_timeout: Option<Duration>,
    /// How repositories treat updates to absent ids.
    pub update_policy: UpdatePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            release: false,
            request_timeout: None,
            update_policy: UpdatePolicy::default(),
        }
    }
}

impl AppConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if any variable holds an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns the value of a
    /// variable or `None` when it is unset.
    ///
    /// Recognised variables: `HOST`, `API_PORT` (falling back to `PORT`),
    /// `API_RELEASE`, `REQUEST_TIMEOUT_MS`, `UPDATE_POLICY`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if any variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("API_PORT").or_else(|| lookup("PORT")) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("API_PORT must be a valid u16: {e}")))?,
            None => defaults.port,
        };

        let release = match lookup("API_RELEASE") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| AppError::Config(format!("API_RELEASE must be a boolean, got `{raw}`")))?,
            None => defaults.release,
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT_MS") {
            Some(raw) => {
                let millis = raw.trim().parse::<u64>().map_err(|e| {
                    AppError::Config(format!("REQUEST_TIMEOUT_MS must be milliseconds: {e}"))
                })?;
                (millis > 0).then(|| Duration::from_millis(millis))
            }
            None => defaults.request_timeout,
        };

        let update_policy = match lookup("UPDATE_POLICY") {
            Some(raw) => raw
                .parse::<UpdatePolicy>()
                .map_err(|e| AppError::Config(e.to_string()))?,
            None => defaults.update_policy,
        };

        Ok(Self {
            host,
            port,
            release,
            request_timeout,
            update_policy,
        })
    }

    /// Returns the `(host, port)` pair to hand to `TcpListener::bind`, which
    /// resolves host names such as `localhost`.
    #[must_use]
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
