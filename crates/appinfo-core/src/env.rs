//! Environment snapshot.
//!
//! The process environment is read exactly once at startup and frozen into an
//! [`EnvConfig`]. Handlers only ever see this snapshot; the default
//! substitution for missing variables lives here and nowhere else.

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{AppInfoError, Result};

/// Placeholder used for a missing `HOSTNAME`.
pub const UNKNOWN: &str = "unknown";
/// Placeholder used for missing `ENVIRONMENT`, `APP_NAME` and `PORT`.
pub const NOT_SET: &str = "not-set";

/// Variables the service understands. Anything else in the environment is ignored.
pub const RECOGNIZED_KEYS: [&str; 7] = [
    "HOSTNAME",
    "ENVIRONMENT",
    "APP_NAME",
    "PORT",
    "SECRET_MESSAGE",
    "API_KEY",
    "APP_INFO_STRICT_PORT",
];

#[derive(Clone, Default, Deserialize)]
pub struct EnvConfig {
    #[serde(rename = "HOSTNAME", default)]
    hostname: Option<String>,

    #[serde(rename = "ENVIRONMENT", default)]
    environment: Option<String>,

    #[serde(rename = "APP_NAME", default)]
    app_name: Option<String>,

    #[serde(rename = "PORT", default)]
    port: Option<String>,

    #[serde(rename = "SECRET_MESSAGE", default)]
    secret_message: Option<String>,

    #[serde(rename = "API_KEY", default)]
    api_key: Option<String>,

    #[serde(rename = "APP_INFO_STRICT_PORT", default)]
    strict_port: Option<String>,
}

impl EnvConfig {
    /// Snapshot the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars_os().filter_map(|(k, v)| {
            Some((k.into_string().ok()?, v.into_string().ok()?))
        }))
    }

    /// Build a snapshot from arbitrary key/value pairs.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map: Map<String, Value> = vars
            .into_iter()
            .map(|(k, v)| -> (String, String) { (k.into(), v.into()) })
            .filter(|(k, _)| RECOGNIZED_KEYS.contains(&k.as_str()))
            .map(|(k, v)| (k, Value::String(v)))
            .collect();

        let cfg: EnvConfig = serde_json::from_value(Value::Object(map))
            .map_err(|e| AppInfoError::Internal(format!("environment snapshot failed: {e}")))?;

        tracing::debug!(config = ?cfg, "environment snapshot taken");
        Ok(cfg)
    }

    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    pub fn app_name(&self) -> Option<&str> {
        self.app_name.as_deref()
    }

    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    pub fn secret_message(&self) -> Option<&str> {
        self.secret_message.as_deref()
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// `HOSTNAME`, or `"unknown"` when absent.
    pub fn hostname_or_default(&self) -> &str {
        self.hostname().unwrap_or(UNKNOWN)
    }

    /// `ENVIRONMENT`, or `"not-set"` when absent.
    pub fn environment_or_default(&self) -> &str {
        self.environment().unwrap_or(NOT_SET)
    }

    /// `APP_NAME`, or `"not-set"` when absent.
    pub fn app_name_or_default(&self) -> &str {
        self.app_name().unwrap_or(NOT_SET)
    }

    /// `PORT` as supplied, or `"not-set"` when absent.
    pub fn port_or_default(&self) -> &str {
        self.port().unwrap_or(NOT_SET)
    }

    pub fn has_secret_message(&self) -> bool {
        is_filled(self.secret_message())
    }

    pub fn has_api_key(&self) -> bool {
        is_filled(self.api_key())
    }

    /// The secret message, failing when it is unset or empty.
    pub fn secret(&self) -> Result<&str> {
        self.secret_message()
            .filter(|s| !s.is_empty())
            .ok_or(AppInfoError::SecretNotConfigured)
    }

    /// Whether an invalid `PORT` should abort startup instead of falling back.
    pub fn strict_port(&self) -> bool {
        matches!(
            self.strict_port.as_deref().map(str::trim),
            Some("1") | Some("true") | Some("TRUE") | Some("yes")
        )
    }
}

fn is_filled(v: Option<&str>) -> bool {
    v.is_some_and(|s| !s.is_empty())
}

// Secrets never reach logs.
impl fmt::Debug for EnvConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("EnvConfig")
            .field("hostname", &self.hostname)
            .field("environment", &self.environment)
            .field("app_name", &self.app_name)
            .field("port", &self.port)
            .field("secret_message", &redact(&self.secret_message))
            .field("api_key", &redact(&self.api_key))
            .field("strict_port", &self.strict_port)
            .finish()
    }
}
