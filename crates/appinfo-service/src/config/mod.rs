//! Server settings derived from the environment snapshot.
//!
//! The only tunable is the listen port. `PORT` is parsed here; what happens on
//! a malformed value is governed by [`PortPolicy`].

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use appinfo_core::error::{AppInfoError, Result};
use appinfo_core::EnvConfig;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortPolicy {
    /// Warn and listen on [`DEFAULT_PORT`].
    #[default]
    Fallback,
    /// Refuse to start.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub port_policy: PortPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            port_policy: PortPolicy::Fallback,
        }
    }
}

impl ServerConfig {
    pub fn from_env(env: &EnvConfig) -> Result<Self> {
        let port_policy = if env.strict_port() {
            PortPolicy::Strict
        } else {
            PortPolicy::Fallback
        };

        let port = match env.port() {
            None => DEFAULT_PORT,
            Some(raw) => resolve_port(raw, port_policy)?,
        };

        Ok(Self {
            port,
            port_policy,
            ..Self::default()
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn resolve_port(raw: &str, policy: PortPolicy) -> Result<u16> {
    match raw.trim().parse::<u16>() {
        Ok(port) => Ok(port),
        Err(e) => match policy {
            PortPolicy::Strict => Err(AppInfoError::InvalidPort(raw.to_string())),
            PortPolicy::Fallback => {
                tracing::warn!(port = %raw, error = %e, default = DEFAULT_PORT, "invalid PORT, using default");
                Ok(DEFAULT_PORT)
            }
        },
    }
}
