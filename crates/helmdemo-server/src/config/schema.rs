use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use helmdemo_core::error::{DemoError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub log: LogSection,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            log: LogSection::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(DemoError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.log.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Time between the shutdown signal and closing the listener, during
    /// which `/readyz` answers 503.
    #[serde(default = "default_drain_grace_ms")]
    pub drain_grace_ms: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            greeting: default_greeting(),
            drain_grace_ms: default_drain_grace_ms(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if self.greeting.is_empty() {
            return Err(DemoError::BadRequest("server.greeting must not be empty".into()));
        }
        if self.drain_grace_ms > 120000 {
            return Err(DemoError::BadRequest(
                "server.drain_grace_ms must be between 0 and 120000".into(),
            ));
        }
        Ok(())
    }

    pub fn drain_grace(&self) -> Duration {
        Duration::from_millis(self.drain_grace_ms)
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            DemoError::BadRequest(format!(
                "server.listen must be a valid SocketAddr, got {:?}",
                self.listen
            ))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    /// Default `EnvFilter` directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl LogSection {
    pub fn validate(&self) -> Result<()> {
        EnvFilter::try_new(&self.filter)
            .map(|_| ())
            .map_err(|e| DemoError::BadRequest(format!("log.filter is invalid: {e}")))
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_greeting() -> String {
    "Hello from k3s + Helm!".into()
}
fn default_drain_grace_ms() -> u64 {
    5000
}
fn default_log_filter() -> String {
    "info".into()
}
