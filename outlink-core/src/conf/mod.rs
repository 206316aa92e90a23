mod error;
#[cfg(test)]
mod tests;

pub use error::ConfigError;

/// Environment variable naming the comma-separated redirect host allowlist.
pub const ALLOWED_HOSTS_VAR: &str = "ALLOWED_REDIRECT_HOSTS";

/// Environment variable overriding the listen port.
pub const PORT_VAR: &str = "PORT";

const DEFAULT_PORT: u16 = 3000;

/// Process-wide gateway configuration, read once at startup.
///
/// Tests and embedders construct this directly via [`GatewayConfig::new`]
/// instead of mutating the process environment.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// TCP listen address, e.g. `0.0.0.0:3000`.
    pub listen: String,

    /// Hostnames redirects may point at. Empty means no restriction.
    pub allowed_redirect_hosts: Vec<String>,
}

impl GatewayConfig {
    pub fn new(listen: impl Into<String>, allowed_redirect_hosts: Vec<String>) -> Self {
        Self {
            listen: listen.into(),
            allowed_redirect_hosts,
        }
    }

    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var(PORT_VAR) {
            Ok(raw) if !raw.trim().is_empty() => parse_port(&raw)?,
            _ => DEFAULT_PORT,
        };

        let allowed_redirect_hosts =
            parse_host_list(std::env::var(ALLOWED_HOSTS_VAR).ok().as_deref());

        Ok(Self {
            listen: format!("0.0.0.0:{port}"),
            allowed_redirect_hosts,
        })
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse::<u16>()
        .ok()
        .filter(|port| *port > 0)
        .ok_or_else(|| ConfigError::InvalidPort {
            value: raw.to_owned(),
        })
}

fn parse_host_list(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.split(',')
        .map(|host| host.trim().to_lowercase())
        .filter(|host| !host.is_empty())
        .collect()
}
