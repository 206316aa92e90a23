use crate::redirect::error::ValidationError;

/// Hostnames a redirect may point at. Derived once from configuration and
/// read-only afterwards, so it is safe to share across requests.
///
/// An empty allowlist disables the restriction entirely.
#[derive(Debug, Clone, Default)]
pub struct HostAllowlist {
    hosts: Vec<String>,
}

impl HostAllowlist {
    /// Build an allowlist from raw host entries.
    ///
    /// Entries are trimmed and lowercased; empty entries are dropped.
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let hosts = hosts
            .into_iter()
            .map(|host| host.as_ref().trim().to_lowercase())
            .filter(|host| !host.is_empty())
            .collect();

        Self { hosts }
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// A hostname matches an entry exactly or as a subdomain of it.
    ///
    /// The subdomain match requires the `.` separator: `evilexample.com`
    /// does not match an allowlisted `example.com`.
    pub fn is_allowed(&self, hostname: &str) -> bool {
        if self.hosts.is_empty() {
            return true;
        }

        let hostname = hostname.to_lowercase();
        self.hosts.iter().any(|allowed| {
            hostname == *allowed || hostname.ends_with(&format!(".{allowed}"))
        })
    }

    pub fn assert_allowed(&self, hostname: &str) -> Result<(), ValidationError> {
        if self.is_allowed(hostname) {
            return Ok(());
        }

        Err(ValidationError::DisallowedHost {
            hostname: hostname.to_lowercase(),
        })
    }
}
