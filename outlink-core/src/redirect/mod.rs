mod allowlist;
mod error;
mod flags;
mod query;
mod request_url;
mod resolver;
mod target;
#[cfg(test)]
mod tests;

pub use allowlist::HostAllowlist;
pub use error::ValidationError;
pub use resolver::{InboundRequest, RedirectResult, resolve};
