use crate::conf::GatewayConfig;
use crate::proxy::RedirectGateway;
use crate::redirect::HostAllowlist;
use anyhow::{Error, Result};
use pingora::prelude::*;
use pingora::server::Server;

/// Run the Pingora server with the given configuration.
pub fn run(config: GatewayConfig) -> Result<()> {
    let server = build_pingora_server(&config)?;

    tracing::info!(listen = %config.listen, "redirect gateway listening");

    // run_forever blocks the main thread as intended.
    server.run_forever();
}

/// Build the Pingora server.
pub fn build_pingora_server(config: &GatewayConfig) -> Result<Server, Error> {
    // Create a Pingora server with default settings.
    // "None" is required here to truly tell Pingora to use its default settings.
    let mut server = Server::new(None)?;
    server.bootstrap();

    // The allowlist is derived from configuration once; it is immutable for
    // the rest of the process lifetime.
    let allowlist = HostAllowlist::new(&config.allowed_redirect_hosts);
    let gateway = RedirectGateway::new(allowlist);

    // Build HTTP proxy service from Pingora.
    let mut svc = http_proxy_service(&server.configuration, gateway);
    svc.add_tcp(&config.listen);

    // Register service.
    server.add_service(svc);

    Ok(server)
}
