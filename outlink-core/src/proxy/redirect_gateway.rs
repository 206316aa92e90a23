use crate::proxy::handlers::RedirectHandler;
use crate::redirect::HostAllowlist;
use async_trait::async_trait;
use pingora::prelude::{HttpPeer, ProxyHttp, Session};
use pingora::{Custom, Error};

/// Terminal gateway: every request is answered in `request_filter`, so the
/// proxy lifecycle past it is never entered.
pub struct RedirectGateway {
    handler: RedirectHandler,
}

impl RedirectGateway {
    pub fn new(allowlist: HostAllowlist) -> Self {
        Self {
            handler: RedirectHandler::new(allowlist),
        }
    }
}

#[async_trait]
impl ProxyHttp for RedirectGateway {
    type CTX = ();

    fn new_ctx(&self) -> Self::CTX {}

    async fn upstream_peer(
        &self,
        _session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> pingora::Result<Box<HttpPeer>> {
        // Unreachable: request_filter terminates every request.
        Err(Error::new(Custom(
            "RedirectGateway attempted to proxy upstream (bug)",
        )))
    }

    async fn request_filter(
        &self,
        session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> pingora::Result<bool> {
        let method = session.req_header().method.clone();
        let path = session.req_header().uri.path().to_owned();

        // Validation failures are answered by the handler itself; anything
        // escaping it becomes an opaque 500 with the detail kept server-side.
        if let Err(error) = self.handler.handle(session, &method, &path).await {
            tracing::error!(method = %method, path, error = %error, "request handling failed");
            let _ = self.handler.send_internal_error(session).await;
        }

        Ok(true)
    }
}
