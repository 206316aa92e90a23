use crate::redirect::{HostAllowlist, InboundRequest, RedirectResult, ValidationError, resolve};
use http::{Method, StatusCode, header};
use pingora::prelude::Session;
use pingora::{Custom, Error};
use pingora_http::ResponseHeader;
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

#[derive(Serialize)]
struct AwaitingParamsBody<'a> {
    code: &'static str,
    message: &'static str,
    redirect_preview: &'a str,
}

/// Resolves redirect requests and shapes every response the gateway can
/// emit. Response-shape decisions live here, in one place per shape,
/// rather than scattered across the Pingora hooks.
pub(crate) struct RedirectHandler {
    allowlist: HostAllowlist,
}

impl RedirectHandler {
    pub(crate) fn new(allowlist: HostAllowlist) -> Self {
        Self { allowlist }
    }

    pub(crate) async fn handle(
        &self,
        session: &mut Session,
        method: &Method,
        path: &str,
    ) -> pingora::Result<()> {
        if path == "/health" && method == Method::GET {
            self.health(session).await
        } else if path == "/redirect" && method == Method::GET {
            self.redirect_get(session).await
        } else if path == "/redirect" && method == Method::HEAD {
            self.redirect_head(session).await
        } else {
            self.not_found(session).await
        }
    }

    async fn health(&self, session: &mut Session) -> pingora::Result<()> {
        let body = to_json_body(&HealthBody { status: "ok" })?;
        self.send_json_response(session, StatusCode::OK, body, false)
            .await
    }

    async fn redirect_get(&self, session: &mut Session) -> pingora::Result<()> {
        let result = match self.resolve_from_session(session) {
            Ok(result) => result,
            Err(error) => return self.send_validation_error(session, &error).await,
        };

        if result.awaiting_params() {
            let body = to_json_body(&AwaitingParamsBody {
                code: "AWAITING_PARAMS",
                message: "Redirect is awaiting passthrough parameters",
                redirect_preview: &result.redirect_url,
            })?;
            return self
                .send_json_response(session, StatusCode::OK, body, true)
                .await;
        }

        self.send_redirect_response(session, &result).await
    }

    async fn redirect_head(&self, session: &mut Session) -> pingora::Result<()> {
        let result = match self.resolve_from_session(session) {
            Ok(result) => result,
            Err(error) => return self.send_validation_error(session, &error).await,
        };

        if result.head_redirect && !result.awaiting_params() {
            return self.send_redirect_response(session, &result).await;
        }

        // Preview response: the resolved destination travels in headers.
        let mut resp = ResponseHeader::build(StatusCode::OK, None)?;
        resp.insert_header("X-Redirect-URL", &result.redirect_url)?;
        if result.awaiting_params() {
            resp.insert_header("X-Redirect-Status", "awaiting-params")?;
        }
        resp.insert_header(header::CACHE_CONTROL, "no-store")?;
        session.write_response_header(Box::new(resp), true).await?;

        Ok(())
    }

    async fn not_found(&self, session: &mut Session) -> pingora::Result<()> {
        let body = to_json_body(&ErrorBody {
            code: "NOT_FOUND",
            message: "Route not found".to_owned(),
            details: None,
        })?;
        self.send_json_response(session, StatusCode::NOT_FOUND, body, false)
            .await
    }

    pub(crate) async fn send_internal_error(&self, session: &mut Session) -> pingora::Result<()> {
        let body = to_json_body(&ErrorBody {
            code: "INTERNAL_ERROR",
            message: "Internal server error".to_owned(),
            details: None,
        })?;
        self.send_json_response(session, StatusCode::INTERNAL_SERVER_ERROR, body, false)
            .await
    }

    fn resolve_from_session(&self, session: &Session) -> Result<RedirectResult, ValidationError> {
        let req = session.req_header();

        // HTTP/2 carries the authority in the URI; HTTP/1.1 in the Host header.
        let authority = req
            .uri
            .authority()
            .map(|authority| authority.as_str().to_owned())
            .or_else(|| {
                req.headers
                    .get(header::HOST)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_owned)
            });

        let path_and_query = req
            .uri
            .path_and_query()
            .map(|path_and_query| path_and_query.as_str())
            .unwrap_or("/");

        resolve(
            &InboundRequest {
                scheme: "http",
                authority: authority.as_deref(),
                path_and_query,
            },
            &self.allowlist,
        )
    }

    async fn send_validation_error(
        &self,
        session: &mut Session,
        error: &ValidationError,
    ) -> pingora::Result<()> {
        let body = to_json_body(&ErrorBody {
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        })?;
        self.send_json_response(session, StatusCode::BAD_REQUEST, body, false)
            .await
    }

    async fn send_redirect_response(
        &self,
        session: &mut Session,
        result: &RedirectResult,
    ) -> pingora::Result<()> {
        let mut resp = ResponseHeader::build(result.status, None)?;
        resp.insert_header(header::LOCATION, &result.redirect_url)?;
        resp.insert_header(header::CACHE_CONTROL, "no-store")?;
        resp.insert_header(header::CONTENT_LENGTH, "0")?;
        session.write_response_header(Box::new(resp), true).await?;

        Ok(())
    }

    async fn send_json_response(
        &self,
        session: &mut Session,
        status: StatusCode,
        body: Vec<u8>,
        no_store: bool,
    ) -> pingora::Result<()> {
        let mut resp = ResponseHeader::build(status, None)?;
        resp.insert_header(header::CONTENT_TYPE, "application/json")?;
        resp.insert_header(header::CONTENT_LENGTH, body.len().to_string())?;
        if no_store {
            resp.insert_header(header::CACHE_CONTROL, "no-store")?;
        }

        // HEAD responses advertise the body without sending one.
        if session.req_header().method == Method::HEAD {
            session.write_response_header(Box::new(resp), true).await?;
            return Ok(());
        }

        session.write_response_header(Box::new(resp), false).await?;
        session.write_response_body(Some(body.into()), true).await?;

        Ok(())
    }
}

fn to_json_body<T: Serialize>(payload: &T) -> pingora::Result<Vec<u8>> {
    serde_json::to_vec(payload).map_err(|_| Error::new(Custom("json serialization failed")))
}
