//! Request ID middleware.
//!
//! Accepts an incoming `x-request-id` or generates one, exposes it to
//! handlers through request extensions and echoes it on the response.

use axum::{
    body::Body,
    http::{HeaderValue, Request, header::HeaderName},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// Header name for request ID.
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Request ID stored in request extensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestId(pub String);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Attaches a request id and runs the rest of the stack inside a span
/// carrying it.
pub async fn layer(mut req: Request<Body>, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut().insert(RequestId(request_id.clone()));

    let span = tracing::info_span!("request_id", request_id = %request_id);
    let mut response = next.run(req).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER.clone(), value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Extension, Router, middleware, routing::get};
    use axum_test::TestServer;

    async fn echo(Extension(id): Extension<RequestId>) -> String {
        id.to_string()
    }

    fn server() -> TestServer {
        let app = Router::new()
            .route("/", get(echo))
            .layer(middleware::from_fn(layer));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_generates_request_id() {
        let response = server().get("/").await;

        let header = response.header("x-request-id");
        let id = header.to_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
        assert_eq!(response.text(), id);
    }

    #[tokio::test]
    async fn test_propagates_incoming_request_id() {
        let response = server()
            .get("/")
            .add_header("x-request-id", "req-42")
            .await;

        assert_eq!(response.header("x-request-id"), "req-42");
        assert_eq!(response.text(), "req-42");
    }
}
