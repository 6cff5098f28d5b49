use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use axum::{
    body::Body,
    extract::{MatchedPath, Request},
    http::header::HeaderValue,
    middleware::Next,
    response::Response,
};
use tower::{Layer, Service};
use tracing::Instrument;
use uuid::Uuid;

use crate::metrics;

pub const CORRELATION_ID_HEADER: &str = "X-Correlation-Id";

/// Longest caller-supplied id that is echoed back instead of replaced.
const MAX_CORRELATION_ID_LEN: usize = 128;

#[derive(Clone, Debug)]
pub struct CorrelationId(pub String);

impl CorrelationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Reuse the caller's id when it is a short printable token.
    fn from_request(req: &Request<Body>) -> Self {
        req.headers()
            .get(CORRELATION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty() && s.len() <= MAX_CORRELATION_ID_LEN)
            .map(|s| Self(s.to_string()))
            .unwrap_or_else(Self::new)
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct CorrelationIdLayer;

impl<S> Layer<S> for CorrelationIdLayer {
    type Service = CorrelationIdMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CorrelationIdMiddleware { inner }
    }
}

#[derive(Clone)]
pub struct CorrelationIdMiddleware<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for CorrelationIdMiddleware<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let correlation_id = CorrelationId::from_request(&req);
        req.extensions_mut().insert(correlation_id.clone());

        let span = tracing::debug_span!("request", correlation_id = %correlation_id.0);
        let mut inner = self.inner.clone();
        Box::pin(
            async move {
                let mut response = inner.call(req).await?;
                if let Ok(value) = HeaderValue::from_str(&correlation_id.0) {
                    response.headers_mut().insert(CORRELATION_ID_HEADER, value);
                }
                Ok(response)
            }
            .instrument(span),
        )
    }
}

/// Records request count and latency, labelled by route template so path
/// parameters do not multiply label values.
pub async fn track_metrics(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(req).await;
    metrics::record_http_request(&method, &path, response.status().as_u16(), start.elapsed());
    response
}
