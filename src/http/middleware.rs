//! Cross-cutting layers wrapped around the router.
//!
//! - **Request logging**: one span per request with method, uri, status and latency
//! - **CORS**: permissive headers on every response, preflight answered
//! - **Panic boundary**: a panicking handler becomes the generic 500 body

use std::any::Any;

use axum::response::{IntoResponse, Response};
use tower_http::{
    catch_panic::CatchPanicLayer,
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use super::error::ApiError;

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

type RequestTrace = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    DefaultMakeSpan,
    DefaultOnRequest,
    DefaultOnResponse,
>;

/// Request span and response event are emitted at INFO so they show under
/// the default filter.
pub fn request_logging() -> RequestTrace {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

pub fn cors() -> CorsLayer {
    CorsLayer::permissive()
}

pub fn panic_boundary() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(panic_response as PanicHandler)
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::internal()
        .with_source(anyhow::anyhow!("handler panicked: {detail}"))
        .into_response()
}
