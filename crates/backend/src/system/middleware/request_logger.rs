use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_size;

/// Middleware logging every HTTP request
///
/// Records method, path, status, duration (ms) and response size.
/// Non-2xx responses are logged at warn level.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Read the body to learn its real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(
                "{} {} -> {} | {}ms | body read failed: {}",
                method,
                uri.path(),
                parts.status.as_u16(),
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let duration = start.elapsed().as_millis();
    let size = format_size(bytes.len());
    if parts.status.is_success() {
        tracing::info!(
            "{} {} -> {} | {}ms | {}",
            method,
            uri.path(),
            parts.status.as_u16(),
            duration,
            size
        );
    } else {
        tracing::warn!(
            "{} {} -> {} | {}ms | {}",
            method,
            uri.path(),
            parts.status.as_u16(),
            duration,
            size
        );
    }

    Response::from_parts(parts, Body::from(bytes))
}
