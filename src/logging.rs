use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use std::time::Instant;
use tracing::info;

/// Writes one `access_log` line per request once the response is ready.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let version = request.version();
    let remote_addr = client_address(request.headers());
    let user_agent = header_or_dash(request.headers(), header::USER_AGENT.as_str());

    let response = next.run(request).await;

    let content_length = header_or_dash(response.headers(), header::CONTENT_LENGTH.as_str());

    info!(
        target: "access_log",
        "{} {} \"{} {} {:?}\" {} {} {}ms \"{}\"",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        remote_addr,
        method,
        uri,
        version,
        response.status().as_u16(),
        content_length,
        start.elapsed().as_millis(),
        user_agent,
    );

    response
}

/// First hop of `x-forwarded-for`, else `x-real-ip`, else `-`.
fn client_address(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|forwarded| forwarded.split(',').next())
        .map(str::trim)
        .filter(|addr| !addr.is_empty())
        .or_else(|| headers.get("x-real-ip").and_then(|h| h.to_str().ok()))
        .unwrap_or("-")
        .to_string()
}

fn header_or_dash(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-")
        .to_string()
}
