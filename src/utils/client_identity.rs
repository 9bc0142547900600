//! Client identity derivation for rate limiting.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Header carrying the proxy chain, client first.
pub const FORWARDED_FOR: &str = "x-forwarded-for";

/// Identity used when neither a forwarded address nor a peer is known.
pub const UNKNOWN_IDENTITY: &str = "unknown";

/// Derives the rate-limit identity for a request.
///
/// # Precedence
///
/// 1. First non-empty entry of `X-Forwarded-For`
/// 2. IP of the transport peer
/// 3. [`UNKNOWN_IDENTITY`]
///
/// Only the first entry of the forwarded chain is used, since that is the
/// address the edge proxy saw the original client connect from.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert("x-forwarded-for", "203.0.113.7, 10.0.0.2".parse().unwrap());
///
/// assert_eq!(client_identity(&headers, None), "203.0.113.7");
/// ```
pub fn client_identity(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    forwarded_client(headers)
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| UNKNOWN_IDENTITY.to_string())
}

fn forwarded_client(headers: &HeaderMap) -> Option<String> {
    headers
        .get(FORWARDED_FOR)?
        .to_str()
        .ok()?
        .split(',')
        .next()
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
}
