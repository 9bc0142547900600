//! Custom extractors.

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use std::convert::Infallible;
use std::net::SocketAddr;

use crate::utils::client_identity::client_identity;

/// Rate-limit identity of the calling client.
///
/// Resolved with [`client_identity`] from the `X-Forwarded-For` header and
/// the peer address that `into_make_service_with_connect_info` attaches.
/// Never rejects: a request without either source maps to `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity(pub String);

impl<S> FromRequestParts<S> for ClientIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(ClientIdentity(client_identity(&parts.headers, peer)))
    }
}
