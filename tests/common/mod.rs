#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use axum_test::TestServer;
use linkdrop::domain::repositories::{AliasStore, CounterStore, PutOutcome, StoreError};
use linkdrop::infrastructure::store::MemoryStore;
use linkdrop::routes::app_router;
use linkdrop::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;

pub const FRONTEND_ORIGIN: &str = "https://links.example.com";
pub const PEER_ADDR: &str = "127.0.0.1:12345";

/// Attaches a fixed peer address, as `into_make_service_with_connect_info` would.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = PEER_ADDR.parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

/// Full application over an in-memory store.
pub fn create_test_server(rate_limit: u64) -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::with_store(store.clone(), rate_limit);
    (server_for(state), store)
}

pub fn server_for(state: AppState) -> TestServer {
    let origins = vec![FRONTEND_ORIGIN.to_string()];
    let app = app_router(state, &origins).layer(MockConnectInfoLayer);

    TestServer::new(app).unwrap()
}

/// A store whose every operation fails, as if Redis were unreachable.
pub struct UnreachableStore;

fn refused() -> StoreError {
    StoreError::Connection("connection refused".to_string())
}

#[async_trait]
impl AliasStore for UnreachableStore {
    async fn put(&self, _: &str, _: &str, _: Duration) -> Result<(), StoreError> {
        Err(refused())
    }

    async fn put_if_absent(&self, _: &str, _: &str, _: Duration) -> Result<PutOutcome, StoreError> {
        Err(refused())
    }

    async fn get(&self, _: &str) -> Result<Option<String>, StoreError> {
        Err(refused())
    }

    async fn health_check(&self) -> bool {
        false
    }
}

#[async_trait]
impl CounterStore for UnreachableStore {
    async fn increment(&self, _: &str, _: Duration) -> Result<u64, StoreError> {
        Err(refused())
    }

    async fn current(&self, _: &str) -> Result<Option<u64>, StoreError> {
        Err(refused())
    }

    async fn reset(&self, _: &str) -> Result<bool, StoreError> {
        Err(refused())
    }
}
