use std::net::SocketAddr;

use axum::Router;

use crate::{Client, Endpoints, COUNTRIES_ENDPOINT, IDENTITY_ENDPOINT, NATIONALIZE_ENDPOINT};

/// Client against the real services.
pub fn client() -> Client {
    let endpoints =
        Endpoints::new(NATIONALIZE_ENDPOINT, COUNTRIES_ENDPOINT, IDENTITY_ENDPOINT).unwrap();
    Client::new(endpoints, Default::default()).unwrap()
}

/// Serve `router` on an ephemeral local port and return a client whose
/// endpoints are `/nationalize`, `/countries` and `/identity` on it.
pub async fn mock(router: Router) -> Client {
    let addr = serve(router).await;
    let endpoints = Endpoints::new(
        format!("http://{addr}/nationalize"),
        format!("http://{addr}/countries"),
        format!("http://{addr}/identity"),
    )
    .unwrap();
    Client::new(endpoints, Default::default()).unwrap()
}

pub async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}
