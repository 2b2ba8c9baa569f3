//! https://restcountries.com/#api-endpoints-v2-code

use reqwest::{Method, StatusCode};
use tracing::Level;

use crate::{
    protocol::countries::{CountriesResponse, CountryInfo},
    Client, Error, Service,
};

impl Client {
    /// Reference data for as many of `codes` as the service knows. Codes it
    /// does not know are left out; an empty `codes` is never sent.
    #[tracing::instrument(level = Level::DEBUG, skip_all, fields(codes = codes.len()), err)]
    pub async fn countries(&self, codes: &[String]) -> Result<CountryInfo, Error> {
        if codes.is_empty() {
            return Ok(CountryInfo::new());
        }

        let shared = &self.shared;
        let mut url = shared.endpoints.countries.clone();
        // ';' is a legal query character and the service splits on it literally
        url.set_query(Some(&format!("codes={}", codes.join(";"))));

        let request = shared.request(Method::GET, url);
        let response: CountriesResponse = match shared.send(Service::Countries, request).await {
            Ok(response) => response.json().await?,
            Err(Error::Service {
                status: StatusCode::NOT_FOUND,
                ..
            }) => {
                tracing::debug!("no known codes");
                return Ok(CountryInfo::new());
            }
            Err(err) => return Err(err),
        };
        tracing::debug!(?response);
        Ok(response.into())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use axum::{extract::RawQuery, http::StatusCode, routing::get, Json, Router};
    use serde_json::json;
    use tracing_test::traced_test;

    use crate::{tests::fixture, Country, Error};

    #[tokio::test]
    #[traced_test]
    async fn test_countries() {
        let router = Router::new().route(
            "/countries",
            get(|RawQuery(query): RawQuery| async move {
                assert_eq!(query.as_deref(), Some("codes=US;GB;XX"));
                Json(json!([
                    { "alpha2Code": "GB", "demonym": "British" },
                    { "alpha2Code": "US", "demonym": "American" },
                    null,
                ]))
            }),
        );
        let client = fixture::mock(router).await;
        let codes = ["US", "GB", "XX"].map(String::from);
        let countries = client.countries(&codes).await.unwrap();
        assert_eq!(
            countries,
            [Country::new("GB", "British"), Country::new("US", "American")]
        );
    }

    #[tokio::test]
    #[traced_test]
    async fn test_countries_empty_skips_request() {
        let hits = Arc::new(AtomicUsize::new(0));
        let router = Router::new().route(
            "/countries",
            get({
                let hits = hits.clone();
                move || {
                    let hits = hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        Json(json!([]))
                    }
                }
            }),
        );
        let client = fixture::mock(router).await;
        let countries = client.countries(&[]).await.unwrap();
        assert!(countries.is_empty());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_countries_none_known() {
        let router = Router::new().route(
            "/countries",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "status": 404, "message": "Not Found" })),
                )
            }),
        );
        let client = fixture::mock(router).await;
        let countries = client.countries(&["XX".to_owned()]).await.unwrap();
        assert!(countries.is_empty());
    }

    #[tokio::test]
    #[traced_test]
    async fn test_countries_server_error() {
        let router = Router::new().route(
            "/countries",
            get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
        );
        let client = fixture::mock(router).await;
        let err = client.countries(&["US".to_owned()]).await.unwrap_err();
        match err {
            Error::Service {
                status, message, ..
            } => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(message, "upstream down");
            }
            err => panic!("unexpected error: {err:?}"),
        }
    }

    #[tokio::test]
    #[traced_test]
    #[ignore]
    async fn test_countries_live() {
        let client = fixture::client();
        let codes = ["US", "GB"].map(String::from);
        let countries = client.countries(&codes).await.unwrap();
        println!("{:#?}", countries);
        assert!(countries.contains(&Country::new("US", "American")));
    }
}
