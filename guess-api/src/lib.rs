//! Clients for the services behind a nationality guess: name-based
//! nationality predictions, country reference data, and the identity
//! provider used by account-linked requests.

use std::{sync::Arc, time::Duration};

use reqwest::{IntoUrl, Method, Url};
use strum_macros::Display;
use thiserror::Error;

pub mod countries;
pub mod identity;
pub mod nationality;

mod protocol;

pub use reqwest::StatusCode;

pub use protocol::{
    countries::{Country, CountryInfo},
    identity::{Attribute, User},
    nationality::{Prediction, PredictionSet},
};

pub const NATIONALIZE_ENDPOINT: &str = "https://api.nationalize.io/";
pub const COUNTRIES_ENDPOINT: &str = "https://restcountries.com/v2/alpha";
pub const IDENTITY_ENDPOINT: &str = "https://cognito-idp.us-east-2.amazonaws.com/";

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Network(#[from] reqwest::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("{service} responded with {status}: {message}")]
    Service {
        service: Service,
        status: StatusCode,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Service {
    #[strum(serialize = "nationalize")]
    Nationalize,
    #[strum(serialize = "countries")]
    Countries,
    #[strum(serialize = "identity")]
    Identity,
}

#[derive(Debug, Clone)]
pub struct Endpoints {
    pub nationalize: Url,
    pub countries: Url,
    pub identity: Url,
}
impl Endpoints {
    pub fn new(
        nationalize: impl IntoUrl,
        countries: impl IntoUrl,
        identity: impl IntoUrl,
    ) -> Result<Self, Error> {
        Ok(Self {
            nationalize: nationalize.into_url()?,
            countries: countries.into_url()?,
            identity: identity.into_url()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ConnectionPolicy {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ConnectionPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(3),
        }
    }
}

#[derive(Clone)]
pub struct Client {
    shared: Arc<Shared>,
}
struct Shared {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl Client {
    pub fn new(endpoints: Endpoints, connection_policy: ConnectionPolicy) -> Result<Self, Error> {
        let ConnectionPolicy {
            timeout,
            connect_timeout,
        } = connection_policy;
        Ok(Self {
            shared: Arc::new(Shared {
                client: reqwest::Client::builder()
                    .timeout(timeout)
                    .connect_timeout(connect_timeout)
                    .build()?,
                endpoints,
            }),
        })
    }
}

impl Shared {
    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        self.client.request(method, url)
    }

    /// Send the request, turning any non-2xx answer into [`Error::Service`]
    /// with whatever message the service put in its error body.
    async fn send(
        &self,
        service: Service,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, Error> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await?;
        let message = match serde_json::from_str::<protocol::ServiceError>(&body) {
            Ok(err) => err.to_string(),
            Err(_) => body,
        };
        tracing::debug!(%service, %status, message, "unexpected response");
        Err(Error::Service {
            service,
            status,
            message,
        })
    }
}
