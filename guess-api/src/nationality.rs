//! https://nationalize.io/documentation

use reqwest::Method;
use tracing::Level;

use crate::{
    protocol::nationality::{NationalizeResponse, PredictionSet},
    Client, Error, Service,
};

impl Client {
    /// Likely nationalities for `name`, most likely first. An empty name has
    /// no predictions and is never sent.
    #[tracing::instrument(level = Level::DEBUG, skip_all, err)]
    pub async fn predict(&self, name: &str) -> Result<PredictionSet, Error> {
        let name = name.trim();
        if name.is_empty() {
            tracing::debug!("empty name");
            return Ok(PredictionSet::new());
        }

        let shared = &self.shared;
        let request = shared
            .request(Method::GET, shared.endpoints.nationalize.clone())
            .query(&[("name", name)]);
        let response: NationalizeResponse = shared
            .send(Service::Nationalize, request)
            .await?
            .json()
            .await?;
        tracing::debug!(?response);
        Ok(response.predictions)
    }
}
