use async_trait::async_trait;
use guess_api::{CountryInfo, PredictionSet};
use strum_macros::{EnumString, IntoStaticStr};
use thiserror::Error;
use tracing::Level;

use crate::alexa;

pub use self::handlers::NameSource;

pub mod handlers;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] guess_api::Error),
    #[error("Account Error: no access token, account is not linked")]
    AccountNotLinked,
}

/// Data sources a guess draws on.
#[async_trait]
pub trait Lookup: Send + Sync {
    async fn predict(&self, name: &str) -> Result<PredictionSet, guess_api::Error>;
    async fn countries(&self, codes: &[String]) -> Result<CountryInfo, guess_api::Error>;
    async fn given_name(&self, access_token: &str) -> Result<String, guess_api::Error>;
}

#[async_trait]
impl Lookup for guess_api::Client {
    async fn predict(&self, name: &str) -> Result<PredictionSet, guess_api::Error> {
        guess_api::Client::predict(self, name).await
    }
    async fn countries(&self, codes: &[String]) -> Result<CountryInfo, guess_api::Error> {
        guess_api::Client::countries(self, codes).await
    }
    async fn given_name(&self, access_token: &str) -> Result<String, guess_api::Error> {
        guess_api::Client::given_name(self, access_token).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum Route {
    #[strum(serialize = "AMAZON.HelpIntent", serialize = "HelpIntent")]
    Help,
    #[strum(serialize = "AboutIntent")]
    About,
    #[strum(serialize = "GuessIntent")]
    Guess,
    #[strum(serialize = "GuessWithAccountIntent")]
    GuessWithAccount,
}
impl Route {
    /// Anything unrecognized, including requests without an intent, gets the
    /// About response.
    pub fn of(request: &alexa::Request) -> Self {
        request
            .intent_name()
            .and_then(|name| name.parse().ok())
            .unwrap_or(Route::About)
    }
}

#[derive(Clone)]
pub struct Skill<L> {
    lookup: L,
}
impl<L: Lookup> Skill<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    #[tracing::instrument(level = Level::INFO, skip_all, fields(intent = request.intent_name()))]
    pub async fn dispatch(&self, request: &alexa::Request) -> alexa::Response {
        let route = Route::of(request);
        tracing::debug!(route = <&'static str>::from(route));
        match route {
            Route::Help => handlers::help(),
            Route::About => handlers::about(),
            Route::Guess => self.guess(request, NameSource::Slot).await,
            Route::GuessWithAccount => self.guess(request, NameSource::LinkedAccount).await,
        }
    }

    async fn guess(&self, request: &alexa::Request, source: NameSource) -> alexa::Response {
        match handlers::guess(&self.lookup, request, source).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(%err, "guess");
                handlers::apology(&err)
            }
        }
    }
}
