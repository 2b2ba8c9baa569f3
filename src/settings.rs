use std::{path::PathBuf, time::Duration};

use guess_api::{ConnectionPolicy, Endpoints};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub listen_address: String,
    /// Reject requests for any other skill.
    pub application_id: Option<String>,

    pub nationalize_endpoint: String,
    pub countries_endpoint: String,
    pub identity_endpoint: String,
    pub connection_timeout: u64,
    pub timeout: u64,
}
impl Default for Settings {
    fn default() -> Self {
        Self {
            listen_address: "127.0.0.1:3000".into(),
            application_id: None,

            nationalize_endpoint: guess_api::NATIONALIZE_ENDPOINT.into(),
            countries_endpoint: guess_api::COUNTRIES_ENDPOINT.into(),
            identity_endpoint: guess_api::IDENTITY_ENDPOINT.into(),
            connection_timeout: 3000,
            timeout: 10000,
        }
    }
}
impl Settings {
    const CONFIG_FILE: &'static str = "nationality-guesser.toml";

    pub fn from_file() -> Self {
        let user_config = Self::user_config_path();
        std::fs::read_to_string(Self::CONFIG_FILE)
            .ok()
            .or_else(|| user_config.and_then(|x| std::fs::read_to_string(x).ok()))
            .and_then(|x| {
                toml::from_str::<Settings>(&x)
                    .inspect_err(|err| tracing::warn!(%err, "ignoring malformed settings"))
                    .ok()
            })
            .unwrap_or_default()
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|x| x.join("nationality-guesser").join(Self::CONFIG_FILE))
    }

    pub fn endpoints(&self) -> Result<Endpoints, guess_api::Error> {
        Endpoints::new(
            self.nationalize_endpoint.as_str(),
            self.countries_endpoint.as_str(),
            self.identity_endpoint.as_str(),
        )
    }

    pub fn connection_policy(&self) -> ConnectionPolicy {
        ConnectionPolicy {
            timeout: Duration::from_millis(self.timeout),
            connect_timeout: Duration::from_millis(self.connection_timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            listen_address = "0.0.0.0:8080"
            application_id = "amzn1.ask.skill.1"
            timeout = 2500
            "#,
        )
        .unwrap();
        assert_eq!(settings.listen_address, "0.0.0.0:8080");
        assert_eq!(settings.application_id.as_deref(), Some("amzn1.ask.skill.1"));
        assert_eq!(settings.nationalize_endpoint, guess_api::NATIONALIZE_ENDPOINT);
        assert_eq!(
            settings.connection_policy().timeout,
            Duration::from_millis(2500)
        );
        assert_eq!(
            settings.connection_policy().connect_timeout,
            Duration::from_secs(3)
        );
    }

    #[test]
    fn test_default_endpoints_parse() {
        let endpoints = Settings::default().endpoints().unwrap();
        assert_eq!(endpoints.nationalize.host_str(), Some("api.nationalize.io"));
    }

    #[test]
    fn test_bad_endpoint() {
        let settings = Settings {
            countries_endpoint: "restcountries".into(),
            ..Default::default()
        };
        assert!(settings.endpoints().is_err());
    }
}
