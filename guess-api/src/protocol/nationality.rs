use serde::Deserialize;

/// Predictions ranked by descending probability, as the service returned them.
pub type PredictionSet = Vec<Prediction>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    /// ISO 3166-1 alpha-2 code.
    pub country_id: String,
    /// In `[0, 1]`.
    pub probability: f64,
}
impl Prediction {
    pub fn new(country_id: impl Into<String>, probability: f64) -> Self {
        Self {
            country_id: country_id.into(),
            probability,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct NationalizeResponse {
    #[allow(unused)]
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(rename = "country", default)]
    pub predictions: PredictionSet,
}
