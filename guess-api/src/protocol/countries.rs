use serde::Deserialize;

/// Reference data for the requested codes. Unordered, and may be missing
/// codes the service did not recognize.
pub type CountryInfo = Vec<Country>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Country {
    #[serde(rename = "alpha2Code")]
    pub code: String,
    #[serde(default)]
    pub demonym: String,
}
impl Country {
    pub fn new(code: impl Into<String>, demonym: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            demonym: demonym.into(),
        }
    }
}

/// Unknown codes come back as `null` entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub(crate) struct CountriesResponse(pub Vec<Option<Country>>);
impl From<CountriesResponse> for CountryInfo {
    fn from(response: CountriesResponse) -> Self {
        response.0.into_iter().flatten().collect()
    }
}
