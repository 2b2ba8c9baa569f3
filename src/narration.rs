//! Turns predictions and country data into the spoken guess.

use std::time::Duration;

use guess_api::{CountryInfo, Prediction};

use crate::speech::Utterance;

pub const NO_GUESS: &str = "Sorry, I couldn't guess your nationality based on the name you provided. Try again with your friends' names!";
pub const INTRO: &str = "There is a";
pub const UNKNOWN_DEMONYM: &str = "Unknown";
pub const GUESS_PAUSE: Duration = Duration::from_millis(500);

/// Country codes of `predictions`, in prediction order.
pub fn country_codes(predictions: &[Prediction]) -> Vec<String> {
    predictions
        .iter()
        .map(|prediction| prediction.country_id.clone())
        .collect()
}

/// Demonym of the first country with `code`, or "Unknown".
pub fn demonym_of<'a>(countries: &'a CountryInfo, code: &str) -> &'a str {
    countries
        .iter()
        .find(|country| country.code == code)
        .map(|country| country.demonym.as_str())
        .unwrap_or(UNKNOWN_DEMONYM)
}

/// Whole percent, truncated: 0.999 is 99, never 100.
pub fn percent(probability: f64) -> i64 {
    (probability * 100.0) as i64
}

/// Narrate `predictions` in the order given.
pub fn narrate(predictions: &[Prediction], countries: &CountryInfo) -> Utterance {
    let mut builder = Utterance::builder();
    if predictions.is_empty() {
        builder.say(NO_GUESS);
        return builder.build();
    }

    builder.say(INTRO);
    for (i, prediction) in predictions.iter().enumerate() {
        if i != 0 {
            builder.pause(GUESS_PAUSE);
        }
        let demonym = demonym_of(countries, &prediction.country_id);
        builder.say(format!(
            "{} percent chance you're {}.",
            percent(prediction.probability),
            demonym
        ));
    }
    builder.build()
}
