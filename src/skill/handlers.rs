use std::time::Duration;

use super::{Error, Lookup};
use crate::{alexa, narration, speech::Utterance};

pub const HELP_TITLE: &str = "Help";
pub const ABOUT_TITLE: &str = "About";
pub const GUESS_TITLE: &str = "Nationality Guess";

pub const ABOUT: &str = "Thanks for using me! I can guess your nationality based on your first name. After providing me with your name, I'll list some countries where you might be from, along with a probability for each of them!";
pub const SERVICE_UNAVAILABLE: &str =
    "Sorry, I couldn't reach the nationality service right now. Please try again later.";
pub const LINK_ACCOUNT: &str =
    "Please link your account in the Alexa app so I can find your name.";

const FIRST_NAME_SLOT: &str = "first_name";
const HELP_PAUSE: Duration = Duration::from_millis(1000);

/// Where the guess gets the user's first name from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    Slot,
    LinkedAccount,
}

pub fn help() -> alexa::Response {
    let mut builder = Utterance::builder();
    builder
        .say("You can ask me like so:")
        .pause(HELP_PAUSE)
        .say("My name is Ethan, where am I from?");
    alexa::Response::ssml(HELP_TITLE, &builder.build())
}

pub fn about() -> alexa::Response {
    alexa::Response::simple(ABOUT_TITLE, ABOUT)
}

/// Predictions are fetched before countries since the country lookup needs
/// their codes.
pub async fn guess(
    lookup: &impl Lookup,
    request: &alexa::Request,
    source: NameSource,
) -> Result<alexa::Response, Error> {
    let first_name = match source {
        NameSource::Slot => request
            .slot_value(FIRST_NAME_SLOT)
            .unwrap_or_default()
            .to_owned(),
        NameSource::LinkedAccount => {
            let access_token = request.access_token().ok_or(Error::AccountNotLinked)?;
            lookup.given_name(access_token).await?
        }
    };
    tracing::debug!(%first_name, ?source);

    let predictions = lookup.predict(&first_name).await?;
    let codes = narration::country_codes(&predictions);
    let countries = lookup.countries(&codes).await?;
    let utterance = narration::narrate(&predictions, &countries);
    Ok(alexa::Response::ssml(GUESS_TITLE, &utterance))
}

/// What to say when a guess could not be made.
pub fn apology(err: &Error) -> alexa::Response {
    let text = match err {
        Error::Api(_) => SERVICE_UNAVAILABLE,
        Error::AccountNotLinked => LINK_ACCOUNT,
    };
    alexa::Response::simple(GUESS_TITLE, text)
}
