//! Alexa skill request and response envelopes.
//!
//! https://developer.amazon.com/en-US/docs/alexa/custom-skills/request-and-response-json-reference.html

use std::fmt;

use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};

use crate::speech::Utterance;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Request {
    pub version: String,
    pub session: Session,
    #[serde(rename = "request")]
    pub body: RequestBody,
}
impl Request {
    pub fn intent_name(&self) -> Option<&str> {
        self.body.intent.as_ref().map(|intent| intent.name.as_str())
    }

    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.body
            .intent
            .as_ref()
            .and_then(|intent| intent.slots.value(name))
    }

    pub fn access_token(&self) -> Option<&str> {
        self.session
            .user
            .access_token
            .as_deref()
            .filter(|token| !token.is_empty())
    }

    pub fn application_id(&self) -> &str {
        &self.session.application.application_id
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    pub new: bool,
    pub session_id: String,
    pub application: Application,
    pub user: User,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Application {
    pub application_id: String,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub user_id: String,
    pub access_token: Option<String>,
}
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("user_id", &self.user_id)
            .field("access_token", &self.access_token.as_ref().map(|_| ".."))
            .finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestBody {
    #[serde(rename = "type")]
    pub kind: String,
    pub request_id: String,
    pub timestamp: String,
    pub locale: String,
    pub intent: Option<Intent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Intent {
    pub name: String,
    pub slots: Slots,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Slot {
    pub name: String,
    pub value: Option<String>,
}

/// Slots in the order they appear in the request. The platform sends them as
/// an object keyed by slot name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slots(pub Vec<Slot>);
impl Slots {
    /// Value of the first slot called `name`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|slot| slot.name == name)
            .and_then(|slot| slot.value.as_deref())
    }
}

impl<'de> Deserialize<'de> for Slots {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SlotsVisitor;
        impl<'de> Visitor<'de> for SlotsVisitor {
            type Value = Slots;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of slot names to slots")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut slots = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, mut slot)) = map.next_entry::<String, Slot>()? {
                    if slot.name.is_empty() {
                        slot.name = key;
                    }
                    slots.push(slot);
                }
                Ok(Slots(slots))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Slots::default())
            }
        }
        deserializer.deserialize_any(SlotsVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Response {
    pub version: String,
    pub response: ResponseBody,
}
impl Response {
    pub const VERSION: &'static str = "1.0";

    /// Plain text speech with a card showing the same text.
    pub fn simple(title: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(
            OutputSpeech::PlainText { text: text.clone() },
            Card::Simple {
                title: title.into(),
                content: text,
            },
        )
    }

    /// SSML speech with a card showing its phrases.
    pub fn ssml(title: impl Into<String>, utterance: &Utterance) -> Self {
        Self::new(
            OutputSpeech::Ssml {
                ssml: utterance.to_ssml(),
            },
            Card::Simple {
                title: title.into(),
                content: utterance.to_plain_text(),
            },
        )
    }

    fn new(output_speech: OutputSpeech, card: Card) -> Self {
        Self {
            version: Self::VERSION.into(),
            response: ResponseBody {
                output_speech: Some(output_speech),
                card: Some(card),
                should_end_session: true,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    PlainText { text: String },
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum Card {
    Simple { title: String, content: String },
}
