use std::{fmt::Write, time::Duration};

use quick_xml::escape::escape;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Say(String),
    Pause(Duration),
}

/// Spoken response, in the order it is to be spoken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Utterance {
    segments: Vec<Segment>,
}
impl Utterance {
    pub fn builder() -> UtteranceBuilder {
        UtteranceBuilder::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// `<speak>` document with segments separated by single spaces.
    pub fn to_ssml(&self) -> String {
        let mut ssml = String::from("<speak>");
        for (i, segment) in self.segments.iter().enumerate() {
            if i != 0 {
                ssml.push(' ');
            }
            match segment {
                Segment::Say(text) => ssml.push_str(&escape(text.as_str())),
                Segment::Pause(duration) => {
                    // infallible for String
                    let _ = write!(ssml, r#"<break time="{}ms"/>"#, duration.as_millis());
                }
            }
        }
        ssml.push_str("</speak>");
        ssml
    }

    /// The spoken phrases without markup, for cards and logs.
    pub fn to_plain_text(&self) -> String {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Say(text) => Some(text.as_str()),
                Segment::Pause(_) => None,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Default)]
pub struct UtteranceBuilder {
    segments: Vec<Segment>,
}
impl UtteranceBuilder {
    pub fn say(&mut self, text: impl Into<String>) -> &mut Self {
        self.segments.push(Segment::Say(text.into()));
        self
    }

    pub fn pause(&mut self, duration: Duration) -> &mut Self {
        self.segments.push(Segment::Pause(duration));
        self
    }

    pub fn build(self) -> Utterance {
        Utterance {
            segments: self.segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utterance() -> Utterance {
        let mut builder = Utterance::builder();
        builder
            .say("You can ask me like so:")
            .pause(Duration::from_millis(1000))
            .say("My name is Ethan, where am I from?");
        builder.build()
    }

    #[test]
    fn test_segments_in_order() {
        assert_eq!(
            utterance().segments(),
            [
                Segment::Say("You can ask me like so:".into()),
                Segment::Pause(Duration::from_millis(1000)),
                Segment::Say("My name is Ethan, where am I from?".into()),
            ]
        );
    }

    #[test]
    fn test_ssml() {
        assert_eq!(
            utterance().to_ssml(),
            r#"<speak>You can ask me like so: <break time="1000ms"/> My name is Ethan, where am I from?</speak>"#
        );
    }

    #[test]
    fn test_ssml_escapes_text() {
        let mut builder = Utterance::builder();
        builder.say("Tom & Jerry <3");
        assert_eq!(
            builder.build().to_ssml(),
            "<speak>Tom &amp; Jerry &lt;3</speak>"
        );
    }

    #[test]
    fn test_plain_text_drops_pauses() {
        assert_eq!(
            utterance().to_plain_text(),
            "You can ask me like so: My name is Ethan, where am I from?"
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(Utterance::default().to_ssml(), "<speak></speak>");
        assert_eq!(Utterance::default().to_plain_text(), "");
    }
}
