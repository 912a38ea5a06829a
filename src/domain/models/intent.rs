#[cfg(test)]
#[path = "intent_test.rs"]
mod tests;

use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

/// The fixed set of conversation purposes a tourist can pick. Everything the
/// session does branches on this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Intent {
    Itinerary,
    Souvenir,
    Location,
    Language,
}

impl Intent {
    pub fn parse(text: &str) -> Option<Intent> {
        return Intent::iter().find(|e| return e.to_string() == text);
    }

    /// Utterances submitted before any selection are answered as general
    /// language help.
    pub fn fallback() -> Intent {
        return Intent::Language;
    }
}
