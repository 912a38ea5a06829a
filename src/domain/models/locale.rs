#[cfg(test)]
#[path = "locale_test.rs"]
mod tests;

use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

/// Display locales the assistant can converse in. The generation backends
/// work in English; every other locale gets a translation round-trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
pub enum Locale {
    #[strum(serialize = "en")]
    English,
    #[strum(serialize = "hi")]
    Hindi,
    #[strum(serialize = "bn")]
    Bengali,
    #[strum(serialize = "mr")]
    Marathi,
    #[strum(serialize = "te")]
    Telugu,
    #[strum(serialize = "ta")]
    Tamil,
}

impl Locale {
    pub fn parse(text: &str) -> Option<Locale> {
        let code = text.trim().to_lowercase();
        return Locale::iter().find(|e| return e.to_string() == code);
    }

    /// English name, used when instructing a model which language to answer
    /// or translate in.
    pub fn language_name(&self) -> &'static str {
        match self {
            Locale::English => return "English",
            Locale::Hindi => return "Hindi",
            Locale::Bengali => return "Bengali",
            Locale::Marathi => return "Marathi",
            Locale::Telugu => return "Telugu",
            Locale::Tamil => return "Tamil",
        }
    }

    /// Name in the language itself, for user-facing listings.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::English => return "English",
            Locale::Hindi => return "हिन्दी",
            Locale::Bengali => return "বাংলা",
            Locale::Marathi => return "मराठी",
            Locale::Telugu => return "తెలుగు",
            Locale::Tamil => return "தமிழ்",
        }
    }

    pub fn is_english(&self) -> bool {
        return *self == Locale::English;
    }
}
