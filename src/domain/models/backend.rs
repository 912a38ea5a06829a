#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

use super::Locale;
use super::SourceRef;

/// Persona every generation backend speaks with.
pub const SYSTEM_PERSONA: &str = "You are a friendly, polite, and culturally aware AI travel guide \
for eco and cultural tourism in Jharkhand. Your name is Johar. Be helpful, concise, and \
tourist-friendly. Promote eco-friendly practices, and highlight Jharkhand's culture, traditions, \
and artisans. Use structured responses (lists, bullet points) for clarity, especially in \
itineraries. When context is provided, weave it naturally into your answer without referring to \
the context itself.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum BackendName {
    Gemini,
    Ollama,
}

impl BackendName {
    pub fn parse(text: &str) -> Option<BackendName> {
        return BackendName::iter().find(|e| return e.to_string() == text);
    }
}

/// A fully composed request: the final prompt text plus the name of the
/// language the reply must be written in.
pub struct BackendPrompt {
    pub text: String,
    pub language: String,
}

impl BackendPrompt {
    pub fn new(text: String, language: String) -> BackendPrompt {
        return BackendPrompt { text, language };
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendReply {
    pub text: String,
    pub sources: Vec<SourceRef>,
}

#[async_trait]
pub trait Backend {
    fn name(&self) -> BackendName;

    /// Used at startup to verify all configurations are available to work
    /// with the backend.
    async fn health_check(&self) -> Result<()>;

    /// One prompt, one reply. Backends that can ground their answers attach
    /// source references to the reply.
    async fn generate(&self, prompt: BackendPrompt) -> Result<BackendReply>;

    /// Translates text between two display locales.
    async fn translate(&self, text: &str, from: Locale, to: Locale) -> Result<String>;
}

pub type BackendBox = Box<dyn Backend + Send + Sync>;
