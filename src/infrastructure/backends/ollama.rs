#[cfg(test)]
#[path = "ollama_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Backend;
use crate::domain::models::BackendName;
use crate::domain::models::BackendPrompt;
use crate::domain::models::BackendReply;
use crate::domain::models::Locale;
use crate::domain::models::SYSTEM_PERSONA;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct CompletionOptions {
    temperature: f32,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct CompletionRequest {
    model: String,
    prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    stream: bool,
    options: CompletionOptions,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionResponse {
    pub response: String,
    pub done: bool,
}

pub struct Ollama {
    url: String,
    model: String,
    timeout: String,
    request_timeout: String,
}

impl Default for Ollama {
    fn default() -> Ollama {
        return Ollama {
            url: Config::get(ConfigKey::OllamaURL),
            model: Config::get(ConfigKey::Model),
            timeout: Config::get(ConfigKey::BackendHealthCheckTimeout),
            request_timeout: Config::get(ConfigKey::RequestTimeout),
        };
    }
}

impl Ollama {
    async fn completion(
        &self,
        prompt: &str,
        system: Option<&str>,
        temperature: f32,
    ) -> Result<CompletionResponse> {
        let req = CompletionRequest {
            model: self.model.to_string(),
            prompt: prompt.to_string(),
            system: system.map(|e| return e.to_string()),
            stream: false,
            options: CompletionOptions { temperature },
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/api/generate", url = self.url))
            .timeout(Duration::from_millis(self.request_timeout.parse::<u64>()?))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to make completion request to Ollama"
            );
            bail!("Failed to make completion request to Ollama");
        }

        let ores = res.json::<CompletionResponse>().await?;
        tracing::debug!(body = ?ores, "Completion response");

        if ores.response.trim().is_empty() {
            bail!("Ollama returned an empty reply");
        }

        return Ok(ores);
    }
}

#[async_trait]
impl Backend for Ollama {
    fn name(&self) -> BackendName {
        return BackendName::Ollama;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        let res = reqwest::Client::new()
            .get(&self.url)
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await;

        if res.is_err() {
            tracing::error!(error = ?res.unwrap_err(), "Ollama is not running");
            bail!("Ollama is not running");
        }

        let res = res.unwrap();
        if res.status() != 200 {
            tracing::error!(status = res.status().as_u16(), "Ollama health check failed");
            bail!("Ollama health check failed");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn generate(&self, prompt: BackendPrompt) -> Result<BackendReply> {
        let system = format!(
            "{SYSTEM_PERSONA} Respond only in {language}.",
            language = prompt.language
        );
        let res = self
            .completion(&prompt.text, Some(system.as_str()), 0.7)
            .await?;

        // Ollama has no grounding metadata to surface.
        return Ok(BackendReply {
            text: res.response,
            sources: vec![],
        });
    }

    #[allow(clippy::implicit_return)]
    async fn translate(&self, text: &str, from: Locale, to: Locale) -> Result<String> {
        let instruction = format!(
            "Translate the following text from {from} to {to}. Reply with only the translated text, nothing else.\n\n{text}",
            from = from.language_name(),
            to = to.language_name()
        );

        let res = self.completion(&instruction, None, 0.1).await?;

        return Ok(res.response.trim().to_string());
    }
}
