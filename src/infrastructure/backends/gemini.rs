#[cfg(test)]
#[path = "gemini_test.rs"]
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
use crate::domain::models::SourceRef;
use crate::domain::models::SYSTEM_PERSONA;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction>,
    contents: Vec<Content>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WebChunk {
    #[serde(default)]
    uri: String,
    #[serde(default)]
    title: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingChunk {
    web: Option<WebChunk>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

pub struct Gemini {
    url: String,
    token: String,
    model: String,
    timeout: String,
    request_timeout: String,
}

impl Default for Gemini {
    fn default() -> Gemini {
        return Gemini {
            url: Config::get(ConfigKey::GeminiURL),
            token: Config::get(ConfigKey::GeminiToken),
            model: Config::get(ConfigKey::Model),
            timeout: Config::get(ConfigKey::BackendHealthCheckTimeout),
            request_timeout: Config::get(ConfigKey::RequestTimeout),
        };
    }
}

impl Gemini {
    async fn generate_content(
        &self,
        text: &str,
        system: Option<&str>,
    ) -> Result<GenerateContentResponse> {
        let req = GenerateContentRequest {
            system_instruction: system.map(|instruction| {
                return SystemInstruction {
                    parts: vec![Part {
                        text: instruction.to_string(),
                    }],
                };
            }),
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: text.to_string(),
                }],
            }],
        };

        let res = reqwest::Client::new()
            .post(format!(
                "{url}/v1beta/models/{model}:generateContent?key={key}",
                url = self.url,
                model = self.model,
                key = self.token,
            ))
            .timeout(Duration::from_millis(self.request_timeout.parse::<u64>()?))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to make generation request to Gemini"
            );
            bail!(format!(
                "Failed to make generation request to Gemini, {}",
                res.status().as_u16()
            ));
        }

        return Ok(res.json::<GenerateContentResponse>().await?);
    }

    fn candidate_text(response: &GenerateContentResponse) -> Result<String> {
        let candidate = match response.candidates.first() {
            Some(candidate) => candidate,
            None => bail!("Gemini returned no candidates"),
        };

        let text = candidate
            .content
            .as_ref()
            .map(|content| {
                return content
                    .parts
                    .iter()
                    .map(|part| return part.text.to_string())
                    .collect::<Vec<String>>()
                    .join("");
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            bail!("Gemini returned an empty reply");
        }

        return Ok(text);
    }
}

#[async_trait]
impl Backend for Gemini {
    fn name(&self) -> BackendName {
        return BackendName::Gemini;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("Gemini URL is not defined");
        }
        if self.token.is_empty() {
            bail!("Gemini token is not defined");
        }

        let url = format!(
            "{url}/v1beta/models/{model}?key={key}",
            url = self.url,
            model = self.model,
            key = self.token
        );

        let res = reqwest::Client::new()
            .get(&url)
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await;

        if res.is_err() {
            tracing::error!(error = ?res.unwrap_err(), "Gemini is not reachable");
            bail!("Gemini is not reachable");
        }

        let status = res.unwrap().status().as_u16();
        if status >= 400 {
            tracing::error!(status = status, "Gemini health check failed");
            bail!("Gemini health check failed");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn generate(&self, prompt: BackendPrompt) -> Result<BackendReply> {
        let system = format!(
            "{SYSTEM_PERSONA} Respond only in {language}.",
            language = prompt.language
        );
        let response = self
            .generate_content(&prompt.text, Some(system.as_str()))
            .await?;
        let text = Gemini::candidate_text(&response)?;

        let sources = response.candidates[0]
            .grounding_metadata
            .as_ref()
            .map(|metadata| {
                return metadata
                    .grounding_chunks
                    .iter()
                    .filter_map(|chunk| {
                        return chunk.web.as_ref().map(|web| {
                            return SourceRef {
                                uri: web.uri.to_string(),
                                title: web.title.to_string(),
                            };
                        });
                    })
                    .collect::<Vec<SourceRef>>();
            })
            .unwrap_or_default();

        return Ok(BackendReply { text, sources });
    }

    #[allow(clippy::implicit_return)]
    async fn translate(&self, text: &str, from: Locale, to: Locale) -> Result<String> {
        let instruction = format!(
            "Translate the following text from {from} to {to}. Reply with only the translated text, nothing else.\n\n{text}",
            from = from.language_name(),
            to = to.language_name()
        );

        let response = self.generate_content(&instruction, None).await?;
        let translated = Gemini::candidate_text(&response)?;

        return Ok(translated.trim().to_string());
    }
}
