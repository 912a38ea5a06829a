use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use super::compose_prompt;
use super::dispatch;
use crate::domain::models::Backend;
use crate::domain::models::BackendBox;
use crate::domain::models::BackendName;
use crate::domain::models::BackendPrompt;
use crate::domain::models::BackendReply;
use crate::domain::models::GenerateJob;
use crate::domain::models::Intent;
use crate::domain::models::JobKind;
use crate::domain::models::Locale;

struct EchoBackend {
    fail_generation: bool,
}

#[async_trait]
impl Backend for EchoBackend {
    fn name(&self) -> BackendName {
        return BackendName::Ollama;
    }

    async fn health_check(&self) -> Result<()> {
        return Ok(());
    }

    async fn generate(&self, prompt: BackendPrompt) -> Result<BackendReply> {
        if self.fail_generation {
            bail!("service unavailable");
        }

        return Ok(BackendReply {
            text: format!("GENERATED[{}]", prompt.text),
            sources: vec![],
        });
    }

    async fn translate(&self, text: &str, from: Locale, to: Locale) -> Result<String> {
        return Ok(format!(
            "T({}->{})[{text}]",
            from.language_name(),
            to.language_name()
        ));
    }
}

fn job(locale: Locale, translate_input: bool, text: &str) -> GenerateJob {
    return GenerateJob {
        epoch: 0,
        kind: JobKind::FreeText,
        intent: Intent::Location,
        locale,
        text: text.to_string(),
        translate_input,
    };
}

#[test]
fn it_composes_a_prompt_without_context() {
    let prompt = compose_prompt(Intent::Language, "how do I say thank you", Locale::English);

    assert!(!prompt.contains("CONTEXT:"));
    insta::assert_snapshot!(prompt, @r###"
    Help the tourist with translations or common phrases useful for travelling in Jharkhand.

    (The user wants you to respond ONLY in English). USER QUESTION: "how do I say thank you"
    "###);
}

#[test]
fn it_composes_a_prompt_with_guide_context() {
    let prompt = compose_prompt(Intent::Location, "waterfall near ranchi", Locale::Hindi);

    assert!(prompt.contains("CONTEXT: \"Relevant Information: "));
    assert!(prompt.contains("Dassam Falls"));
    assert!(prompt.contains("(The user wants you to respond ONLY in Hindi)."));
}

#[test]
fn it_varies_the_task_line_by_intent() {
    let souvenir = compose_prompt(Intent::Souvenir, "something small", Locale::English);
    let itinerary = compose_prompt(Intent::Itinerary, "Destination: Netarhat", Locale::English);

    assert!(souvenir.contains("artisan souvenirs"));
    assert!(itinerary.contains("day-by-day itinerary"));
}

#[tokio::test]
async fn it_dispatches_without_translation_for_english() -> Result<()> {
    let backend: BackendBox = Box::new(EchoBackend {
        fail_generation: false,
    });

    let reply = dispatch(&backend, &job(Locale::English, false, "dassam falls")).await?;

    assert!(reply.text.starts_with("GENERATED["));
    assert!(reply.text.contains("dassam falls"));
    assert!(!reply.text.contains("T("));

    return Ok(());
}

#[tokio::test]
async fn it_round_trips_translation_for_other_locales() -> Result<()> {
    let backend: BackendBox = Box::new(EchoBackend {
        fail_generation: false,
    });

    let reply = dispatch(&backend, &job(Locale::Hindi, true, "some hindi text")).await?;

    // Input leg ran before generation, return leg wrapped the whole reply.
    assert!(reply.text.starts_with("T(English->Hindi)[GENERATED["));
    assert!(reply.text.contains("T(Hindi->English)[some hindi text]"));

    return Ok(());
}

#[tokio::test]
async fn it_skips_the_input_leg_for_composed_itineraries() -> Result<()> {
    let backend: BackendBox = Box::new(EchoBackend {
        fail_generation: false,
    });

    let reply = dispatch(&backend, &job(Locale::Hindi, false, "Destination: Netarhat")).await?;

    assert!(!reply.text.contains("T(Hindi->English)"));
    assert!(reply.text.starts_with("T(English->Hindi)["));

    return Ok(());
}

#[tokio::test]
async fn it_propagates_generation_failures() {
    let backend: BackendBox = Box::new(EchoBackend {
        fail_generation: true,
    });

    let res = dispatch(&backend, &job(Locale::English, false, "anything")).await;

    assert!(res.is_err());
    assert!(res.unwrap_err().to_string().contains("service unavailable"));
}

#[test]
fn it_lists_every_command_in_help() {
    let help = super::help_text();
    for command in ["/plan", "/souvenirs", "/places", "/phrases", "/locale", "/restart", "/quit"] {
        assert!(help.contains(command));
    }
}
