#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::GuideIndex;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::BackendBox;
use crate::domain::models::BackendPrompt;
use crate::domain::models::BackendReply;
use crate::domain::models::Event;
use crate::domain::models::GenerateJob;
use crate::domain::models::Intent;
use crate::domain::models::Locale;
use crate::domain::models::SessionReply;
use crate::infrastructure::backends::BackendManager;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /plan (/p) - Plan a trip. Johar asks for your destination, trip length, and interests, then writes a day-by-day itinerary.
- /souvenirs (/s) - Find local artisan crafts and souvenirs.
- /places (/v) - Get suggestions for places to visit.
- /phrases (/t) - Get help with translations and common phrases.
- /locale (/lang) [CODE] - Switch the display language. Codes: en, hi, bn, mr, te, ta.
- /restart (/startover) - Drop the conversation and start over.
- /help (/h) - Provides this help menu.
- /quit /exit (/q) - Exit Johar.

HOTKEYS:
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U - Page up
- CTRL+D - Page down
- CTRL+C - Abort waiting for a reply and start over if in progress, otherwise exit.
        "#;

    return text.trim().to_string();
}

fn task_preamble(intent: Intent) -> &'static str {
    match intent {
        Intent::Itinerary => {
            return "Create a detailed day-by-day itinerary for the following trip in Jharkhand. \
            Include timings, travel suggestions, local cultural notes, and sustainability tips."
        }
        Intent::Souvenir => {
            return "Recommend local artisan souvenirs and crafts from Jharkhand matching the \
            request, and mention what makes each one unique."
        }
        Intent::Location => {
            return "Suggest places to visit in Jharkhand matching the request, with a short \
            description of each."
        }
        Intent::Language => {
            return "Help the tourist with translations or common phrases useful for travelling \
            in Jharkhand."
        }
    }
}

/// The final prompt for a job: the intent's task line, any guide context the
/// utterance matched, and the reply-language directive wrapping the
/// utterance itself.
pub fn compose_prompt(intent: Intent, text: &str, locale: Locale) -> String {
    let preamble = task_preamble(intent);
    let directive = format!(
        "(The user wants you to respond ONLY in {language}). USER QUESTION: \"{text}\"",
        language = locale.language_name()
    );

    if let Some(context) = GuideIndex::retrieve(text) {
        return format!("{preamble}\n\nCONTEXT: \"{context}\"\n\n{directive}");
    }

    return format!("{preamble}\n\n{directive}");
}

/// Runs one job end to end: the outgoing translation leg when the display
/// locale needs it, the generation call, and the return translation leg. Any
/// failed leg fails the whole turn.
async fn dispatch(backend: &BackendBox, job: &GenerateJob) -> Result<BackendReply> {
    let mut text = job.text.to_string();
    if job.translate_input && !job.locale.is_english() {
        text = backend
            .translate(&text, job.locale, Locale::English)
            .await?;
    }

    let prompt = BackendPrompt::new(
        compose_prompt(job.intent, &text, job.locale),
        job.locale.language_name().to_string(),
    );
    let mut reply = backend.generate(prompt).await?;

    if !job.locale.is_english() {
        reply.text = backend
            .translate(&reply.text, Locale::English, job.locale)
            .await?;
    }

    return Ok(reply);
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        // Lazy default.
        let mut worker: JoinHandle<Result<()>> = tokio::spawn(async {
            return Ok(());
        });

        loop {
            let action = rx.recv().await;
            if action.is_none() {
                continue;
            }

            let worker_tx = tx.clone();
            match action.unwrap() {
                Action::Abort() => {
                    worker.abort();
                }
                Action::Generate(job) => {
                    worker = tokio::spawn(async move {
                        let backend = BackendManager::get(&Config::get(ConfigKey::Backend))?;
                        let res = dispatch(&backend, &job).await;
                        if let Err(err) = &res {
                            tracing::error!(error = ?err, "backend dispatch failed");
                        }

                        worker_tx.send(Event::ReplyReady(SessionReply {
                            epoch: job.epoch,
                            kind: job.kind,
                            result: res,
                        }))?;

                        return Ok(());
                    });
                }
            }
        }
    }
}
