#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use super::UiStrings;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::GenerateJob;
use crate::domain::models::Intent;
use crate::domain::models::ItineraryDraft;
use crate::domain::models::JobKind;
use crate::domain::models::Locale;
use crate::domain::models::SessionReply;
use crate::domain::models::SlotPrompt;
use crate::domain::models::Turn;
use crate::domain::models::TurnKind;

/// The live conversation. Owns the transcript, the selected intent, the
/// itinerary draft, and the busy flag guarding the single in-flight backend
/// call. The epoch counter increments on every reset or intent change so a
/// reply that raced a reset can be told apart from a current one.
pub struct Session {
    pub locale: Locale,
    pub intent: Option<Intent>,
    pub turns: Vec<Turn>,
    pub draft: ItineraryDraft,
    pub busy: bool,
    epoch: u64,
}

impl Session {
    pub fn new(locale: Locale) -> Session {
        return Session {
            locale,
            intent: None,
            turns: vec![Turn::new(Author::Johar, UiStrings::greeting(locale))],
            draft: ItineraryDraft::default(),
            busy: false,
            epoch: 0,
        };
    }

    pub fn epoch(&self) -> u64 {
        return self.epoch;
    }

    pub fn add_turn(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Primes the session for one of the fixed intents: the transcript is cut
    /// back to the intent's own greeting, and the itinerary draft starts
    /// collecting only for the itinerary intent.
    pub fn select_intent(&mut self, intent: Intent) {
        self.epoch += 1;
        self.intent = Some(intent);
        self.busy = false;
        self.draft.clear();
        if intent == Intent::Itinerary {
            self.draft.arm();
        }

        self.turns = vec![Turn::new(
            Author::Johar,
            UiStrings::intent_opener(intent, self.locale),
        )];
    }

    /// Back to the initial state. Safe to call mid-flight; the orphaned reply
    /// is dropped when it lands because its epoch no longer matches.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.intent = None;
        self.busy = false;
        self.draft.clear();
        self.turns = vec![Turn::new(Author::Johar, UiStrings::greeting(self.locale))];
    }

    /// Changing the display locale restarts the conversation in that locale.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
        self.reset();
    }

    /// Decides what a user utterance becomes: the next itinerary slot plus a
    /// canned follow-up, or one generation job for the dispatch worker. Empty
    /// input and calls while a reply is pending are no-ops.
    pub fn submit(&mut self, text: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        if self.busy {
            tracing::warn!("utterance submitted while a reply is pending, ignoring");
            return Ok(());
        }

        self.turns.push(Turn::new(Author::User, trimmed));
        self.busy = true;

        if self.intent == Some(Intent::Itinerary) && self.draft.is_collecting() {
            match self.draft.fill_next(trimmed) {
                SlotPrompt::AskDuration => {
                    self.turns
                        .push(Turn::new(Author::Johar, UiStrings::duration_prompt(self.locale)));
                    self.busy = false;
                }
                SlotPrompt::AskInterests => {
                    self.turns
                        .push(Turn::new(Author::Johar, UiStrings::interests_prompt(self.locale)));
                    self.busy = false;
                }
                SlotPrompt::Ready => {
                    self.turns
                        .push(Turn::new(Author::Johar, UiStrings::generating(self.locale)));
                    tx.send(Action::Generate(GenerateJob {
                        epoch: self.epoch,
                        kind: JobKind::Itinerary,
                        intent: Intent::Itinerary,
                        locale: self.locale,
                        text: self.draft.composed_prompt(),
                        translate_input: false,
                    }))?;
                }
            }

            return Ok(());
        }

        tx.send(Action::Generate(GenerateJob {
            epoch: self.epoch,
            kind: JobKind::FreeText,
            intent: self.intent.unwrap_or_else(Intent::fallback),
            locale: self.locale,
            text: trimmed.to_string(),
            translate_input: !self.locale.is_english(),
        }))?;

        return Ok(());
    }

    /// Applies a worker reply. Replies from an older epoch belong to a
    /// session that no longer exists and are dropped without touching state.
    pub fn handle_reply(&mut self, reply: SessionReply) {
        if reply.epoch != self.epoch {
            tracing::debug!(
                reply_epoch = reply.epoch,
                epoch = self.epoch,
                "discarding stale backend reply"
            );
            return;
        }

        match reply.result {
            Ok(res) => {
                if reply.kind == JobKind::Itinerary {
                    self.draft.mark_done();
                }
                self.turns
                    .push(Turn::new(Author::Model, &res.text).with_sources(res.sources));
            }
            Err(err) => {
                // A failed final itinerary call leaves the draft in
                // Generating; the flow only recovers through /restart or
                // reselecting the intent.
                self.turns.push(Turn::new_with_kind(
                    Author::Johar,
                    TurnKind::Error,
                    &format!("{} {err}", UiStrings::ERROR_PREFIX),
                ));
            }
        }

        self.busy = false;
    }
}
