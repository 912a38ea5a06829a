use anyhow::Result;

use super::BackendReply;
use super::Intent;
use super::Locale;

/// Distinguishes the composed itinerary request from ordinary free-text
/// turns, so only the itinerary reply can advance the draft to Done.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobKind {
    Itinerary,
    FreeText,
}

/// One generation request handed to the dispatch worker. The epoch is
/// captured at dispatch time; a reply carrying an older epoch than the
/// session's current one is discarded.
pub struct GenerateJob {
    pub epoch: u64,
    pub kind: JobKind,
    pub intent: Intent,
    pub locale: Locale,
    pub text: String,
    pub translate_input: bool,
}

/// What the worker hands back for a job, successful or not.
pub struct SessionReply {
    pub epoch: u64,
    pub kind: JobKind,
    pub result: Result<BackendReply>,
}

pub enum Action {
    Abort(),
    Generate(GenerateJob),
}
