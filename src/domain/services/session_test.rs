use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use test_utils::itinerary_reply_fixture;
use tokio::sync::mpsc;

use super::Session;
use super::UiStrings;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::BackendReply;
use crate::domain::models::GenerateJob;
use crate::domain::models::Intent;
use crate::domain::models::ItineraryPhase;
use crate::domain::models::JobKind;
use crate::domain::models::Locale;
use crate::domain::models::SessionReply;
use crate::domain::models::SourceRef;
use crate::domain::models::TurnKind;

fn channel() -> (
    mpsc::UnboundedSender<Action>,
    mpsc::UnboundedReceiver<Action>,
) {
    return mpsc::unbounded_channel::<Action>();
}

fn recv_job(rx: &mut mpsc::UnboundedReceiver<Action>) -> Result<GenerateJob> {
    match rx.try_recv()? {
        Action::Generate(job) => return Ok(job),
        _ => bail!("Wrong action type"),
    }
}

fn success(session: &Session, kind: JobKind, text: &str) -> SessionReply {
    return SessionReply {
        epoch: session.epoch(),
        kind,
        result: Ok(BackendReply {
            text: text.to_string(),
            sources: vec![],
        }),
    };
}

#[test]
fn it_starts_with_a_greeting_and_no_intent() {
    let session = Session::new(Locale::English);

    assert_eq!(session.turns.len(), 1);
    assert_eq!(session.turns[0].text, UiStrings::greeting(Locale::English));
    assert_eq!(session.intent, None);
    assert!(!session.busy);
    assert_eq!(session.draft.phase(), ItineraryPhase::Inactive);
}

#[test]
fn it_primes_the_itinerary_flow_on_selection() {
    let mut session = Session::new(Locale::English);
    session.select_intent(Intent::Itinerary);

    assert_eq!(session.turns.len(), 1);
    assert_eq!(
        session.turns[0].text,
        UiStrings::intent_opener(Intent::Itinerary, Locale::English)
    );
    assert_eq!(session.draft.phase(), ItineraryPhase::Collecting);
}

#[test]
fn it_keeps_the_draft_inert_for_other_intents() {
    let mut session = Session::new(Locale::English);
    session.select_intent(Intent::Souvenir);

    assert_eq!(session.draft.phase(), ItineraryPhase::Inactive);
}

#[test]
fn it_fills_slots_in_order_without_calling_the_backend() -> Result<()> {
    let (tx, mut rx) = channel();
    let mut session = Session::new(Locale::English);
    session.select_intent(Intent::Itinerary);

    session.submit("Netarhat", &tx)?;
    assert_eq!(session.draft.destination.as_deref(), Some("Netarhat"));
    assert_eq!(
        session.turns.last().unwrap().text,
        UiStrings::duration_prompt(Locale::English)
    );
    assert!(!session.busy);

    session.submit("3 days", &tx)?;
    assert_eq!(session.draft.duration.as_deref(), Some("3 days"));
    assert_eq!(
        session.turns.last().unwrap().text,
        UiStrings::interests_prompt(Locale::English)
    );
    assert!(!session.busy);

    assert!(rx.try_recv().is_err());
    return Ok(());
}

#[test]
fn it_dispatches_one_job_after_the_third_slot() -> Result<()> {
    let (tx, mut rx) = channel();
    let mut session = Session::new(Locale::English);
    session.select_intent(Intent::Itinerary);

    session.submit("Netarhat", &tx)?;
    session.submit("3 days", &tx)?;
    session.submit("waterfalls", &tx)?;

    assert_eq!(session.draft.phase(), ItineraryPhase::Generating);
    assert!(session.busy);
    assert_eq!(
        session.turns.last().unwrap().text,
        UiStrings::generating(Locale::English)
    );

    let job = recv_job(&mut rx)?;
    assert_eq!(job.kind, JobKind::Itinerary);
    assert_eq!(
        job.text,
        "Destination: Netarhat, Duration: 3 days, Interests: waterfalls"
    );
    assert!(!job.translate_input);
    assert!(rx.try_recv().is_err());

    return Ok(());
}

#[test]
fn it_completes_the_itinerary_flow_on_success() -> Result<()> {
    let (tx, mut rx) = channel();
    let mut session = Session::new(Locale::English);
    session.select_intent(Intent::Itinerary);

    session.submit("Netarhat", &tx)?;
    session.submit("3 days", &tx)?;
    session.submit("waterfalls", &tx)?;
    let job = recv_job(&mut rx)?;

    session.handle_reply(SessionReply {
        epoch: job.epoch,
        kind: job.kind,
        result: Ok(BackendReply {
            text: itinerary_reply_fixture().to_string(),
            sources: vec![],
        }),
    });

    assert_eq!(session.draft.phase(), ItineraryPhase::Done);
    assert!(!session.busy);
    let last = session.turns.last().unwrap();
    assert_eq!(last.author, Author::Model);
    assert!(last.text.contains("Day 1"));

    return Ok(());
}

#[test]
fn it_leaves_the_draft_generating_on_failure() -> Result<()> {
    let (tx, mut rx) = channel();
    let mut session = Session::new(Locale::English);
    session.select_intent(Intent::Itinerary);

    session.submit("Netarhat", &tx)?;
    session.submit("3 days", &tx)?;
    session.submit("waterfalls", &tx)?;
    let job = recv_job(&mut rx)?;
    let turns_before = session.turns.len();

    session.handle_reply(SessionReply {
        epoch: job.epoch,
        kind: job.kind,
        result: Err(anyhow!("network error")),
    });

    assert_eq!(session.draft.phase(), ItineraryPhase::Generating);
    assert!(!session.busy);
    assert_eq!(session.turns.len(), turns_before + 1);
    let last = session.turns.last().unwrap();
    assert_eq!(last.kind(), TurnKind::Error);
    assert!(last.text.starts_with(UiStrings::ERROR_PREFIX));
    assert!(last.text.contains("network error"));

    return Ok(());
}

#[test]
fn it_dispatches_free_text_under_the_fallback_intent() -> Result<()> {
    let (tx, mut rx) = channel();
    let mut session = Session::new(Locale::English);

    session.submit("how do I say hello", &tx)?;

    assert!(session.busy);
    let job = recv_job(&mut rx)?;
    assert_eq!(job.kind, JobKind::FreeText);
    assert_eq!(job.intent, Intent::Language);
    assert_eq!(job.text, "how do I say hello");
    assert!(!job.translate_input);

    return Ok(());
}

#[test]
fn it_requests_translation_for_non_english_locales() -> Result<()> {
    let (tx, mut rx) = channel();
    let mut session = Session::new(Locale::Hindi);
    session.select_intent(Intent::Location);

    session.submit("रांची के पास झरने", &tx)?;

    let job = recv_job(&mut rx)?;
    assert_eq!(job.locale, Locale::Hindi);
    assert!(job.translate_input);

    return Ok(());
}

#[test]
fn it_ignores_empty_utterances() -> Result<()> {
    let (tx, mut rx) = channel();
    let mut session = Session::new(Locale::English);

    session.submit("   ", &tx)?;

    assert_eq!(session.turns.len(), 1);
    assert!(!session.busy);
    assert!(rx.try_recv().is_err());

    return Ok(());
}

#[test]
fn it_rejects_submissions_while_busy() -> Result<()> {
    let (tx, mut rx) = channel();
    let mut session = Session::new(Locale::English);

    session.submit("first", &tx)?;
    assert!(session.busy);
    let turns_before = session.turns.len();

    session.submit("second", &tx)?;

    assert_eq!(session.turns.len(), turns_before);
    recv_job(&mut rx)?;
    assert!(rx.try_recv().is_err());

    return Ok(());
}

#[test]
fn it_resets_from_any_state() -> Result<()> {
    let (tx, mut rx) = channel();
    let mut session = Session::new(Locale::English);
    session.select_intent(Intent::Itinerary);
    session.submit("Netarhat", &tx)?;
    session.submit("3 days", &tx)?;
    session.submit("waterfalls", &tx)?;
    recv_job(&mut rx)?;
    assert!(session.busy);

    session.reset();

    assert_eq!(session.turns.len(), 1);
    assert_eq!(session.turns[0].text, UiStrings::greeting(Locale::English));
    assert_eq!(session.intent, None);
    assert!(!session.busy);
    assert_eq!(session.draft.phase(), ItineraryPhase::Inactive);

    return Ok(());
}

#[test]
fn it_discards_replies_from_a_previous_epoch() -> Result<()> {
    let (tx, mut rx) = channel();
    let mut session = Session::new(Locale::English);

    session.submit("tell me about dassam", &tx)?;
    let job = recv_job(&mut rx)?;
    session.reset();

    session.handle_reply(SessionReply {
        epoch: job.epoch,
        kind: job.kind,
        result: Ok(BackendReply {
            text: "too late".to_string(),
            sources: vec![],
        }),
    });

    assert_eq!(session.turns.len(), 1);
    assert!(!session.busy);

    return Ok(());
}

#[test]
fn it_discards_stale_replies_after_intent_changes() -> Result<()> {
    let (tx, mut rx) = channel();
    let mut session = Session::new(Locale::English);
    session.select_intent(Intent::Location);

    session.submit("places near ranchi", &tx)?;
    let job = recv_job(&mut rx)?;
    session.select_intent(Intent::Souvenir);
    let turns_before = session.turns.len();

    session.handle_reply(SessionReply {
        epoch: job.epoch,
        kind: job.kind,
        result: Err(anyhow!("timed out")),
    });

    assert_eq!(session.turns.len(), turns_before);

    return Ok(());
}

#[test]
fn it_attaches_sources_to_the_reply_turn() -> Result<()> {
    let (tx, mut rx) = channel();
    let mut session = Session::new(Locale::English);

    session.submit("dassam falls", &tx)?;
    recv_job(&mut rx)?;

    session.handle_reply(SessionReply {
        epoch: session.epoch(),
        kind: JobKind::FreeText,
        result: Ok(BackendReply {
            text: "Dassam Falls is south of Ranchi.".to_string(),
            sources: vec![SourceRef {
                uri: "https://tourism.jharkhand.gov.in/dassam".to_string(),
                title: "Dassam Falls".to_string(),
            }],
        }),
    });

    let last = session.turns.last().unwrap();
    assert_eq!(last.sources.len(), 1);
    assert_eq!(last.sources[0].title, "Dassam Falls");

    return Ok(());
}

#[test]
fn it_does_not_advance_the_draft_for_free_text_replies() -> Result<()> {
    let (tx, mut rx) = channel();
    let mut session = Session::new(Locale::English);
    session.select_intent(Intent::Itinerary);
    session.submit("Netarhat", &tx)?;
    session.submit("3 days", &tx)?;
    session.submit("waterfalls", &tx)?;
    let job = recv_job(&mut rx)?;

    // The final call failed; the user keeps chatting while the draft is
    // stuck in Generating.
    session.handle_reply(SessionReply {
        epoch: job.epoch,
        kind: job.kind,
        result: Err(anyhow!("network error")),
    });
    session.submit("is it still raining there", &tx)?;
    let followup = recv_job(&mut rx)?;
    assert_eq!(followup.kind, JobKind::FreeText);

    session.handle_reply(success(&session, JobKind::FreeText, "Yes, monsoon season."));

    assert_eq!(session.draft.phase(), ItineraryPhase::Generating);

    return Ok(());
}

#[test]
fn it_restarts_in_the_new_locale() {
    let mut session = Session::new(Locale::English);
    session.select_intent(Intent::Souvenir);
    session.set_locale(Locale::Tamil);

    assert_eq!(session.turns.len(), 1);
    assert_eq!(session.turns[0].text, UiStrings::greeting(Locale::Tamil));
    assert_eq!(session.intent, None);
}
