#[cfg(test)]
#[path = "itinerary_test.rs"]
mod tests;

/// Lifecycle of the scripted itinerary flow. Advances only forwards:
/// Collecting -> Generating -> Done. A reset or intent change is the only way
/// back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ItineraryPhase {
    #[default]
    Inactive,
    Collecting,
    Generating,
    Done,
}

/// What the controller should do after a slot was filled.
#[derive(Debug, PartialEq, Eq)]
pub enum SlotPrompt {
    AskDuration,
    AskInterests,
    Ready,
}

/// The slot-filling record for a trip request. Slots are gathered one per
/// turn, always in the order destination, duration, interests.
#[derive(Clone, Debug, Default)]
pub struct ItineraryDraft {
    pub destination: Option<String>,
    pub duration: Option<String>,
    pub interests: Option<String>,
    phase: ItineraryPhase,
}

impl ItineraryDraft {
    /// Starts a fresh collection round, dropping anything gathered before.
    pub fn arm(&mut self) {
        *self = ItineraryDraft::default();
        self.phase = ItineraryPhase::Collecting;
    }

    pub fn clear(&mut self) {
        *self = ItineraryDraft::default();
    }

    pub fn phase(&self) -> ItineraryPhase {
        return self.phase;
    }

    pub fn is_collecting(&self) -> bool {
        return self.phase == ItineraryPhase::Collecting;
    }

    pub fn is_generating(&self) -> bool {
        return self.phase == ItineraryPhase::Generating;
    }

    /// Fills the next empty slot and reports which canned follow-up to ask.
    /// Filling the last slot flips the phase to Generating.
    pub fn fill_next(&mut self, text: &str) -> SlotPrompt {
        if self.destination.is_none() {
            self.destination = Some(text.to_string());
            return SlotPrompt::AskDuration;
        }

        if self.duration.is_none() {
            self.duration = Some(text.to_string());
            return SlotPrompt::AskInterests;
        }

        self.interests = Some(text.to_string());
        self.phase = ItineraryPhase::Generating;
        return SlotPrompt::Ready;
    }

    pub fn mark_done(&mut self) {
        if self.phase == ItineraryPhase::Generating {
            self.phase = ItineraryPhase::Done;
        }
    }

    /// The generation prompt once all three slots are present.
    pub fn composed_prompt(&self) -> String {
        return format!(
            "Destination: {}, Duration: {}, Interests: {}",
            self.destination.as_deref().unwrap_or_default(),
            self.duration.as_deref().unwrap_or_default(),
            self.interests.as_deref().unwrap_or_default()
        );
    }
}
