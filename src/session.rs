//! Session state for the console.
//!
//! One owner, no globals. The view keeps a [`Session`] in a signal; every
//! transition goes through the methods here so the busy flag can never be
//! observed out of step with the result.

use crate::diagnosis::{AnalysisResult, HistoryEntry, HistoryUnavailable, SubmitOutcome};

/// Coarse lifecycle phase, derived from the busy flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    draft: String,
    result: Option<AnalysisResult>,
    history: Vec<HistoryEntry>,
    busy: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn phase(&self) -> Phase {
        if self.busy {
            Phase::Submitting
        } else {
            Phase::Idle
        }
    }

    /// Whether the analyze control should be enabled.
    pub fn can_analyze(&self) -> bool {
        !self.busy && !self.draft.is_empty()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Clear the draft. Refused while a submission is in flight.
    pub fn clear_draft(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.draft.clear();
        true
    }

    /// Idle -> Submitting.
    ///
    /// Returns the text to send, or `None` if the draft is empty or a
    /// submission is already running. The draft itself is left in place.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_analyze() {
            return None;
        }
        self.busy = true;
        Some(self.draft.clone())
    }

    /// Submitting -> Idle.
    ///
    /// Writes the result and clears busy in one step. Returns `true` when
    /// the caller should refresh history. A stray resolution arriving while
    /// idle is ignored.
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) -> bool {
        if !self.busy {
            return false;
        }
        let refresh = outcome.refreshes_history();
        self.result = Some(outcome.into_result());
        self.busy = false;
        refresh
    }

    /// Replace the history snapshot. A failed fetch keeps the old one.
    pub fn apply_history(&mut self, fetched: Result<Vec<HistoryEntry>, HistoryUnavailable>) {
        if let Ok(entries) = fetched {
            self.history = entries;
        }
    }
}
