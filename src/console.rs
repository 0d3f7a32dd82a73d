//! Orchestration between the session and the diagnosis service.
//!
//! Each function is one user-visible flow. They only touch the session
//! through [`SessionStore`], so the same code drives a Leptos signal in the
//! app and a plain `RefCell` in tests.

use std::cell::RefCell;

use leptos::logging;
use leptos::prelude::*;

use crate::diagnosis::{AnalysisResult, DiagnosisService, HistoryEntry};
use crate::session::Session;

/// Somewhere a [`Session`] lives.
///
/// Returns `None` if the session is gone (e.g. the owning view was disposed
/// while a request was in flight).
pub trait SessionStore {
    fn update_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R>;
}

impl SessionStore for RefCell<Session> {
    fn update_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl SessionStore for RwSignal<Session> {
    fn update_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Shared handle to the console session, provided at the app root.
#[derive(Clone, Copy)]
pub struct ConsoleContext {
    pub session: RwSignal<Session>,
}

impl ConsoleContext {
    /// History that only notifies when the list changes, not on draft edits.
    pub fn history(&self) -> Memo<Vec<HistoryEntry>> {
        let session = self.session;
        Memo::new(move |_| session.with(|s| s.history().to_vec()))
    }

    pub fn result(&self) -> Memo<Option<AnalysisResult>> {
        let session = self.session;
        Memo::new(move |_| session.with(|s| s.result().cloned()))
    }
}

/// What a call to [`analyze`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeOutcome {
    /// Guard failed: empty draft or a submission already in flight.
    Skipped,
    Diagnosed,
    Fallback,
}

/// Fetch history and swap it in. Failures leave the old snapshot.
pub async fn load_history<St, Sv>(store: &St, service: &Sv)
where
    St: SessionStore,
    Sv: DiagnosisService,
{
    let fetched = service.fetch_history().await;
    if let Err(e) = &fetched {
        logging::warn!("Keeping previous history: {}", e);
    }
    store.update_session(|s| s.apply_history(fetched));
}

/// Run one analysis for the current draft.
///
/// The result write and busy clear happen in a single session update. A
/// successful diagnosis is followed by a history refresh whose failure is
/// swallowed.
pub async fn analyze<St, Sv>(store: &St, service: &Sv) -> AnalyzeOutcome
where
    St: SessionStore,
    Sv: DiagnosisService,
{
    let Some(log_text) = store.update_session(Session::begin_submit).flatten() else {
        return AnalyzeOutcome::Skipped;
    };

    let outcome = service.submit(&log_text).await;
    let diagnosed = outcome.refreshes_history();
    let refresh = store
        .update_session(|s| s.finish_submit(outcome))
        .unwrap_or(false);

    if refresh {
        load_history(store, service).await;
    }

    if diagnosed {
        AnalyzeOutcome::Diagnosed
    } else {
        AnalyzeOutcome::Fallback
    }
}
