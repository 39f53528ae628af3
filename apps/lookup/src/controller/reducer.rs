//! Single state container for the lookup screen.
//!
//! Mutated only by the front end: `begin_search` when the user triggers a
//! search, `apply` when the backend reports a settlement.

use shared::domain::{ResultId, SearchResult};
use tracing::debug;

use crate::controller::events::UiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading { ticket: u64 },
}

#[derive(Debug)]
pub struct LookupScreen {
    phase: Phase,
    results: Vec<SearchResult>,
    error: Option<String>,
    selected: Option<ResultId>,
    next_ticket: u64,
}

impl Default for LookupScreen {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            results: Vec::new(),
            error: None,
            selected: None,
            next_ticket: 1,
        }
    }
}

impl LookupScreen {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase(), Phase::Loading { .. })
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Clears the previous results and enters Loading. Returns `None` while a
    /// search is already in flight; the trigger is disabled in that phase.
    pub fn begin_search(&mut self) -> Option<u64> {
        if self.is_loading() {
            return None;
        }
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.results.clear();
        self.error = None;
        self.selected = None;
        self.phase = Phase::Loading { ticket };
        Some(ticket)
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::SearchSettled { ticket, outcome } => {
                if self.phase != (Phase::Loading { ticket }) {
                    debug!(ticket, "ignoring stale search settlement");
                    return;
                }
                self.phase = Phase::Idle;
                match outcome {
                    Ok(results) => self.results = results,
                    Err(err) => self.error = Some(err.to_string()),
                }
            }
        }
    }

    /// Abandons the in-flight search, e.g. when the backend queue rejected it.
    pub fn fail_pending(&mut self, message: impl Into<String>) {
        if self.is_loading() {
            self.phase = Phase::Idle;
            self.error = Some(message.into());
        }
    }

    /// Opens the detail overlay for the 1-based row `row`.
    pub fn select(&mut self, row: usize) -> Option<&SearchResult> {
        let index = row.checked_sub(1)?;
        let result = self.results.get(index)?;
        self.selected = Some(result.id);
        Some(result)
    }

    pub fn selected(&self) -> Option<&SearchResult> {
        let id = self.selected?;
        self.results.iter().find(|result| result.id == id)
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }
}
