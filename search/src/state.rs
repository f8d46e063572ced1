//! Observable search state and its transitions.

use typeahead_core::LookupError;
use typeahead_core::types::{Query, RequestId, Suggestion, SuggestionRequest};

/// Where the search box is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Blank query, no suggestions.
    Idle,
    /// Debounce timer armed; previous suggestions still shown.
    Pending,
    /// Lookup in flight.
    Loading,
    /// Suggestions populated, possibly empty.
    Resolved,
    /// Dropdown hidden by dismiss or selection.
    Closed,
}

/// Outcome of a resolved lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Commit {
    Applied,
    Stale,
}

/// Snapshot of one search box.
#[derive(Debug, Clone)]
pub struct SearchState<T> {
    pub current_query: Query,
    pub suggestions: Vec<T>,
    pub is_loading: bool,
    pub is_open: bool,
    pub latest_request_id: RequestId,
    pub selected: Option<T>,
    /// Error of the latest request, cleared by the next request.
    pub last_error: Option<LookupError>,
    /// Debounce timer armed and not yet fired.
    pub pending: bool,
    /// Hidden by dismiss or selection until the next keystroke or reopen.
    pub closed: bool,
    pub(crate) disposed: bool,
}

impl<T> Default for SearchState<T> {
    fn default() -> Self {
        Self {
            current_query: Query::empty(),
            suggestions: Vec::new(),
            is_loading: false,
            is_open: false,
            latest_request_id: RequestId::ZERO,
            selected: None,
            last_error: None,
            pending: false,
            closed: false,
            disposed: false,
        }
    }
}

impl<T> SearchState<T> {
    pub fn phase(&self) -> Phase {
        if self.closed {
            Phase::Closed
        } else if self.current_query.is_blank() && self.suggestions.is_empty() && !self.pending {
            Phase::Idle
        } else if !self.is_open {
            Phase::Closed
        } else if self.pending {
            Phase::Pending
        } else if self.is_loading {
            Phase::Loading
        } else {
            Phase::Resolved
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn has_content(&self) -> bool {
        !self.current_query.is_blank() || !self.suggestions.is_empty()
    }

    /// Marks every in-flight request as stale.
    fn invalidate(&mut self) {
        self.latest_request_id = self.latest_request_id.next();
        self.is_loading = false;
    }

    /// Records a query change. Returns true if a debounce timer should be armed.
    ///
    /// A blank query clears suggestions immediately and invalidates in-flight
    /// requests.
    pub(crate) fn set_query(&mut self, query: Query) -> bool {
        if self.disposed {
            return false;
        }

        let blank = query.is_blank();
        self.current_query = query;
        self.last_error = None;
        self.closed = false;

        if blank {
            self.suggestions.clear();
            self.pending = false;
            self.invalidate();
        } else {
            self.pending = true;
        }
        self.is_open = self.has_content();

        !blank
    }

    /// Timer fired (or explicit submit): assigns the next request id.
    ///
    /// Returns `None` when no lookup should be issued. A timer that fired for
    /// a query already replaced by a newer keystroke leaves the state untouched.
    pub(crate) fn begin(&mut self, query: Query) -> Option<SuggestionRequest> {
        if self.disposed || query != self.current_query {
            return None;
        }
        self.pending = false;

        if query.is_blank() {
            self.suggestions.clear();
            self.is_loading = false;
            return None;
        }

        let issued_at = self.latest_request_id.next();
        self.latest_request_id = issued_at;
        self.is_loading = true;
        self.last_error = None;

        Some(SuggestionRequest { query, issued_at })
    }

    /// Commits a resolved lookup if it is still the latest request.
    pub(crate) fn commit(
        &mut self,
        issued_at: RequestId,
        result: Result<Vec<T>, LookupError>,
        limit: usize,
    ) -> Commit {
        if self.disposed || issued_at != self.latest_request_id {
            return Commit::Stale;
        }

        match result {
            Ok(mut items) => {
                items.truncate(limit);
                self.suggestions = items;
                self.last_error = None;
            }
            Err(err) => {
                self.suggestions.clear();
                self.last_error = Some(err);
            }
        }
        self.is_loading = false;

        Commit::Applied
    }

    pub(crate) fn dismiss(&mut self) {
        if self.disposed {
            return;
        }
        self.is_open = false;
        self.closed = true;
    }

    /// Reopens over cached suggestions.
    pub(crate) fn reopen(&mut self) {
        if !self.disposed {
            self.is_open = self.has_content();
            self.closed = !self.is_open && self.closed;
        }
    }

    pub(crate) fn dispose(&mut self) {
        self.disposed = true;
        self.pending = false;
        self.invalidate();
    }
}

impl<T: Suggestion> SearchState<T> {
    /// Selects `item`, closes the dropdown and drops pending work.
    pub(crate) fn choose(&mut self, item: T, fill_query: bool) {
        if self.disposed {
            return;
        }
        if fill_query {
            self.current_query = Query::from(item.primary_label());
        }
        self.selected = Some(item);
        self.suggestions.clear();
        self.pending = false;
        self.is_open = false;
        self.closed = true;
        self.invalidate();
    }
}
