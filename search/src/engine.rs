//! Debounced suggestion engine.

use crate::lookup::Lookup;
use crate::state::{Commit, Phase, SearchState};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use typeahead_core::error::EngineError;
use typeahead_core::types::{Query, Suggestion, SuggestConfig};

/// Change callback, invoked after every state transition.
pub type Notify = Arc<dyn Fn() + Send + Sync>;

struct Shared<T> {
    state: Mutex<SearchState<T>>,
    notify: Notify,
}

impl<T> Shared<T> {
    fn notify(&self) {
        (self.notify)();
    }
}

/// One search box: query, debounce timer, and the latest committed results.
///
/// Runs on the tokio runtime it was created on. The debounce timer is a
/// spawned sleep task owned exclusively by the engine; it is aborted on every
/// query change, on selection, on submit, and on dispose. A fired lookup runs
/// in its own task and is superseded only through the request id guard.
pub struct SuggestEngine<L: Lookup> {
    shared: Arc<Shared<L::Item>>,
    lookup: Arc<L>,
    config: SuggestConfig,
    runtime: Handle,
    timer: Option<JoinHandle<()>>,
}

/// Create operations.
impl<L: Lookup> SuggestEngine<L> {
    /// Creates an engine bound to the current tokio runtime.
    ///
    /// The `notify` callback is invoked whenever the state changes, including
    /// from background tasks. This is typically used to trigger a UI repaint.
    pub fn new(lookup: L, config: SuggestConfig, notify: Notify) -> Result<Self, EngineError> {
        let runtime =
            Handle::try_current().map_err(|err| EngineError::NoRuntime(err.to_string()))?;

        Ok(Self {
            shared: Arc::new(Shared {
                state: Mutex::new(SearchState::default()),
                notify,
            }),
            lookup: Arc::new(lookup),
            config,
            runtime,
            timer: None,
        })
    }
}

/// Input operations.
impl<L: Lookup> SuggestEngine<L> {
    /// Records a keystroke and restarts the debounce window.
    ///
    /// `current_query` and `is_open` update before this returns. A blank query
    /// clears suggestions immediately without arming a timer.
    pub fn on_query_change(&mut self, query: impl Into<Query>) {
        let query = query.into();
        self.cancel_timer();

        let arm = self.shared.state.lock().set_query(query.clone());
        self.shared.notify();

        if !arm {
            debug!("no lookup scheduled");
            return;
        }

        let delay = self.config.debounce;
        let limit = self.config.result_limit;
        let shared = Arc::clone(&self.shared);
        let lookup = Arc::clone(&self.lookup);
        let runtime = self.runtime.clone();

        debug!(query = %query, delay_ms = delay.as_millis() as u64, "debounce armed");
        self.timer = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            start_lookup(&shared, &lookup, &runtime, query, limit);
        }));
    }

    /// Looks up the current query now, skipping the debounce window.
    pub fn submit(&mut self) {
        self.cancel_timer();
        let query = self.shared.state.lock().current_query.clone();
        start_lookup(
            &self.shared,
            &self.lookup,
            &self.runtime,
            query,
            self.config.result_limit,
        );
    }

    /// Selects `item`: closes the dropdown, clears suggestions, and drops any
    /// pending or in-flight lookup.
    pub fn choose_suggestion(&mut self, item: L::Item) {
        self.cancel_timer();
        debug!(key = item.key(), "suggestion chosen");
        self.shared
            .state
            .lock()
            .choose(item, self.config.fill_query_on_choose);
        self.shared.notify();
    }

    /// Chooses the suggestion at `index`. Out of range, or after dispose, is a
    /// no-op.
    pub fn choose_index(&mut self, index: usize) -> Option<L::Item> {
        let item = {
            let state = self.shared.state.lock();
            if state.is_disposed() {
                return None;
            }
            state.suggestions.get(index).cloned()?
        };
        self.choose_suggestion(item.clone());
        Some(item)
    }

    /// Hides the dropdown, keeping suggestions for [`reopen`](Self::reopen).
    pub fn dismiss(&self) {
        self.shared.state.lock().dismiss();
        self.shared.notify();
    }

    /// Shows the dropdown again over cached suggestions. Never looks up.
    pub fn reopen(&self) {
        self.shared.state.lock().reopen();
        self.shared.notify();
    }

    /// Clears the pending timer and invalidates in-flight lookups. No state
    /// changes happen after this returns.
    pub fn dispose(&mut self) {
        self.cancel_timer();
        let mut state = self.shared.state.lock();
        if !state.is_disposed() {
            state.dispose();
            debug!("engine disposed");
        }
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

/// Read operations.
impl<L: Lookup> SuggestEngine<L> {
    pub fn state(&self) -> SearchState<L::Item> {
        self.shared.state.lock().clone()
    }

    pub fn phase(&self) -> Phase {
        self.shared.state.lock().phase()
    }

    pub fn query(&self) -> Query {
        self.shared.state.lock().current_query.clone()
    }

    pub fn suggestions(&self) -> Vec<L::Item> {
        self.shared.state.lock().suggestions.clone()
    }

    pub fn selected(&self) -> Option<L::Item> {
        self.shared.state.lock().selected.clone()
    }

    pub fn is_open(&self) -> bool {
        self.shared.state.lock().is_open
    }

    pub fn is_loading(&self) -> bool {
        self.shared.state.lock().is_loading
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }
}

impl<L: Lookup> Drop for SuggestEngine<L> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Assigns a request id and spawns the lookup. The id is taken synchronously,
/// so issuance order is the order of calls.
fn start_lookup<L: Lookup>(
    shared: &Arc<Shared<L::Item>>,
    lookup: &Arc<L>,
    runtime: &Handle,
    query: Query,
    limit: usize,
) {
    let request = shared.state.lock().begin(query);
    shared.notify();

    let Some(request) = request else {
        return;
    };
    debug!(query = %request.query, id = %request.issued_at, "lookup issued");

    let shared = Arc::clone(shared);
    let lookup = Arc::clone(lookup);
    runtime.spawn(async move {
        let result = lookup.lookup(&request.query).await;
        if let Err(err) = &result {
            warn!(query = %request.query, id = %request.issued_at, "lookup failed: {err}");
        }

        let outcome = shared.state.lock().commit(request.issued_at, result, limit);
        match outcome {
            Commit::Applied => shared.notify(),
            Commit::Stale => {
                debug!(query = %request.query, id = %request.issued_at, "stale result discarded");
            }
        }
    });
}
