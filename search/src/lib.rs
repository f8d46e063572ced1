//! Typeahead suggestion engine.
//!
//! Turns keystroke-driven query changes into a rate-limited, stale-safe
//! sequence of lookups and exposes the latest valid result set.
//!
//! # Design
//!
//! - Trailing-edge debounce: each query change aborts the pending timer task
//!   and arms a new one. Only the last change inside the window fires.
//! - Every fired lookup gets a monotonically increasing [`RequestId`]. A result
//!   is committed only if its id is still the latest, so late responses from
//!   superseded queries are dropped regardless of resolution order.
//! - Lookup failures degrade to an empty suggestion list. They are logged and
//!   kept in [`SearchState::last_error`], never returned to the caller.
//!
//! # Non-blocking API
//!
//! - `on_query_change()`: Records the query and arms the debounce timer
//! - `choose_suggestion()`, `dismiss()`, `reopen()`: Dropdown interactions
//! - `state()`: Snapshot to render; the `notify` callback signals changes
//!
//! [`RequestId`]: typeahead_core::types::RequestId

mod engine;
mod lookup;
mod pool;
mod remote;
mod state;

pub use engine::{Notify, SuggestEngine};
pub use lookup::{FnLookup, Lookup};
pub use pool::LocalPool;
pub use remote::RemoteLookup;
pub use state::{Phase, SearchState};
pub use typeahead_core::types::{CaseMatching, MatchMode, SuggestConfig};
