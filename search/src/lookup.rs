//! The lookup collaborator the engine is configured with.

use async_trait::async_trait;
use std::marker::PhantomData;
use typeahead_core::LookupError;
use typeahead_core::types::{Query, Suggestion};

/// Resolves a query to an ordered list of suggestions.
///
/// Expected failures are returned as `Err`, never panicked. The engine imposes
/// no timeout of its own.
#[async_trait]
pub trait Lookup: Send + Sync + 'static {
    type Item: Suggestion;

    async fn lookup(&self, query: &Query) -> Result<Vec<Self::Item>, LookupError>;
}

/// Adapts a synchronous closure into a [`Lookup`].
pub struct FnLookup<F, T> {
    f: F,
    _item: PhantomData<fn() -> T>,
}

impl<F, T> FnLookup<F, T>
where
    F: Fn(&Query) -> Result<Vec<T>, LookupError> + Send + Sync + 'static,
    T: Suggestion,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            _item: PhantomData,
        }
    }
}

#[async_trait]
impl<F, T> Lookup for FnLookup<F, T>
where
    F: Fn(&Query) -> Result<Vec<T>, LookupError> + Send + Sync + 'static,
    T: Suggestion,
{
    type Item = T;

    async fn lookup(&self, query: &Query) -> Result<Vec<T>, LookupError> {
        (self.f)(query)
    }
}
