//! Query request builder
//!
//! Top-level assembly: cardinality policy, wait duration and the accumulated
//! predicate list. All three are independently settable in any order;
//! last write wins.

use chrono::Duration;
use tracing::debug;

use lookout_proto::query::{QueryRequest, WhereFilter, query_request};

use crate::filter::WhereFilterBuilder;

/// Wait duration applied when none is configured.
pub const DEFAULT_WAIT_MS: u64 = 30_000;

/// How many matching records the query should return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Take {
    /// Return the first match.
    #[default]
    First,
    /// Return exactly this many matches.
    Exact(u64),
    /// Return every match.
    All,
}

impl From<Take> for query_request::Take {
    fn from(take: Take) -> Self {
        match take {
            Take::First => query_request::Take::First(true),
            Take::Exact(n) => query_request::Take::Exact(n),
            Take::All => query_request::Take::All(true),
        }
    }
}

/// Assembles a [`QueryRequest`].
///
/// A fresh builder yields `{ take: first, wait: 30000ms, filters: [] }`.
/// [`build`](Self::build) snapshots the accumulated state without consuming
/// the builder, so repeated builds with no intervening mutation produce
/// structurally equal requests.
#[derive(Debug, Default)]
pub struct QueryRequestBuilder {
    take: Take,
    wait_ms: Option<u64>,
    filters: Vec<WhereFilter>,
}

impl QueryRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the first matching record (the default).
    pub fn take_first(&mut self) -> &mut Self {
        self.take = Take::First;
        self
    }

    /// Return exactly `n` matching records.
    pub fn take_exact(&mut self, n: u64) -> &mut Self {
        self.take = Take::Exact(n);
        self
    }

    /// Return every matching record.
    pub fn take_all(&mut self) -> &mut Self {
        self.take = Take::All;
        self
    }

    /// Set how long the query service may wait for matches.
    ///
    /// Negative durations clamp to zero; that is policy, not an error.
    pub fn wait(&mut self, duration: Duration) -> &mut Self {
        let ms = duration.num_milliseconds();
        if ms < 0 {
            debug!(requested_ms = ms, "negative wait duration clamped to zero");
        }
        self.wait_ms = Some(ms.max(0) as u64);
        self
    }

    /// Add predicates. May be called any number of times; each call's
    /// predicates accumulate onto the same flat, insertion-ordered list.
    pub fn where_filter(&mut self, configure: impl FnOnce(&mut WhereFilterBuilder)) -> &mut Self {
        configure(&mut WhereFilterBuilder::new(&mut self.filters));
        self
    }

    /// Number of predicates accumulated so far.
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Snapshot the accumulated state into a finished request.
    pub fn build(&self) -> QueryRequest {
        let wait_ms = self.wait_ms.unwrap_or(DEFAULT_WAIT_MS);
        debug!(
            take = ?self.take,
            wait_ms,
            filters = self.filters.len(),
            "built query request"
        );
        QueryRequest {
            take: Some(self.take.into()),
            wait_ms,
            filters: self.filters.clone(),
        }
    }
}
