//! Latest-request-wins bookkeeping for deferred search passes.
//!
//! Every query change issues a [`SearchTicket`] with a strictly increasing sequence number. A
//! filter pass computed for a ticket may only be shown if no newer ticket has been issued since;
//! anything else is stale and discarded. There is no cancellation signal: stale passes simply
//! lose.

#[derive(Debug, Clone, PartialEq, Eq)]
/// Handle for one requested filter pass.
pub struct SearchTicket {
    seq: u64,
    query: String,
}

impl SearchTicket {
    /// Sequence number assigned at issue time.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Query the pass should filter with.
    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Debug, Clone, Default)]
/// Issues tickets and decides which completed passes may be applied.
pub struct SearchScheduler {
    issued: u64,
    applied: u64,
}

impl SearchScheduler {
    /// Issues a ticket for `query`, superseding every earlier ticket.
    pub fn issue(&mut self, query: impl Into<String>) -> SearchTicket {
        self.issued += 1;
        SearchTicket {
            seq: self.issued,
            query: query.into(),
        }
    }

    /// Returns `true` when `ticket` is the newest ticket issued.
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.seq == self.issued
    }

    /// Marks the pass for `ticket` as applied when it is still current.
    ///
    /// Returns `false` for stale tickets; their results must be dropped.
    pub fn accept(&mut self, ticket: &SearchTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.applied = ticket.seq;
        true
    }

    /// Returns `true` while the newest ticket's results have not been applied yet.
    pub fn is_pending(&self) -> bool {
        self.applied != self.issued
    }

    /// Wraps `items` computed for `ticket` when the ticket is still current.
    pub fn complete<T>(
        &mut self,
        ticket: SearchTicket,
        items: Vec<T>,
    ) -> Option<DeferredResults<T>> {
        if !self.accept(&ticket) {
            return None;
        }
        Some(DeferredResults {
            query: ticket.query,
            items,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Displayed result set together with the query it was computed from.
pub struct DeferredResults<T> {
    query: String,
    items: Vec<T>,
}

impl<T> Default for DeferredResults<T> {
    fn default() -> Self {
        Self {
            query: String::new(),
            items: Vec::new(),
        }
    }
}

impl<T> DeferredResults<T> {
    /// Result set for `query`, computed synchronously.
    pub fn new(query: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            query: query.into(),
            items,
        }
    }

    /// Query the items were filtered with.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Items in display order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items shown.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` when the live query has moved on from the displayed one.
    pub fn lags(&self, live_query: &str) -> bool {
        self.query != live_query
    }
}
