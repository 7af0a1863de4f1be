//! Ticket id generation.
//!
//! Id generation is a capability handed to the issuer rather than baked
//! into the ticket, so tests can use predictable ids.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

/// Source of ticket ids.
pub trait IdGenerator: Send + Sync {
    /// Produce the id for a ticket issued at `issued_at`.
    fn next_id(&self, issued_at: DateTime<Utc>) -> String;
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&self, issued_at: DateTime<Utc>) -> String {
        (**self).next_id(issued_at)
    }
}

/// Ids of the form `MET-TKT-YYYYMMDD-HHMMSS-NNNNNN`.
///
/// The suffix is a per-process counter, so two tickets issued within the
/// same second still get distinct ids.
#[derive(Debug, Default)]
pub struct TimestampIdGenerator {
    counter: AtomicU64,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&self, issued_at: DateTime<Utc>) -> String {
        let seq = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("MET-TKT-{}-{:06}", issued_at.format("%Y%m%d-%H%M%S"), seq)
    }
}

/// Ids of the form `<prefix>-<n>`, counting from 1. Ignores the timestamp.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self, _issued_at: DateTime<Utc>) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}
