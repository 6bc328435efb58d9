//! Bounded in-memory audit log
//!
//! Newest entries sit at the front of the ring. Once the ring holds
//! `capacity` entries every insert evicts the oldest one for good.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use tracing::trace;

use super::entry::{AuditContext, AuditEntry, EntryId};

/// Default number of entries retained by an [`AuditLog`]
pub const AUDIT_LOG_CAPACITY: usize = 50;

#[derive(Debug, Default)]
struct Ring {
    entries: VecDeque<AuditEntry>,
    last_timestamp: Option<DateTime<Utc>>,
}

/// Append-only, capped, newest-first audit log.
///
/// All methods take `&self`; one mutex guards the ring so each call is
/// atomic with respect to every other call on the same log.
#[derive(Debug)]
pub struct AuditLog {
    ring: Mutex<Ring>,
    capacity: usize,
    simulated_ip: Option<String>,
}

impl AuditLog {
    /// Create an empty log holding at most [`AUDIT_LOG_CAPACITY`] entries
    pub fn new() -> Self {
        Self::with_capacity(AUDIT_LOG_CAPACITY)
    }

    /// Create an empty log with a custom capacity (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            ring: Mutex::new(Ring {
                entries: VecDeque::with_capacity(capacity),
                last_timestamp: None,
            }),
            capacity,
            simulated_ip: None,
        }
    }

    /// Attach a simulated client address to every future entry
    pub fn with_simulated_ip(mut self, ip: impl Into<String>) -> Self {
        self.simulated_ip = Some(ip.into());
        self
    }

    /// Record an event at the head of the log and return the stored entry.
    pub fn record(
        &self,
        actor: impl Into<String>,
        action: impl Into<String>,
        description: impl Into<String>,
    ) -> AuditEntry {
        let mut ring = self.lock();

        // Wall clock may step backwards; entries never do.
        let now = Utc::now();
        let timestamp = match ring.last_timestamp {
            Some(last) if last > now => last,
            _ => now,
        };
        ring.last_timestamp = Some(timestamp);

        let entry = AuditEntry {
            id: EntryId::new(),
            timestamp,
            actor: actor.into(),
            action: action.into(),
            description: description.into(),
            context: AuditContext::generate(self.simulated_ip.clone()),
        };

        ring.entries.push_front(entry.clone());
        ring.entries.truncate(self.capacity);

        trace!(
            actor = %entry.actor,
            action = %entry.action,
            len = ring.entries.len(),
            "audit entry recorded"
        );
        entry
    }

    /// Up to `n` most recent entries, newest first
    pub fn recent(&self, n: usize) -> Vec<AuditEntry> {
        self.lock().entries.iter().take(n).cloned().collect()
    }

    /// Current number of entries
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Check if no entry has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Maximum number of retained entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn lock(&self) -> MutexGuard<'_, Ring> {
        // The ring is never left half-updated, so a poisoned guard is still usable.
        self.ring.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::new()
    }
}
