//! Alert storage.
//!
//! This module provides the [`AlertStore`] capability the HTTP layer is
//! written against, and [`InMemoryAlertStore`], the process-lifetime backend.
//!
//! Alerts are kept in arrival order. Retrieval works on fixed-size pages:
//! page `p` of size `s` is the window `[p * s, min(p * s + s, len))`, and a
//! window that starts at or past the end is simply empty.

use parking_lot::RwLock;
use tracing::debug;

use crate::types::Alert;

/// Storage capability for alerts.
///
/// Implementations must preserve insertion order and must be safe to share
/// between concurrently running request handlers.
pub trait AlertStore: Send + Sync + std::fmt::Debug {
    /// Returns page `page` of at most `size` alerts, in insertion order.
    ///
    /// Pages past the end yield an empty vector. A `size` of zero always
    /// yields an empty vector.
    fn retrieve(&self, page: usize, size: usize) -> Vec<Alert>;

    /// Appends an alert and returns the stored copy.
    ///
    /// The caller assigns identity before storing.
    fn store(&self, alert: Alert) -> Alert;

    /// Returns the number of stored alerts.
    fn len(&self) -> usize;

    /// Returns true if no alerts are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Computes the `[start, end)` window for a page, or `None` if it is empty.
fn page_window(page: usize, size: usize, len: usize) -> Option<(usize, usize)> {
    let offset = page.saturating_mul(size);
    if size == 0 || offset >= len {
        return None;
    }
    Some((offset, offset.saturating_add(size).min(len)))
}

/// An [`AlertStore`] backed by a vector guarded by a read-write lock.
///
/// Appends take the write lock and page reads take the read lock, so a read
/// never observes a partially applied append.
#[derive(Debug, Default)]
pub struct InMemoryAlertStore {
    alerts: RwLock<Vec<Alert>>,
}

impl InMemoryAlertStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with `alerts`, kept in the given order.
    #[must_use]
    pub fn with_alerts(alerts: Vec<Alert>) -> Self {
        Self {
            alerts: RwLock::new(alerts),
        }
    }

    /// Returns a copy of every stored alert.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Alert> {
        self.alerts.read().clone()
    }
}

impl AlertStore for InMemoryAlertStore {
    fn retrieve(&self, page: usize, size: usize) -> Vec<Alert> {
        let alerts = self.alerts.read();
        match page_window(page, size, alerts.len()) {
            Some((start, end)) => alerts[start..end].to_vec(),
            None => Vec::new(),
        }
    }

    fn store(&self, alert: Alert) -> Alert {
        let mut alerts = self.alerts.write();
        alerts.push(alert.clone());
        debug!(alert_id = %alert.id, total = alerts.len(), "stored alert");
        alert
    }

    fn len(&self) -> usize {
        self.alerts.read().len()
    }
}
