//! Synthetic demo data for local development.

use std::ops::Range;

use rand::Rng;
use tracing::info;

use crate::store::AlertStore;
use crate::types::Alert;

/// Default range for the number of demo alerts to generate.
pub const DEFAULT_DEMO_ALERTS: Range<usize> = 10..30;

/// Fills a store with generated alerts.
///
/// Each alert gets a fresh identity, the current time and the text
/// `"Mighty demo alert number <n>"`, numbered from zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSeeder {
    count: Range<usize>,
}

impl Default for DemoSeeder {
    fn default() -> Self {
        Self {
            count: DEFAULT_DEMO_ALERTS,
        }
    }
}

impl DemoSeeder {
    /// Creates a seeder that generates a random number of alerts in the
    /// default range.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a seeder that always generates exactly `count` alerts.
    #[must_use]
    pub fn with_count(count: usize) -> Self {
        Self {
            count: count..count.saturating_add(1),
        }
    }

    /// Creates a seeder that generates a random number of alerts in `range`.
    ///
    /// An empty range generates nothing.
    #[must_use]
    pub fn with_range(range: Range<usize>) -> Self {
        Self { count: range }
    }

    /// Seeds `store` using the thread-local random generator.
    ///
    /// Returns the number of alerts stored.
    pub fn seed(&self, store: &dyn AlertStore) -> usize {
        self.seed_with_rng(store, &mut rand::thread_rng())
    }

    /// Seeds `store` drawing the alert count from `rng`.
    pub fn seed_with_rng<R: Rng>(&self, store: &dyn AlertStore, rng: &mut R) -> usize {
        let count = if self.count.is_empty() {
            0
        } else {
            rng.gen_range(self.count.clone())
        };

        for idx in 0..count {
            store.store(Alert::new(format!("Mighty demo alert number {idx}")));
        }

        info!(count, total = store.len(), "seeded demo alerts");
        count
    }
}
