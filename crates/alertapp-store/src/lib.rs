//! Append-only alert storage for alertapp.
//!
//! `alertapp-store` holds the alert data model and the storage capability the
//! HTTP layer is written against.
//!
//! # Features
//!
//! - **Alerts**: Records with a server-assigned identity and timestamp
//! - **Paged retrieval**: Deterministic windows over insertion order
//! - **Pluggable backends**: The [`AlertStore`] trait hides the storage
//! - **Demo data**: [`DemoSeeder`] fills a store for local development
//!
//! # Example
//!
//! ```rust
//! use alertapp_store::{Alert, AlertStore, InMemoryAlertStore};
//!
//! let store = InMemoryAlertStore::new();
//!
//! store.store(Alert::new("Proximity sensor activated"));
//! store.store(Alert::new("Detected noise"));
//!
//! // First page of size one
//! let page = store.retrieve(0, 1);
//! assert_eq!(page.len(), 1);
//! assert_eq!(page[0].info, "Proximity sensor activated");
//!
//! // Pages past the end are empty, never an error
//! assert!(store.retrieve(10, 20).is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod seed;
pub mod store;
pub mod types;

// Re-export main types at crate root
pub use seed::DemoSeeder;
pub use store::{AlertStore, InMemoryAlertStore};
pub use types::{Alert, AlertId, NewAlert};
