//! # alertapp-server
//!
//! HTTP service for logging alerts and listing them page by page, built on
//! the axum HTTP framework.
//!
//! ## Example
//!
//! ```rust,no_run
//! use alertapp_server::{AlertServer, ServerConfig};
//! use alertapp_store::InMemoryAlertStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::default();
//!     let store = Arc::new(InMemoryAlertStore::new());
//!
//!     let server = AlertServer::new(config, store);
//!     // server.serve("0.0.0.0:8080".parse().unwrap()).await.unwrap();
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/?page=<n>&size=<n>` | GET | List a page of alerts, count in `X-Alertapp-Count` |
//! | `/` | POST | Store an alert from a JSON body `{"info": "..."}` |
//! | `/static/*` | GET | Static files, when a directory is configured |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;

// Re-export main types
pub use cli::Args;
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handlers::ALERT_COUNT_HEADER;
pub use render::RenderFormat;
pub use server::AlertServer;
pub use state::AppState;
