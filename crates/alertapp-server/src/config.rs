//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::render::RenderFormat;

/// Default number of alerts per page when the request gives no `size`.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Default maximum accepted request body: 64KB.
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Configuration for the alert server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind the HTTP server to.
    pub bind_addr: SocketAddr,
    /// Page size used when a listing request omits `size`.
    pub default_page_size: usize,
    /// How alert listings are rendered.
    pub format: RenderFormat,
    /// Directory served under `/static`, if any.
    pub static_dir: Option<PathBuf>,
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
    /// Pre-populate the store with demo alerts at startup.
    pub demo: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            default_page_size: DEFAULT_PAGE_SIZE,
            format: RenderFormat::default(),
            static_dir: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            demo: false,
        }
    }
}

impl ServerConfig {
    /// Create a new configuration with the specified bind address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            ..Self::default()
        }
    }

    /// Set the default page size.
    #[must_use]
    pub const fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    /// Set the listing format.
    #[must_use]
    pub const fn with_format(mut self, format: RenderFormat) -> Self {
        self.format = format;
        self
    }

    /// Serve files from `dir` under `/static`.
    #[must_use]
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Set the maximum request body size.
    #[must_use]
    pub const fn with_max_body_bytes(mut self, max: usize) -> Self {
        self.max_body_bytes = max;
        self
    }

    /// Enable demo data at startup.
    #[must_use]
    pub const fn with_demo(mut self, enabled: bool) -> Self {
        self.demo = enabled;
        self
    }
}
