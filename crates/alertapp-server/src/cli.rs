//! Command-line argument parsing with clap.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_MAX_BODY_BYTES, DEFAULT_PAGE_SIZE, ServerConfig};
use crate::render::RenderFormat;

/// Alertapp - log alerts over HTTP and list them page by page.
#[derive(Parser, Debug, Clone)]
#[command(name = "alertapp")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address to listen on.
    #[arg(short, long, env = "ALERTAPP_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Use in-memory demo data.
    #[arg(long, env = "ALERTAPP_DEMO")]
    pub demo: bool,

    /// Page size used when a request does not give one.
    #[arg(long, env = "ALERTAPP_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Listing format.
    #[arg(short, long, env = "ALERTAPP_FORMAT", value_enum, default_value_t = RenderFormat::Text)]
    pub format: RenderFormat,

    /// Directory to serve under /static.
    #[arg(long, env = "ALERTAPP_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Maximum accepted request body in bytes.
    #[arg(long, env = "ALERTAPP_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,
}

impl Args {
    /// Build the server configuration from parsed arguments.
    #[must_use]
    pub fn into_config(self) -> ServerConfig {
        let config = ServerConfig::new(self.bind)
            .with_default_page_size(self.page_size)
            .with_format(self.format)
            .with_max_body_bytes(self.max_body_bytes)
            .with_demo(self.demo);

        match self.static_dir {
            Some(dir) => config.with_static_dir(dir),
            None => config,
        }
    }
}
