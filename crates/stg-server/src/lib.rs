//! # stg-server
//!
//! Read-only JSON query API over the content index:
//!
//! - `GET /api/files`: every project with its ordered stages
//! - `GET /api/file/<encoded path>`: one stage summary
//! - `GET /api/content?path=<path>`: raw document text
//!
//! Requests are served synchronously; listings and lookups rescan the tree.

pub mod error;
pub mod routes;
pub mod server;

pub use error::ServerError;
pub use routes::{ApiResponse, route};
pub use server::IndexServer;

use stg_config::StagecraftConfig;
use stg_scan::ContentScanner;

/// Bind the configured address and serve forever.
///
/// # Errors
///
/// Returns [`ServerError`] if binding or accepting fails.
pub fn serve(config: &StagecraftConfig) -> Result<(), ServerError> {
    let addr = config.server.bind_addr();
    let server = IndexServer::bind(&addr, ContentScanner::from_config(config))?;
    tracing::info!(
        root = %config.content.root.display(),
        addr = %addr,
        "starting index server"
    );
    server.run()
}
