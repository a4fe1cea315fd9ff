//! Static file serving with single-page-application fallback.
//!
//! Requests that match a file under the asset root get that file. Anything
//! else gets the entry document so the front-end router can handle the path.
//! When the entry document is missing too, the response is 404.

use tower_http::services::{ServeDir, ServeFile};

use crate::config::AssetsConfig;

/// Create the asset service for the configured web root.
///
/// Returns a `ServeDir` service that:
/// 1. Serves the file at the request path when it exists
/// 2. Otherwise serves the entry document with status 200
///
/// Directories, `/` included, never resolve to their own `index.html`; they
/// get the configured entry document like any other unmatched path.
pub fn create_static_service(assets: &AssetsConfig) -> ServeDir<ServeFile> {
    let index = assets.index_path();
    tracing::debug!(
        root = %assets.root.display(),
        index = %index.display(),
        "Creating static asset service"
    );
    ServeDir::new(&assets.root)
        .append_index_html_on_directories(false)
        .fallback(ServeFile::new(index))
}

/// Log a warning at startup if the entry document cannot be found.
///
/// Serving still starts; unmatched paths answer 404 until the file appears.
pub fn check_entry_document(assets: &AssetsConfig) -> bool {
    let index = assets.index_path();
    let present = index.is_file();
    if !present {
        tracing::warn!(
            index = %index.display(),
            "Entry document not found; unmatched paths will return 404"
        );
    }
    present
}
