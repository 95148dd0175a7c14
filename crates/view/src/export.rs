//! Static-site export.
//!
//! Writes a deployable site using a trailing-slash directory layout:
//!
//! ```text
//! <out>/index.html
//! <out>/assets/styles.css
//! <out>/assets/app.js
//! ```
//!
//! The HTML is rendered in [`RenderMode::Static`](crate::RenderMode::Static) from the store as
//! given, so the export reflects whatever state the store is in (normally freshly seeded).

use crate::assets::{SCRIPT, STYLESHEET};
use crate::{render_page, RenderContext, ViewState};
use orders_core::{OrderStore, SiteConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Errors returned while writing the static site.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to create output directory {path}: {source}", path = path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}", path = path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write the site into `out_dir`, creating it if needed. Returns the paths written.
///
/// # Errors
///
/// Returns [`ExportError`] if a directory cannot be created or a file cannot be written.
pub fn export_site(
    store: &OrderStore,
    config: &SiteConfig,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, ExportError> {
    let assets_dir = out_dir.join("assets");
    fs::create_dir_all(&assets_dir).map_err(|source| ExportError::CreateDir {
        path: assets_dir.clone(),
        source,
    })?;

    let view = ViewState::new();
    let html = render_page(store, &RenderContext::static_site(config, &view));

    let files = [
        (out_dir.join("index.html"), html.as_str()),
        (assets_dir.join("styles.css"), STYLESHEET),
        (assets_dir.join("app.js"), SCRIPT),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (path, contents) in files {
        fs::write(&path, contents).map_err(|source| ExportError::WriteFile {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("wrote {}", path.display());
        written.push(path);
    }

    tracing::info!(
        base_path = config.base_path(),
        "exported static site to {}",
        out_dir.display()
    );
    Ok(written)
}
