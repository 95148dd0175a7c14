//! # Orders View
//!
//! HTML presentation layer for the medical orders page.
//!
//! Handles:
//! - Per-record rendering (label, badges, priority, transcript, evidence disclosure, actions)
//! - The page shell around the physician order list and the suggestions section
//! - Ephemeral disclosure state ([`ViewState`]), kept apart from the order store
//! - Static-site export (HTML, CSS and the client-side script)
//!
//! Two render modes share the same markup. [`RenderMode::Interactive`] targets the axum server:
//! disclosures are links carrying the view state in the query string and actions are HTML
//! forms. [`RenderMode::Static`] targets the export: disclosures are `<details>` elements and
//! actions are buttons driven by the bundled script.

pub mod assets;
pub mod export;
pub mod html;
pub mod order_item;
pub mod page;
pub mod view_state;

pub use export::{export_site, ExportError};
pub use order_item::render_order;
pub use page::render_page;
pub use view_state::ViewState;

use orders_core::SiteConfig;

/// How disclosures and actions are wired up in the rendered markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Served by the HTTP surface; every interaction is a request.
    Interactive,
    /// Exported as static files; interactions run in the browser.
    Static,
}

/// Everything the renderer needs besides the records themselves.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    pub config: &'a SiteConfig,
    pub mode: RenderMode,
    pub view: &'a ViewState,
}

impl<'a> RenderContext<'a> {
    pub fn interactive(config: &'a SiteConfig, view: &'a ViewState) -> Self {
        Self {
            config,
            mode: RenderMode::Interactive,
            view,
        }
    }

    pub fn static_site(config: &'a SiteConfig, view: &'a ViewState) -> Self {
        Self {
            config,
            mode: RenderMode::Static,
            view,
        }
    }

    /// URL of the page itself with `view` encoded in the query string.
    pub fn page_url(&self, view: &ViewState) -> String {
        format!("{}{}", self.config.url("/"), view.to_query())
    }
}
