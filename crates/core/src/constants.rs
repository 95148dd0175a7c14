//! Constants used throughout the orders core crate.

/// Repository name used for the base path when `GITHUB_REPOSITORY` is unset.
pub const DEFAULT_REPOSITORY_NAME: &str = "medical-orders";

/// Value of `GITHUB_PAGES` that marks a project-site (subpath) deployment.
pub const SUBPATH_DEPLOYMENT_FLAG: &str = "true";

/// Default listen address for the HTTP server.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Default output directory for the static-site export.
pub const DEFAULT_EXPORT_DIR: &str = "out";

/// Page title shown in the shell header.
pub const PAGE_TITLE: &str = "Medical Orders System";

/// Subtitle shown under the page title.
pub const PAGE_SUBTITLE: &str =
    "Manage physician-narrated orders and AI-suggested treatments with evidence-based recommendations";
