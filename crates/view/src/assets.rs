//! Bundled static assets.

/// URL path of the stylesheet, relative to the base path.
pub const STYLESHEET_PATH: &str = "/assets/styles.css";

/// URL path of the client-side script used by the static export.
pub const SCRIPT_PATH: &str = "/assets/app.js";

pub const STYLESHEET: &str = include_str!("../assets/styles.css");

pub const SCRIPT: &str = include_str!("../assets/app.js");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::EMPTY_SUGGESTIONS;

    #[test]
    fn script_matches_server_render() {
        assert!(SCRIPT.contains(&format!("\"{EMPTY_SUGGESTIONS}\"")));
        assert!(SCRIPT.contains("main[data-sequence]"));
        assert!(SCRIPT.contains("insertBefore"));
    }
}
