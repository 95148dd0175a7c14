//! Ephemeral disclosure state.
//!
//! Which evidence lists are expanded, and whether the suggestions section is open, has no
//! business meaning and never touches the order store. In server mode it round-trips through
//! the query string: `?expanded=order-5&expanded=suggestion-1&suggestions=closed`.

use std::collections::BTreeSet;

/// Query parameter naming one expanded evidence disclosure; repeated once per id.
pub const EXPANDED_PARAM: &str = "expanded";

/// Query parameter for the suggestions section; `closed` collapses it.
pub const SUGGESTIONS_PARAM: &str = "suggestions";

const CLOSED: &str = "closed";

/// Disclosure state keyed by order id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    expanded: BTreeSet<String>,
    suggestions_open: bool,
}

impl ViewState {
    /// Everything collapsed except the suggestions section.
    pub fn new() -> Self {
        Self {
            expanded: BTreeSet::new(),
            suggestions_open: true,
        }
    }

    /// Rebuild the state from decoded query pairs.
    ///
    /// Every `expanded` pair names one id. Blank ids and unrelated keys are skipped; unknown
    /// ids are kept and simply never match a rendered record.
    pub fn from_query_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut view = Self::new();
        for (key, value) in pairs {
            match key {
                EXPANDED_PARAM => {
                    let id = value.trim();
                    if !id.is_empty() {
                        view.expanded.insert(id.to_owned());
                    }
                }
                SUGGESTIONS_PARAM => view.suggestions_open = value != CLOSED,
                _ => {}
            }
        }
        view
    }

    pub fn is_evidence_expanded(&self, order_id: &str) -> bool {
        self.expanded.contains(order_id)
    }

    pub fn suggestions_open(&self) -> bool {
        self.suggestions_open
    }

    /// A copy with the evidence disclosure of `order_id` flipped.
    pub fn with_evidence_toggled(&self, order_id: &str) -> Self {
        let mut next = self.clone();
        if !next.expanded.remove(order_id) {
            next.expanded.insert(order_id.to_owned());
        }
        next
    }

    /// A copy with the suggestions section flipped.
    pub fn with_suggestions_toggled(&self) -> Self {
        Self {
            expanded: self.expanded.clone(),
            suggestions_open: !self.suggestions_open,
        }
    }

    /// Encode as a query string including the leading `?`, or an empty string for the default.
    ///
    /// Order ids are restricted to URL-safe characters, so no percent-encoding is needed.
    pub fn to_query(&self) -> String {
        let mut params = Vec::new();
        for id in &self.expanded {
            params.push(format!("{EXPANDED_PARAM}={id}"));
        }
        if !self.suggestions_open {
            params.push(format!("{SUGGESTIONS_PARAM}={CLOSED}"));
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
