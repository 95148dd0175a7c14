//! HTML escaping.
//!
//! All record text is user-facing data and is escaped before it is placed in element content or
//! attribute values.

use std::borrow::Cow;

/// Escape `&`, `<`, `>`, `"` and `'` so `input` is safe in element content and quoted attributes.
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
