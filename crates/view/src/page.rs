//! Page shell.
//!
//! Title and subtitle, the "Patient Orders" list (physician orders plus accepted suggestions),
//! and the collapsible suggestions section (pending suggestions, then rejected ones).

use crate::assets::{SCRIPT_PATH, STYLESHEET_PATH};
use crate::html::escape;
use crate::order_item::{render_order, render_suggestion};
use crate::{RenderContext, RenderMode};
use orders_core::constants::{PAGE_SUBTITLE, PAGE_TITLE};
use orders_core::OrderStore;

const SUGGESTIONS_HEADING: &str = "Suggestions from credible sources";

/// Shown in the suggestions section when it has nothing to list. The bundled script inserts the
/// same text after the last suggestion is actioned.
pub const EMPTY_SUGGESTIONS: &str = "No suggestions to review.";

/// Render the full HTML document for the current store state.
pub fn render_page(store: &OrderStore, ctx: &RenderContext<'_>) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape(PAGE_TITLE)));
    out.push_str(&format!(
        "<link rel=\"stylesheet\" href=\"{}\">\n",
        escape(&ctx.config.url(STYLESHEET_PATH))
    ));
    if ctx.mode == RenderMode::Static {
        out.push_str(&format!(
            "<script src=\"{}\" defer></script>\n",
            escape(&ctx.config.url(SCRIPT_PATH))
        ));
    }
    out.push_str("</head>\n<body>\n");
    match ctx.mode {
        RenderMode::Interactive => out.push_str("<main class=\"page\">\n"),
        // The script re-inserts actioned cards by their seeded position.
        RenderMode::Static => {
            let sequence: Vec<&str> = store.all().iter().map(|o| o.id().as_str()).collect();
            out.push_str(&format!(
                "<main class=\"page\" data-sequence=\"{}\">\n",
                escape(&sequence.join(" "))
            ));
        }
    }
    out.push_str("<div class=\"container\">\n");

    out.push_str(&format!(
        "<header class=\"page-header\"><h1>{}</h1><p class=\"subtitle\">{}</p></header>\n",
        escape(PAGE_TITLE),
        escape(PAGE_SUBTITLE)
    ));

    out.push_str("<div class=\"orders\">\n<h2>Patient Orders</h2>\n");
    out.push_str("<div class=\"order-list\" id=\"orders\">\n");
    for order in store.list_orders() {
        out.push_str(&render_order(order, ctx));
        out.push('\n');
    }
    out.push_str("</div>\n");
    out.push_str(&suggestions_section(store, ctx));
    out.push_str("</div>\n</div>\n</main>\n</body>\n</html>\n");
    out
}

fn suggestions_section(store: &OrderStore, ctx: &RenderContext<'_>) -> String {
    let mut list = String::from("<div class=\"order-list\" id=\"suggestions\">\n");
    let pending = store.list_pending_suggestions();
    let rejected = store.list_rejected_suggestions();
    if pending.is_empty() && rejected.is_empty() {
        list.push_str(&format!("<p class=\"empty\">{EMPTY_SUGGESTIONS}</p>\n"));
    }
    for suggestion in pending.into_iter().chain(rejected) {
        list.push_str(&render_suggestion(suggestion, ctx));
        list.push('\n');
    }
    list.push_str("</div>\n");

    match ctx.mode {
        RenderMode::Interactive => {
            let open = ctx.view.suggestions_open();
            let href = ctx.page_url(&ctx.view.with_suggestions_toggled());
            let glyph = if open { "\u{25BE}" } else { "\u{25B8}" };
            let mut out = String::from("<section class=\"suggestions\">\n");
            out.push_str(&format!(
                "<a class=\"disclosure section-toggle\" href=\"{}\" aria-expanded=\"{open}\"><span class=\"glyph\">{glyph}</span> {SUGGESTIONS_HEADING}</a>\n",
                escape(&href)
            ));
            if open {
                out.push_str(&list);
            }
            out.push_str("</section>\n");
            out
        }
        RenderMode::Static => format!(
            "<details class=\"suggestions\" open>\n<summary class=\"disclosure section-toggle\">{SUGGESTIONS_HEADING}</summary>\n{list}</details>\n"
        ),
    }
}
