//! Per-record rendering.
//!
//! Variant-specific parts (AI badge, priority, evidence, actions) are only rendered after
//! matching on the order variant, so a physician order never has them.

use crate::html::escape;
use crate::{RenderContext, RenderMode};
use orders_core::{Evidence, Order, PhysicianOrder, Priority, SuggestedOrder, SuggestionStatus};

const GLYPH_WARNING: &str = "\u{26A0}";
const GLYPH_INFO: &str = "\u{2139}";
const GLYPH_SPARKLES: &str = "\u{2728}";
const GLYPH_TRANSCRIPT: &str = "\u{1F4C4}";
const GLYPH_EXPANDED: &str = "\u{25BE}";
const GLYPH_COLLAPSED: &str = "\u{25B8}";
const GLYPH_EXTERNAL: &str = "\u{2197}";
const GLYPH_CHECK: &str = "\u{2713}";
const GLYPH_CROSS: &str = "\u{2715}";

/// Render one record as an `<article>` card.
pub fn render_order(order: &Order, ctx: &RenderContext<'_>) -> String {
    match order {
        Order::Physician(o) => render_physician(o),
        Order::Suggested(o) => render_suggestion(o, ctx),
    }
}

pub fn render_physician(order: &PhysicianOrder) -> String {
    let id = escape(order.id().as_str());
    let mut out = String::new();

    out.push_str(&format!(
        r#"<article class="card order" id="order-{id}" data-kind="physician">"#
    ));
    out.push_str(&checkbox(&id, false));
    out.push_str(r#"<div class="order-body"><div class="order-header">"#);
    out.push_str(&format!(
        r#"<label for="check-{id}" class="order-label">Order {}</label>"#,
        escape(order.id().ordinal())
    ));
    out.push_str("</div>");
    out.push_str(&order_text(order.text().as_str()));
    if let Some(transcript) = order.transcript() {
        out.push_str(&format!(
            r#"<div class="transcript"><span class="glyph">{GLYPH_TRANSCRIPT}</span> Transcript: {}</div>"#,
            escape(transcript)
        ));
    }
    out.push_str("</div></article>");
    out
}

pub fn render_suggestion(order: &SuggestedOrder, ctx: &RenderContext<'_>) -> String {
    let id = escape(order.id().as_str());
    let status = order.status();
    let mut out = String::new();

    out.push_str(&format!(
        r#"<article class="card order" id="order-{id}" data-kind="ai-suggestion" data-status="{status}">"#
    ));
    out.push_str(&checkbox(&id, status == SuggestionStatus::Accepted));
    out.push_str(r#"<div class="order-body"><div class="order-header">"#);
    out.push_str(&format!(
        r#"<label for="check-{id}" class="order-label">Suggested order {}</label>"#,
        escape(order.id().ordinal())
    ));
    out.push_str(&format!(
        r#"<span class="badge badge-secondary"><span class="glyph">{GLYPH_SPARKLES}</span> AI Suggestion</span>"#
    ));
    if let Some(priority) = order.priority() {
        out.push_str(&priority_indicator(priority));
    }
    out.push_str(&status_badge(status));
    out.push_str("</div>");
    out.push_str(&order_text(order.text().as_str()));
    out.push_str(&evidence_disclosure(order, ctx));
    if order.is_pending() {
        out.push_str(&actions(order, ctx));
    }
    out.push_str("</div></article>");
    out
}

/// Severity indicator: warning glyph for high, info glyph for medium, plain text for low.
pub fn priority_indicator(priority: Priority) -> String {
    let glyph = match priority {
        Priority::High => Some(GLYPH_WARNING),
        Priority::Medium => Some(GLYPH_INFO),
        Priority::Low => None,
    };
    let label = priority.as_str().to_uppercase();

    match glyph {
        Some(glyph) => format!(
            r#"<span class="priority priority-{priority}"><span class="glyph">{glyph}</span> {label}</span>"#
        ),
        None => format!(r#"<span class="priority priority-{priority}">{label}</span>"#),
    }
}

fn status_badge(status: SuggestionStatus) -> String {
    match status {
        SuggestionStatus::Accepted => {
            r#"<span class="badge badge-success">Accepted</span>"#.to_owned()
        }
        SuggestionStatus::Rejected => {
            r#"<span class="badge badge-muted">Rejected</span>"#.to_owned()
        }
        SuggestionStatus::Pending => String::new(),
    }
}

fn checkbox(id: &str, checked: bool) -> String {
    let checked = if checked { " checked" } else { "" };
    format!(r#"<input type="checkbox" class="order-check" id="check-{id}" disabled{checked}>"#)
}

fn order_text(text: &str) -> String {
    format!(
        r#"<textarea class="order-text" readonly rows="2">{}</textarea>"#,
        escape(text)
    )
}

fn evidence_disclosure(order: &SuggestedOrder, ctx: &RenderContext<'_>) -> String {
    let evidence = order.evidence();
    let heading = format!("Evidence from credible sources ({})", evidence.len());

    match ctx.mode {
        RenderMode::Interactive => {
            let id = order.id().as_str();
            let expanded = ctx.view.is_evidence_expanded(id);
            let href = ctx.page_url(&ctx.view.with_evidence_toggled(id));
            let glyph = if expanded { GLYPH_EXPANDED } else { GLYPH_COLLAPSED };

            let mut out = String::from(r#"<section class="evidence">"#);
            out.push_str(&format!(
                r#"<a class="disclosure" href="{}" aria-expanded="{expanded}"><span class="glyph">{glyph}</span> {heading}</a>"#,
                escape(&href)
            ));
            if expanded {
                out.push_str(&evidence_list(evidence));
            }
            out.push_str("</section>");
            out
        }
        RenderMode::Static => format!(
            r#"<details class="evidence"><summary class="disclosure">{heading}</summary>{}</details>"#,
            evidence_list(evidence)
        ),
    }
}

/// Evidence entries in stored order, each with an external link opening in a new tab.
fn evidence_list(evidence: &[Evidence]) -> String {
    let mut out = String::from(r#"<ul class="evidence-list">"#);
    for item in evidence {
        out.push_str(r#"<li class="evidence-item"><div class="evidence-text">"#);
        out.push_str(&format!(
            r#"<div class="evidence-source">{}</div><div class="evidence-title">{}</div>"#,
            escape(&item.source),
            escape(&item.title)
        ));
        if let Some(summary) = &item.summary {
            out.push_str(&format!(
                r#"<div class="evidence-summary">{}</div>"#,
                escape(summary)
            ));
        }
        out.push_str("</div>");
        out.push_str(&format!(
            r#"<a class="external" href="{}" target="_blank" rel="noopener noreferrer" title="Open {}">{GLYPH_EXTERNAL}</a>"#,
            escape(&item.url),
            escape(&item.title)
        ));
        out.push_str("</li>");
    }
    out.push_str("</ul>");
    out
}

fn actions(order: &SuggestedOrder, ctx: &RenderContext<'_>) -> String {
    let id = escape(order.id().as_str());
    let mut out = String::from(r#"<div class="actions">"#);

    match ctx.mode {
        RenderMode::Interactive => {
            let query = ctx.view.to_query();
            for (action, class, glyph, label) in [
                ("accept", "btn-accept", GLYPH_CHECK, "Accept"),
                ("reject", "btn-reject", GLYPH_CROSS, "Reject"),
            ] {
                let action_url = ctx
                    .config
                    .url(&format!("/suggestions/{id}/{action}{query}"));
                out.push_str(&format!(
                    r#"<form method="post" action="{}"><button type="submit" class="btn {class}"><span class="glyph">{glyph}</span> {label}</button></form>"#,
                    escape(&action_url)
                ));
            }
        }
        RenderMode::Static => {
            for (action, class, glyph, label) in [
                ("accept", "btn-accept", GLYPH_CHECK, "Accept"),
                ("reject", "btn-reject", GLYPH_CROSS, "Reject"),
            ] {
                out.push_str(&format!(
                    r#"<button type="button" class="btn {class}" data-action="{action}" data-order="{id}"><span class="glyph">{glyph}</span> {label}</button>"#
                ));
            }
        }
    }

    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ViewState;
    use orders_core::{NonEmptyText, OrderId, OrderStore, SiteConfig};

    fn store() -> OrderStore {
        OrderStore::seeded().expect("seed data is valid")
    }

    fn render(store: &OrderStore, id: &str, view: &ViewState) -> String {
        let config = SiteConfig::root();
        let ctx = RenderContext::interactive(&config, view);
        render_order(store.get(id).expect("seeded order"), &ctx)
    }

    #[test]
    fn physician_order_has_label_transcript_and_no_suggestion_parts() {
        let html = render(&store(), "order-4", &ViewState::new());
        assert!(html.contains(">Order 4</label>"));
        assert!(html.contains("Transcript: Patient reports fatigue, order TSH labs today"));
        assert!(html.contains("blood test TSH labs today for fatigue"));
        assert!(!html.contains("AI Suggestion"));
        assert!(!html.contains("class=\"actions\""));
        assert!(!html.contains("Evidence from credible sources"));
    }

    #[test]
    fn pending_suggestion_exposes_accept_and_reject_forms() {
        let html = render(&store(), "suggestion-1", &ViewState::new());
        assert!(html.contains(">Suggested order 1</label>"));
        assert!(html.contains(r#"action="/suggestions/suggestion-1/accept""#));
        assert!(html.contains(r#"action="/suggestions/suggestion-1/reject""#));
        assert!(!html.contains("badge-success"));
    }

    #[test]
    fn accepted_suggestion_is_checked_and_badged_without_actions() {
        let html = render(&store(), "order-5", &ViewState::new());
        assert!(html.contains("checked>"));
        assert!(html.contains(">Accepted</span>"));
        assert!(!html.contains("class=\"actions\""));
    }

    #[test]
    fn rejected_suggestion_loses_its_actions() {
        let mut store = store();
        store.reject_suggestion("suggestion-2").expect("reject");
        let html = render(&store, "suggestion-2", &ViewState::new());
        assert!(html.contains(">Rejected</span>"));
        assert!(html.contains(r#"data-status="rejected""#));
        assert!(!html.contains("/suggestions/suggestion-2/accept"));
        assert!(!html.contains("/suggestions/suggestion-2/reject"));
    }

    #[test]
    fn priority_indicators_match_severity() {
        assert!(priority_indicator(Priority::High).contains(GLYPH_WARNING));
        assert!(priority_indicator(Priority::High).contains("HIGH"));
        assert!(priority_indicator(Priority::Medium).contains(GLYPH_INFO));
        let low = priority_indicator(Priority::Low);
        assert!(low.contains("LOW"));
        assert!(!low.contains("glyph"));
    }

    #[test]
    fn suggestion_without_priority_renders_no_indicator() {
        let order: Order = SuggestedOrder::new(
            OrderId::new("suggestion-9").expect("id"),
            NonEmptyText::new("Shingles vaccination").expect("text"),
        )
        .into();
        let config = SiteConfig::root();
        let view = ViewState::new();
        let html = render_order(&order, &RenderContext::interactive(&config, &view));
        assert!(!html.contains("class=\"priority"));
        assert!(html.contains("Evidence from credible sources (0)"));
    }

    #[test]
    fn evidence_is_collapsed_until_toggled() {
        let store = store();
        let collapsed = render(&store, "suggestion-1", &ViewState::new());
        assert!(collapsed.contains("Evidence from credible sources (2)"));
        assert!(collapsed.contains(r#"href="/?expanded=suggestion-1""#));
        assert!(!collapsed.contains("evidence-list"));

        let view = ViewState::new().with_evidence_toggled("suggestion-1");
        let expanded = render(&store, "suggestion-1", &view);
        assert!(expanded.contains(r#"aria-expanded="true""#));
        assert!(expanded.contains(r#"href="/""#));
        assert!(expanded.contains("evidence-list"));
    }

    #[test]
    fn evidence_renders_in_stored_order() {
        let view = ViewState::new().with_evidence_toggled("suggestion-1");
        let html = render(&store(), "suggestion-1", &view);
        let cdc = html.find("Pneumococcal Vaccination Guidelines").expect("CDC entry");
        let uspstf = html.find("Pneumococcal Vaccination in Adults").expect("USPSTF entry");
        assert!(cdc < uspstf);
        assert!(html.contains(
            r#"href="https://cdc.gov/vaccines/vpd/pneumo/" target="_blank" rel="noopener noreferrer""#
        ));
    }

    #[test]
    fn actions_preserve_view_state_and_base_path() {
        let config = SiteConfig::new("medical-orders", true).expect("config");
        let view = ViewState::new().with_evidence_toggled("suggestion-2");
        let store = store();
        let ctx = RenderContext::interactive(&config, &view);
        let html = render_order(store.get("suggestion-2").expect("seeded"), &ctx);
        assert!(html.contains(
            r#"action="/medical-orders/suggestions/suggestion-2/accept?expanded=suggestion-2""#
        ));
    }

    #[test]
    fn static_mode_uses_details_and_script_buttons() {
        let config = SiteConfig::root();
        let view = ViewState::new();
        let store = store();
        let ctx = RenderContext::static_site(&config, &view);
        let html = render_order(store.get("suggestion-1").expect("seeded"), &ctx);
        assert!(html.contains(r#"<details class="evidence">"#));
        assert!(html.contains(r#"data-action="accept" data-order="suggestion-1""#));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn record_text_is_escaped() {
        let order: Order = PhysicianOrder::new(
            OrderId::new("order-9").expect("id"),
            NonEmptyText::new("<script>alert(1)</script>").expect("text"),
            Some("A & B".into()),
        )
        .into();
        let config = SiteConfig::root();
        let view = ViewState::new();
        let html = render_order(&order, &RenderContext::interactive(&config, &view));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Transcript: A &amp; B"));
        assert!(!html.contains("<script>"));
    }
}
