//! Server-rendered page and its interactions.
//!
//! Disclosure toggles are plain links carrying the view state in the query string. Accept and
//! reject are form posts that mutate the store and redirect back to the page with the same view
//! state (post/redirect/get). Acting on an unknown id is ignored here: the page is simply
//! re-rendered unchanged.

use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect},
};
use orders_core::{OrderStore, OrdersResult, Transition};
use orders_view::{assets::STYLESHEET, render_page, RenderContext, ViewState};

/// Raw query pairs carried by the page and its actions. `expanded` repeats once per open
/// disclosure, so the query is decoded as a pair list rather than a struct.
type ViewQuery = Vec<(String, String)>;

fn view_state(query: &[(String, String)]) -> ViewState {
    ViewState::from_query_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

/// Render the page for the current store state.
pub async fn index(State(state): State<AppState>, Query(query): Query<ViewQuery>) -> Html<String> {
    let view = view_state(&query);
    let ctx = RenderContext::interactive(state.config(), &view);
    Html(state.read(|store| render_page(store, &ctx)))
}

/// Accept a pending suggestion and redirect back to the page.
pub async fn accept(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ViewQuery>,
) -> Redirect {
    apply(&state, &id, &query, OrderStore::accept_suggestion)
}

/// Reject a pending suggestion and redirect back to the page.
pub async fn reject(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ViewQuery>,
) -> Redirect {
    apply(&state, &id, &query, OrderStore::reject_suggestion)
}

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

fn apply(
    state: &AppState,
    id: &str,
    query: &[(String, String)],
    action: fn(&mut OrderStore, &str) -> OrdersResult<Transition>,
) -> Redirect {
    if let Err(e) = state.write(|store| action(store, id)) {
        tracing::warn!("ignoring page action: {e}");
    }

    let view = view_state(query);
    let ctx = RenderContext::interactive(state.config(), &view);
    Redirect::to(&ctx.page_url(&view))
}
