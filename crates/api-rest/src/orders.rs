//! JSON API over the order store.
//!
//! Wire types are flat response structs; domain types from `orders-core` never cross the
//! boundary directly. Fields that only apply to AI suggestions are omitted for physician orders.

use crate::{ApiError, AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use orders_core::{
    Decision, Evidence, Order, OrderKind, OrderStore, OrdersResult, SuggestedOrder, Transition,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EvidenceRes {
    pub source: String,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderRes {
    pub id: String,
    /// `physician` or `ai-suggestion`.
    pub kind: String,
    pub text: String,
    /// `pending`, `accepted` or `rejected`; absent for physician orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// `high`, `medium` or `low`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<EvidenceRes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListOrdersRes {
    pub orders: Vec<OrderRes>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransitionRes {
    pub id: String,
    pub status: String,
    /// False when the suggestion was already accepted or rejected.
    pub changed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DecisionRes {
    pub order_id: String,
    pub outcome: String,
    /// RFC 3339 timestamp.
    pub decided_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListDecisionsRes {
    pub decisions: Vec<DecisionRes>,
}

impl From<&Evidence> for EvidenceRes {
    fn from(e: &Evidence) -> Self {
        Self {
            source: e.source.clone(),
            title: e.title.clone(),
            url: e.url.clone(),
            summary: e.summary.clone(),
        }
    }
}

impl From<&SuggestedOrder> for OrderRes {
    fn from(s: &SuggestedOrder) -> Self {
        Self {
            id: s.id().to_string(),
            kind: OrderKind::AiSuggestion.as_str().into(),
            text: s.text().to_string(),
            status: Some(s.status().as_str().into()),
            priority: s.priority().map(|p| p.as_str().into()),
            evidence: s.evidence().iter().map(EvidenceRes::from).collect(),
            transcript: None,
        }
    }
}

impl From<&Order> for OrderRes {
    fn from(order: &Order) -> Self {
        match order {
            Order::Physician(p) => Self {
                id: p.id().to_string(),
                kind: order.kind().as_str().into(),
                text: p.text().to_string(),
                status: None,
                priority: None,
                evidence: Vec::new(),
                transcript: p.transcript().map(str::to_owned),
            },
            Order::Suggested(s) => OrderRes::from(s),
        }
    }
}

impl From<&Decision> for DecisionRes {
    fn from(d: &Decision) -> Self {
        Self {
            order_id: d.order_id.to_string(),
            outcome: d.outcome.as_str().into(),
            decided_at: d.decided_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "Physician orders and accepted suggestions", body = ListOrdersRes)
    )
)]
/// List orders in effect
///
/// Returns physician orders plus AI suggestions that have been accepted, in insertion order.
pub async fn list_orders(State(state): State<AppState>) -> Json<ListOrdersRes> {
    let orders: Vec<OrderRes> = state.read(|store| {
        store
            .list_orders()
            .into_iter()
            .map(OrderRes::from)
            .collect()
    });
    Json(ListOrdersRes { orders })
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "The order", body = OrderRes),
        (status = 404, description = "No order with this id")
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderRes>, ApiError> {
    state
        .read(|store| store.get(&id).map(OrderRes::from))
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("order not found: {id}")))
}

#[utoipa::path(
    get,
    path = "/api/suggestions/pending",
    responses(
        (status = 200, description = "Suggestions awaiting review", body = ListOrdersRes)
    )
)]
/// List pending suggestions
///
/// Never includes accepted or rejected suggestions.
pub async fn list_pending_suggestions(State(state): State<AppState>) -> Json<ListOrdersRes> {
    let orders: Vec<OrderRes> = state.read(|store| {
        store
            .list_pending_suggestions()
            .into_iter()
            .map(OrderRes::from)
            .collect()
    });
    Json(ListOrdersRes { orders })
}

#[utoipa::path(
    post,
    path = "/api/suggestions/{id}/accept",
    params(("id" = String, Path, description = "Suggestion id")),
    responses(
        (status = 200, description = "Resulting status", body = TransitionRes),
        (status = 404, description = "No order with this id"),
        (status = 422, description = "The order is not an AI suggestion")
    )
)]
/// Accept a suggestion
///
/// Accepting a suggestion that is already accepted or rejected changes nothing and reports
/// `changed: false`.
pub async fn accept_suggestion(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TransitionRes>, ApiError> {
    transition(&state, id, OrderStore::accept_suggestion)
}

#[utoipa::path(
    post,
    path = "/api/suggestions/{id}/reject",
    params(("id" = String, Path, description = "Suggestion id")),
    responses(
        (status = 200, description = "Resulting status", body = TransitionRes),
        (status = 404, description = "No order with this id"),
        (status = 422, description = "The order is not an AI suggestion")
    )
)]
pub async fn reject_suggestion(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TransitionRes>, ApiError> {
    transition(&state, id, OrderStore::reject_suggestion)
}

#[utoipa::path(
    get,
    path = "/api/decisions",
    responses(
        (status = 200, description = "Applied transitions, oldest first", body = ListDecisionsRes)
    )
)]
pub async fn list_decisions(State(state): State<AppState>) -> Json<ListDecisionsRes> {
    let decisions: Vec<DecisionRes> = state.read(|store| {
        store
            .decisions()
            .iter()
            .map(DecisionRes::from)
            .collect()
    });
    Json(ListDecisionsRes { decisions })
}

fn transition(
    state: &AppState,
    id: String,
    action: fn(&mut OrderStore, &str) -> OrdersResult<Transition>,
) -> Result<Json<TransitionRes>, ApiError> {
    let outcome = state.write(|store| action(store, &id))?;
    Ok(Json(TransitionRes {
        id,
        status: outcome.status().as_str().into(),
        changed: outcome.changed(),
    }))
}
