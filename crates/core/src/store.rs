//! In-memory order store.
//!
//! The store owns the session's order collection. It is seeded once, keeps records in insertion
//! order, and only ever mutates the status of AI-suggested orders, one transition at a time.
//!
//! Accept and reject return a [`Transition`] describing what happened. Acting on an unknown id
//! or on a physician order is reported as an error, but the collection is left exactly as it
//! was; callers that want the permissive "silently ignore" behaviour can discard the error.

use crate::{Order, OrderId, OrdersError, OrdersResult, SuggestedOrder, SuggestionStatus};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Outcome of a successful accept or reject call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The suggestion was pending and now has the carried status.
    Applied(SuggestionStatus),
    /// The suggestion was already terminal; its (unchanged) status is carried.
    Unchanged(SuggestionStatus),
}

impl Transition {
    pub fn status(&self) -> SuggestionStatus {
        match self {
            Transition::Applied(s) | Transition::Unchanged(s) => *s,
        }
    }

    pub fn changed(&self) -> bool {
        matches!(self, Transition::Applied(_))
    }
}

/// Audit entry for an applied transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub order_id: OrderId,
    pub outcome: SuggestionStatus,
    pub decided_at: DateTime<Utc>,
}

/// Session-scoped collection of orders and suggestions.
#[derive(Clone, Debug)]
pub struct OrderStore {
    orders: Vec<Order>,
    decisions: Vec<Decision>,
}

impl OrderStore {
    /// Build a store from `orders`, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersError::DuplicateOrderId`] if two records share an id.
    pub fn new(orders: Vec<Order>) -> OrdersResult<Self> {
        let mut seen = HashSet::new();
        for order in &orders {
            if !seen.insert(order.id().as_str()) {
                return Err(OrdersError::DuplicateOrderId(order.id().to_string()));
            }
        }

        Ok(Self {
            orders,
            decisions: Vec::new(),
        })
    }

    /// Build a store from the compiled-in seed data.
    pub fn seeded() -> OrdersResult<Self> {
        Self::new(crate::seed_orders()?)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Every record, in insertion order.
    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id().as_str() == id)
    }

    /// Physician orders plus suggestions that have been accepted, in insertion order.
    pub fn list_orders(&self) -> Vec<&Order> {
        self.orders.iter().filter(|o| o.is_in_effect()).collect()
    }

    /// Suggestions still awaiting review, in insertion order.
    pub fn list_pending_suggestions(&self) -> Vec<&SuggestedOrder> {
        self.suggestions_with(SuggestionStatus::Pending)
    }

    /// Suggestions that were rejected, in insertion order.
    pub fn list_rejected_suggestions(&self) -> Vec<&SuggestedOrder> {
        self.suggestions_with(SuggestionStatus::Rejected)
    }

    /// Transitions applied during this session, oldest first.
    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    /// Accept the pending suggestion `id`.
    ///
    /// # Errors
    ///
    /// - [`OrdersError::OrderNotFound`] if no record has this id.
    /// - [`OrdersError::NotASuggestion`] if the record is a physician order.
    pub fn accept_suggestion(&mut self, id: &str) -> OrdersResult<Transition> {
        self.transition(id, SuggestionStatus::Accepted)
    }

    /// Reject the pending suggestion `id`.
    ///
    /// # Errors
    ///
    /// Same as [`OrderStore::accept_suggestion`].
    pub fn reject_suggestion(&mut self, id: &str) -> OrdersResult<Transition> {
        self.transition(id, SuggestionStatus::Rejected)
    }

    fn suggestions_with(&self, status: SuggestionStatus) -> Vec<&SuggestedOrder> {
        self.orders
            .iter()
            .filter_map(Order::as_suggestion)
            .filter(|s| s.status() == status)
            .collect()
    }

    fn transition(&mut self, id: &str, target: SuggestionStatus) -> OrdersResult<Transition> {
        let Some(order) = self.orders.iter_mut().find(|o| o.id().as_str() == id) else {
            tracing::warn!(order_id = id, action = %target, "suggestion not found");
            return Err(OrdersError::OrderNotFound(id.to_owned()));
        };

        let suggestion = match order {
            Order::Suggested(s) => s,
            Order::Physician(_) => {
                tracing::warn!(order_id = id, action = %target, "not an AI suggestion");
                return Err(OrdersError::NotASuggestion(id.to_owned()));
            }
        };

        if !suggestion.transition_to(target) {
            tracing::debug!(
                order_id = id,
                status = %suggestion.status(),
                "suggestion already actioned"
            );
            return Ok(Transition::Unchanged(suggestion.status()));
        }

        tracing::info!(order_id = id, status = %target, "suggestion actioned");
        self.decisions.push(Decision {
            order_id: suggestion.id().clone(),
            outcome: target,
            decided_at: Utc::now(),
        });

        Ok(Transition::Applied(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NonEmptyText, PhysicianOrder};

    fn store() -> OrderStore {
        OrderStore::seeded().expect("seed data is valid")
    }

    fn pending_ids(store: &OrderStore) -> Vec<&str> {
        store
            .list_pending_suggestions()
            .iter()
            .map(|s| s.id().as_str())
            .collect()
    }

    fn order_ids(store: &OrderStore) -> Vec<&str> {
        store.list_orders().iter().map(|o| o.id().as_str()).collect()
    }

    #[test]
    fn seeded_lists_split_in_effect_orders_from_pending_suggestions() {
        let store = store();
        assert_eq!(order_ids(&store), vec!["order-4", "order-5"]);
        assert_eq!(pending_ids(&store), vec!["suggestion-1", "suggestion-2"]);
        assert!(store.list_rejected_suggestions().is_empty());
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn accepting_moves_suggestion_into_orders() {
        let mut store = store();
        let t = store.accept_suggestion("suggestion-1").expect("accept");
        assert_eq!(t, Transition::Applied(SuggestionStatus::Accepted));

        assert_eq!(order_ids(&store), vec!["order-4", "order-5", "suggestion-1"]);
        assert_eq!(pending_ids(&store), vec!["suggestion-2"]);
        assert_eq!(
            store.get("suggestion-1").and_then(Order::suggestion_status),
            Some(SuggestionStatus::Accepted)
        );
    }

    #[test]
    fn accepting_twice_is_a_no_op() {
        let mut store = store();
        store.accept_suggestion("suggestion-1").expect("accept");
        let t = store.accept_suggestion("suggestion-1").expect("accept again");
        assert_eq!(t, Transition::Unchanged(SuggestionStatus::Accepted));
        assert!(!t.changed());
        assert_eq!(store.decisions().len(), 1);
    }

    #[test]
    fn rejected_is_terminal() {
        let mut store = store();
        let t = store.reject_suggestion("suggestion-2").expect("reject");
        assert_eq!(t, Transition::Applied(SuggestionStatus::Rejected));

        let t = store.accept_suggestion("suggestion-2").expect("accept after reject");
        assert_eq!(t, Transition::Unchanged(SuggestionStatus::Rejected));
        assert_eq!(
            store.get("suggestion-2").and_then(Order::suggestion_status),
            Some(SuggestionStatus::Rejected)
        );
        assert!(!order_ids(&store).contains(&"suggestion-2"));
        assert_eq!(
            store
                .list_rejected_suggestions()
                .iter()
                .map(|s| s.id().as_str())
                .collect::<Vec<_>>(),
            vec!["suggestion-2"]
        );
    }

    #[test]
    fn accepted_cannot_be_rejected() {
        let mut store = store();
        let t = store.reject_suggestion("order-5").expect("reject seeded accepted");
        assert_eq!(t, Transition::Unchanged(SuggestionStatus::Accepted));
    }

    #[test]
    fn pending_list_never_contains_terminal_suggestions() {
        let mut store = store();
        store.accept_suggestion("suggestion-1").expect("accept");
        store.reject_suggestion("suggestion-2").expect("reject");
        assert!(store.list_pending_suggestions().is_empty());
        for s in store.all().iter().filter_map(Order::as_suggestion) {
            assert!(s.status().is_terminal());
        }
    }

    #[test]
    fn unknown_id_leaves_collection_unchanged() {
        let mut store = store();
        let before = store.all().to_vec();

        let err = store.accept_suggestion("does-not-exist").expect_err("unknown id");
        assert!(matches!(err, OrdersError::OrderNotFound(ref id) if id == "does-not-exist"));
        let err = store.reject_suggestion("does-not-exist").expect_err("unknown id");
        assert!(matches!(err, OrdersError::OrderNotFound(_)));

        assert_eq!(store.len(), before.len());
        assert_eq!(store.all(), before.as_slice());
        assert!(store.decisions().is_empty());
    }

    #[test]
    fn physician_orders_cannot_be_actioned() {
        let mut store = store();
        let before = store.all().to_vec();
        let err = store.accept_suggestion("order-4").expect_err("physician order");
        assert!(matches!(err, OrdersError::NotASuggestion(ref id) if id == "order-4"));
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn decisions_record_applied_transitions_in_order() {
        let mut store = store();
        store.reject_suggestion("suggestion-2").expect("reject");
        store.accept_suggestion("suggestion-1").expect("accept");
        store.accept_suggestion("suggestion-1").expect("no-op");

        let log: Vec<_> = store
            .decisions()
            .iter()
            .map(|d| (d.order_id.as_str(), d.outcome))
            .collect();
        assert_eq!(
            log,
            vec![
                ("suggestion-2", SuggestionStatus::Rejected),
                ("suggestion-1", SuggestionStatus::Accepted),
            ]
        );
        assert!(store.decisions()[0].decided_at <= store.decisions()[1].decided_at);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let make = || -> Order {
            PhysicianOrder::new(
                OrderId::new("order-1").expect("id"),
                NonEmptyText::new("CBC").expect("text"),
                None,
            )
            .into()
        };
        let err = OrderStore::new(vec![make(), make()]).expect_err("duplicate");
        assert!(matches!(err, OrdersError::DuplicateOrderId(ref id) if id == "order-1"));
    }

    #[test]
    fn empty_store_is_allowed() {
        let store = OrderStore::new(Vec::new()).expect("empty store");
        assert!(store.is_empty());
        assert!(store.list_orders().is_empty());
    }
}
