//! Order records.
//!
//! An order is either a physician-entered order or an AI-suggested order. The two kinds carry
//! different fields, so they are modelled as a two-variant sum type rather than one record with
//! nullable fields: a physician order has no status, priority, or evidence to misread.
//!
//! Suggested orders carry the only mutable field in the model, [`SuggestionStatus`]. Its
//! transitions are applied by [`crate::OrderStore`]; this module only defines which transitions
//! are legal.

use crate::{NonEmptyText, OrdersError, OrdersResult};
use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Unique, immutable identifier of an order record (for example `order-4`, `suggestion-1`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(String);

impl OrderId {
    /// Create an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersError::InvalidInput`] if `id` is empty or contains anything other than
    /// ASCII letters, digits, `-`, `_` or `.`. Ids appear verbatim in URLs and query strings.
    pub fn new(id: impl Into<String>) -> OrdersResult<Self> {
        let id = id.into();
        let url_safe = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.');
        if id.is_empty() || !id.chars().all(url_safe) {
            return Err(OrdersError::InvalidInput(format!(
                "order id must be non-empty and URL-safe, got {id:?}"
            )));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The display ordinal: the segment between the first `-` and the next one.
    ///
    /// Falls back to the whole id when there is no `-` or the segment is empty, so a label never
    /// renders without a number. `order-4` → `4`, `suggestion-1` → `1`, `trailing-` → `trailing-`.
    pub fn ordinal(&self) -> &str {
        match self.0.split_once('-') {
            Some((_, rest)) if !rest.is_empty() => rest.split('-').next().unwrap_or(rest),
            _ => &self.0,
        }
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Enumerations
// ============================================================================

/// Which of the two order variants a record is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderKind {
    #[serde(rename = "physician")]
    Physician,
    #[serde(rename = "ai-suggestion")]
    AiSuggestion,
}

impl OrderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderKind::Physician => "physician",
            OrderKind::AiSuggestion => "ai-suggestion",
        }
    }
}

/// Review status of an AI-suggested order.
///
/// `Pending` is the initial state. `Accepted` and `Rejected` are terminal: once a suggestion
/// has been actioned it can never move again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl SuggestionStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SuggestionStatus::Pending)
    }

    /// Whether moving from `self` to `target` is a legal lifecycle transition.
    pub fn can_transition_to(&self, target: SuggestionStatus) -> bool {
        matches!(
            (self, target),
            (SuggestionStatus::Pending, SuggestionStatus::Accepted)
                | (SuggestionStatus::Pending, SuggestionStatus::Rejected)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionStatus::Pending => "pending",
            SuggestionStatus::Accepted => "accepted",
            SuggestionStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for SuggestionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory priority of an AI-suggested order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Records
// ============================================================================

/// A cited source backing an AI suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evidence {
    /// Publishing body, for example `CDC` or `USPSTF`.
    pub source: String,
    pub title: String,
    /// External link opened by the evidence navigation action.
    pub url: String,
    pub summary: Option<String>,
}

impl Evidence {
    pub fn new(
        source: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        summary: Option<&str>,
    ) -> Self {
        Self {
            source: source.into(),
            title: title.into(),
            url: url.into(),
            summary: summary.map(str::to_owned),
        }
    }
}

/// A physician-entered order. Always in effect; has no lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhysicianOrder {
    id: OrderId,
    text: NonEmptyText,
    transcript: Option<String>,
}

impl PhysicianOrder {
    pub fn new(id: OrderId, text: NonEmptyText, transcript: Option<String>) -> Self {
        Self {
            id,
            text,
            transcript,
        }
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn text(&self) -> &NonEmptyText {
        &self.text
    }

    /// Free-text note of where the order came from (for example a dictation transcript).
    pub fn transcript(&self) -> Option<&str> {
        self.transcript.as_deref()
    }
}

/// An AI-suggested order awaiting (or having received) review.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuggestedOrder {
    id: OrderId,
    text: NonEmptyText,
    status: SuggestionStatus,
    priority: Option<Priority>,
    evidence: Vec<Evidence>,
}

impl SuggestedOrder {
    /// Create a pending suggestion with no priority and no evidence.
    pub fn new(id: OrderId, text: NonEmptyText) -> Self {
        Self {
            id,
            text,
            status: SuggestionStatus::Pending,
            priority: None,
            evidence: Vec::new(),
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_evidence(mut self, evidence: Vec<Evidence>) -> Self {
        self.evidence = evidence;
        self
    }

    /// Set the initial status when seeding a suggestion that was actioned before the session.
    pub fn with_status(mut self, status: SuggestionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn text(&self) -> &NonEmptyText {
        &self.text
    }

    pub fn status(&self) -> SuggestionStatus {
        self.status
    }

    pub fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Supporting evidence, in the order it was cited.
    pub fn evidence(&self) -> &[Evidence] {
        &self.evidence
    }

    pub fn is_pending(&self) -> bool {
        self.status == SuggestionStatus::Pending
    }

    /// Move to `target` if the lifecycle allows it. Returns whether the status changed.
    pub(crate) fn transition_to(&mut self, target: SuggestionStatus) -> bool {
        if self.status.can_transition_to(target) {
            self.status = target;
            true
        } else {
            false
        }
    }
}

/// One clinical order: either physician-entered or AI-suggested.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Order {
    Physician(PhysicianOrder),
    Suggested(SuggestedOrder),
}

impl Order {
    pub fn id(&self) -> &OrderId {
        match self {
            Order::Physician(o) => o.id(),
            Order::Suggested(o) => o.id(),
        }
    }

    pub fn text(&self) -> &NonEmptyText {
        match self {
            Order::Physician(o) => o.text(),
            Order::Suggested(o) => o.text(),
        }
    }

    pub fn kind(&self) -> OrderKind {
        match self {
            Order::Physician(_) => OrderKind::Physician,
            Order::Suggested(_) => OrderKind::AiSuggestion,
        }
    }

    pub fn as_suggestion(&self) -> Option<&SuggestedOrder> {
        match self {
            Order::Suggested(o) => Some(o),
            Order::Physician(_) => None,
        }
    }

    /// Status of a suggestion, or `None` for a physician order.
    pub fn suggestion_status(&self) -> Option<SuggestionStatus> {
        self.as_suggestion().map(SuggestedOrder::status)
    }

    /// Whether the order is in effect: physician orders always are, suggestions once accepted.
    pub fn is_in_effect(&self) -> bool {
        match self {
            Order::Physician(_) => true,
            Order::Suggested(o) => o.status() == SuggestionStatus::Accepted,
        }
    }
}

impl From<PhysicianOrder> for Order {
    fn from(order: PhysicianOrder) -> Self {
        Order::Physician(order)
    }
}

impl From<SuggestedOrder> for Order {
    fn from(order: SuggestedOrder) -> Self {
        Order::Suggested(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> OrderId {
        OrderId::new(s).expect("valid id")
    }

    fn text(s: &str) -> NonEmptyText {
        NonEmptyText::new(s).expect("valid text")
    }

    #[test]
    fn ordinal_is_segment_after_first_dash() {
        assert_eq!(id("order-4").ordinal(), "4");
        assert_eq!(id("suggestion-12").ordinal(), "12");
        assert_eq!(id("order-7-b").ordinal(), "7");
        assert_eq!(id("standalone").ordinal(), "standalone");
        assert_eq!(id("trailing-").ordinal(), "trailing-");
    }

    #[test]
    fn rejects_blank_or_unsafe_ids() {
        assert!(OrderId::new("").is_err());
        assert!(OrderId::new("order 4").is_err());
        assert!(OrderId::new("order,4").is_err());
        assert!(OrderId::new("order/4").is_err());
        assert!(OrderId::new("order_4.b").is_ok());
    }

    #[test]
    fn only_pending_can_transition() {
        use SuggestionStatus::*;
        assert!(Pending.can_transition_to(Accepted));
        assert!(Pending.can_transition_to(Rejected));
        assert!(!Pending.can_transition_to(Pending));
        for terminal in [Accepted, Rejected] {
            assert!(terminal.is_terminal());
            for target in [Pending, Accepted, Rejected] {
                assert!(!terminal.can_transition_to(target));
            }
        }
    }

    #[test]
    fn terminal_suggestion_does_not_move() {
        let mut s = SuggestedOrder::new(id("suggestion-1"), text("PPSV23"));
        assert!(s.transition_to(SuggestionStatus::Rejected));
        assert!(!s.transition_to(SuggestionStatus::Accepted));
        assert_eq!(s.status(), SuggestionStatus::Rejected);
    }

    #[test]
    fn physician_orders_are_always_in_effect() {
        let order: Order = PhysicianOrder::new(id("order-4"), text("TSH labs"), None).into();
        assert_eq!(order.kind(), OrderKind::Physician);
        assert!(order.is_in_effect());
        assert_eq!(order.suggestion_status(), None);
    }

    #[test]
    fn suggestions_are_in_effect_only_once_accepted() {
        let pending: Order = SuggestedOrder::new(id("suggestion-2"), text("COVID-19 booster")).into();
        assert!(!pending.is_in_effect());

        let accepted: Order = SuggestedOrder::new(id("order-5"), text("Influenza vaccination"))
            .with_status(SuggestionStatus::Accepted)
            .into();
        assert!(accepted.is_in_effect());
    }

    #[test]
    fn status_serialises_lowercase() {
        let json = serde_json::to_string(&SuggestionStatus::Accepted).expect("serialise");
        assert_eq!(json, "\"accepted\"");
        let json = serde_json::to_string(&OrderKind::AiSuggestion).expect("serialise");
        assert_eq!(json, "\"ai-suggestion\"");
    }
}
