//! # Orders Core
//!
//! Core business logic for the medical orders review page.
//!
//! This crate contains the pure data model and the session state:
//! - Physician orders and AI-suggested orders as a two-variant sum type
//! - The suggestion lifecycle (`Pending` → `Accepted` | `Rejected`)
//! - The in-memory [`OrderStore`] seeded from compiled-in mock data
//! - Site configuration resolved once at startup
//!
//! **No presentation or API concerns**: HTML rendering belongs in `orders-view`, HTTP handlers in
//! `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod order;
pub mod seed;
pub mod store;
pub mod text;

pub use config::SiteConfig;
pub use error::{OrdersError, OrdersResult};
pub use order::{
    Evidence, Order, OrderId, OrderKind, PhysicianOrder, Priority, SuggestedOrder,
    SuggestionStatus,
};
pub use seed::seed_orders;
pub use store::{Decision, OrderStore, Transition};
pub use text::{NonEmptyText, TextError};
