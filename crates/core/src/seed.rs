//! Compiled-in mock data.
//!
//! Stands in for an external ordering service and suggestion engine. The store is seeded from
//! this list at session start; records are never created or deleted afterwards.

use crate::{
    Evidence, NonEmptyText, Order, OrderId, OrdersResult, PhysicianOrder, Priority,
    SuggestedOrder, SuggestionStatus,
};

/// The seed records, in display order.
pub fn seed_orders() -> OrdersResult<Vec<Order>> {
    Ok(vec![
        PhysicianOrder::new(
            OrderId::new("order-4")?,
            NonEmptyText::new("blood test TSH labs today for fatigue")?,
            Some("Patient reports fatigue, order TSH labs today".into()),
        )
        .into(),
        SuggestedOrder::new(
            OrderId::new("order-5")?,
            NonEmptyText::new("Influenza vaccination - Annual")?,
        )
        .with_status(SuggestionStatus::Accepted)
        .with_priority(Priority::Medium)
        .with_evidence(vec![Evidence::new(
            "CDC",
            "Seasonal Influenza Vaccination Recommendations",
            "https://cdc.gov/flu/professionals/vaccination/",
            Some("Annual influenza vaccination recommended for all persons aged ≥6 months"),
        )])
        .into(),
        SuggestedOrder::new(
            OrderId::new("suggestion-1")?,
            NonEmptyText::new("Pneumococcal vaccination - PPSV23")?,
        )
        .with_priority(Priority::High)
        .with_evidence(vec![
            Evidence::new(
                "CDC",
                "Pneumococcal Vaccination Guidelines",
                "https://cdc.gov/vaccines/vpd/pneumo/",
                Some("PPSV23 recommended for adults 65+ and high-risk conditions"),
            ),
            Evidence::new(
                "USPSTF",
                "Pneumococcal Vaccination in Adults",
                "https://uspreventiveservicestaskforce.org/uspstf/recommendation/pneumococcal-vaccination-adults",
                Some("Grade A recommendation for pneumococcal vaccination"),
            ),
        ])
        .into(),
        SuggestedOrder::new(
            OrderId::new("suggestion-2")?,
            NonEmptyText::new("COVID-19 booster vaccination")?,
        )
        .with_priority(Priority::Medium)
        .with_evidence(vec![Evidence::new(
            "CDC",
            "COVID-19 Booster Recommendations",
            "https://cdc.gov/coronavirus/2019-ncov/vaccines/booster-shot.html",
            Some("Updated COVID-19 boosters recommended annually"),
        )])
        .into(),
    ])
}
