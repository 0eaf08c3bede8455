//! Reusable UI components.

pub mod listing_card;
pub mod pagination;
pub mod ui;

pub use listing_card::{ListingCard, PlanBadge, StatusBadge};
pub use pagination::Pagination;
