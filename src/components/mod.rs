//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod campaign_manager;
pub mod chart;
pub mod date_range;
pub mod loading;
pub mod metric_card;
pub mod nav_brand;
pub mod toast;

pub use campaign_manager::CampaignManager;
pub use chart::{ConversionChart, VisitorsChart};
pub use date_range::DateRangeFilter;
pub use loading::Loading;
pub use metric_card::MetricsCards;
pub use nav_brand::{BackHome, Brand};
pub use toast::Toast;
