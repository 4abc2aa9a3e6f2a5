//! Reusable UI components for the marketplace frontend

mod feature_item;
mod icon;
mod privacy_banner;

pub use feature_item::FeatureItem;
pub use icon::Icon;
pub use privacy_banner::{FeatureBanner, PrivacyBanner, BANNER_HEADING};
