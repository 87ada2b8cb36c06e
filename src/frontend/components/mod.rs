//! Reusable UI components for the site

mod feature_card;
mod homepage_features;

pub use feature_card::FeatureCard;
pub use homepage_features::HomepageFeatures;
