use std::collections::HashSet;

use crate::common::ContentError;

use super::FeatureIcon;

/// One privacy feature shown in the banner.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FeatureDescriptor {
    pub text: &'static str,
    pub icon: FeatureIcon,
}

impl FeatureDescriptor {
    pub const fn new(text: &'static str, icon: FeatureIcon) -> Self {
        Self { text, icon }
    }
}

/// Features listed by the banner, in display order.
pub const PRIVACY_FEATURES: &[FeatureDescriptor] = &[
    FeatureDescriptor::new("No KYC required", FeatureIcon::ShieldCheck),
    FeatureDescriptor::new("Anonymous trading", FeatureIcon::EyeOff),
    FeatureDescriptor::new("No personal data stored", FeatureIcon::UserX),
    FeatureDescriptor::new("Pay with Bitcoin or Monero", FeatureIcon::Bitcoin),
    FeatureDescriptor::new("Tor-friendly access", FeatureIcon::Onion),
    FeatureDescriptor::new("Encrypted buyer-seller messages", FeatureIcon::Envelope),
];

/// Checks a feature list for authoring mistakes: blank text or the same
/// text listed twice. An empty list is valid.
pub fn validate(features: &[FeatureDescriptor]) -> Result<(), ContentError> {
    let mut seen = HashSet::with_capacity(features.len());

    for (index, feature) in features.iter().enumerate() {
        if feature.text.trim().is_empty() {
            return Err(ContentError::EmptyText { index });
        }
        if !seen.insert(feature.text) {
            return Err(ContentError::DuplicateText(feature.text));
        }
    }

    Ok(())
}
