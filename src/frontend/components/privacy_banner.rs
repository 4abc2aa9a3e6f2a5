use leptos::prelude::*;

use crate::content::{FeatureDescriptor, FeatureIcon, PRIVACY_FEATURES};

use super::{FeatureItem, Icon};

pub const BANNER_HEADING: &str = "Non-KYC Marketplace";

/// Banner listing the marketplace privacy features.
#[component]
pub fn PrivacyBanner() -> impl IntoView {
    view! { <FeatureBanner features=PRIVACY_FEATURES/> }
}

/// Renders the banner over an arbitrary feature list, one grid cell per
/// feature. An empty list renders an empty grid.
#[component]
pub fn FeatureBanner(features: &'static [FeatureDescriptor]) -> impl IntoView {
    view! {
        <div
            class="bg-gradient-to-r from-emerald-900/40 to-slate-900/40 border border-emerald-500/30 rounded-xl p-6"
            data-component="privacy-banner"
        >
            <div class="flex items-center gap-2 mb-4">
                <Icon icon=FeatureIcon::Lock class="text-xl text-emerald-400"/>
                <h3 class="text-lg font-bold text-white">{BANNER_HEADING}</h3>
            </div>
            <ul class="grid grid-cols-1 sm:grid-cols-2 gap-3" data-role="feature-grid">
                {features
                    .iter()
                    .map(|feature| view! { <FeatureItem feature=*feature/> })
                    .collect_view()}
            </ul>
        </div>
    }
}
