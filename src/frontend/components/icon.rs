use leptos::prelude::*;

use crate::content::FeatureIcon;

/// Decorative glyph; hidden from assistive technology.
#[component]
pub fn Icon(icon: FeatureIcon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <span class=class aria-hidden="true" data-icon=icon.as_str()>
            {icon.glyph()}
        </span>
    }
}
