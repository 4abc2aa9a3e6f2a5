use leptos::prelude::*;

use crate::content::FeatureDescriptor;

use super::Icon;

#[component]
pub fn FeatureItem(feature: FeatureDescriptor) -> impl IntoView {
    view! {
        <li class="flex items-center gap-3 text-sm text-slate-300" data-role="feature">
            <Icon icon=feature.icon class="text-lg text-emerald-400 shrink-0"/>
            <span>{feature.text}</span>
        </li>
    }
}
