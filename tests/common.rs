#![allow(dead_code)]

use privacy_banner::content::{FeatureDescriptor, FeatureIcon};

pub const FEATURE_MARKER: &str = r#"data-role="feature""#;
pub const ICON_MARKER: &str = "data-icon=";

pub const TWO_FEATURES: &[FeatureDescriptor] = &[
    FeatureDescriptor::new("No KYC required", FeatureIcon::ShieldCheck),
    FeatureDescriptor::new("Anonymous trading", FeatureIcon::EyeOff),
];

pub const NO_FEATURES: &[FeatureDescriptor] = &[];

pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Markup of each grid cell, from its marker attribute up to `</li>`.
pub fn feature_cells(html: &str) -> Vec<&str> {
    html.split(FEATURE_MARKER)
        .skip(1)
        .map(|rest| rest.split("</li>").next().unwrap_or_default())
        .collect()
}

/// Opening tag and text content of the first `<h3>`.
pub fn heading(html: &str) -> (&str, &str) {
    let start = html.find("<h3").expect("banner has no <h3>");
    let open_end = start + html[start..].find('>').expect("unterminated <h3>") + 1;
    let close = start + html[start..].find("</h3>").expect("unclosed <h3>");
    (&html[start..open_end], &html[open_end..close])
}

/// Class list of the first element in the markup.
pub fn root_classes(html: &str) -> Vec<&str> {
    let start = html.find(r#"class=""#).expect("root has no class attribute") + 7;
    let end = start + html[start..].find('"').expect("unterminated class attribute");
    html[start..end].split_whitespace().collect()
}

pub fn text_span(text: &str) -> String {
    format!("<span>{}</span>", text)
}
