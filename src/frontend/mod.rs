pub mod components;

use components::PrivacyBanner;
use leptos::prelude::*;

/// HTML shell for SSR - provides the full document structure
pub fn shell() -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Trade without identity checks: no KYC, no personal data, private payments."/>
                <title>"Non-KYC Marketplace"</title>
                <link rel="stylesheet" href="/static/app.css"/>
            </head>
            <body class="min-h-screen bg-slate-950 text-slate-100">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="max-w-3xl mx-auto px-6 py-16">
            <PrivacyBanner/>
        </main>
    }
}

/// Server-rendered markup of the banner alone.
pub fn render_banner() -> String {
    let banner = view! { <PrivacyBanner/> };
    banner.to_html()
}

/// Server-rendered markup of the whole page.
pub fn render_page() -> String {
    shell().to_html()
}
