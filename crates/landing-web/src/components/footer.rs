use chrono::{Datelike, Utc};
use landing_core::LandingConfig;
use leptos::prelude::*;

const BADGES: [(&str, &str); 3] = [
    ("🛡", "Secure & Encrypted"),
    ("✓", "Real-Time Routing"),
    ("🛡", "Instant Connection"),
];

#[component]
pub fn TrustBadges() -> impl IntoView {
    view! {
        <div class="trust-badges">
            {BADGES
                .into_iter()
                .map(|(icon, label)| {
                    view! {
                        <div class="trust-badge">
                            <span class="trust-badge-icon">{icon}</span>
                            {label}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let brand = use_context::<LandingConfig>().unwrap_or_default().brand.name;
    let notice = format!(
        "© {} {}. For demonstration and testing purposes only.",
        Utc::now().year(),
        brand
    );

    view! {
        <footer class="site-footer">
            <p class="footer-copyright">{notice}</p>
        </footer>
    }
}
