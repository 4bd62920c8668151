use landing_core::LandingConfig;
use leptos::prelude::*;

/// Logo, subtitle and an optional click-to-call button
#[component]
pub fn SiteHeader(show_call: Signal<bool>) -> impl IntoView {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let tel = config.phone.tel_href();
    let display = config.phone.display.clone();

    view! {
        <header class="site-header">
            <div class="site-logo">
                <img src=config.brand.logo_src.clone() alt=config.brand.name.clone() />
            </div>
            <div class="site-header-right">
                <div class="site-subtitle">{config.brand.subtitle.clone()}</div>
                <Show when=move || show_call.get()>
                    <a href=tel.clone() class="header-call">
                        <span class="btn btn-call btn-lg">
                            "📞 Call Now "
                            <span class="call-number">{display.clone()}</span>
                        </span>
                    </a>
                </Show>
            </div>
        </header>
    }
}
