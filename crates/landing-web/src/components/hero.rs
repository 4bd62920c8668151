use landing_core::LandingConfig;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let brand = use_context::<LandingConfig>().unwrap_or_default().brand;

    view! {
        <section class="hero">
            <h1 class="hero-title">
                {brand.headline} " "
                <span class="hero-title-accent">{brand.headline_accent}</span>
            </h1>
            <p class="hero-subtext">{brand.subtext}</p>
        </section>
    }
}
