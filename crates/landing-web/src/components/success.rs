use landing_core::LandingConfig;
use leptos::callback::{Callable, Callback};
use leptos::prelude::*;

/// Shown in place of the form once a lead is accepted
#[component]
pub fn SuccessCard(on_reset: Option<Callback<()>>) -> impl IntoView {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let brand = config.brand.name;

    view! {
        <div class="lead-card success-card animate-scale-in">
            <div class="success-check">
                <span class="success-check-icon">"✓"</span>
            </div>
            <h3 class="success-title">"Thanks! You're ready to connect with our team."</h3>
            <p class="success-text">
                {format!("Click below to speak with a {brand} specialist now.")}
            </p>
            <a href=config.phone.tel_href() class="block">
                <span class="btn btn-call btn-xl btn-block">
                    {format!("📞 Call {brand} Now")}
                    <span class="call-number">{config.phone.display.clone()}</span>
                </span>
            </a>
            {on_reset.map(|reset| {
                view! {
                    <button type="button" class="btn btn-link" on:click=move |_| reset.run(())>
                        "Submit another lead"
                    </button>
                }
            })}
        </div>
    }
}
