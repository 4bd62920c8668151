use landing_core::PageVariant;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a href=PageVariant::RealTime.path() class="btn btn-gradient">"Back to the landing page"</a>
        </div>
    }
}
