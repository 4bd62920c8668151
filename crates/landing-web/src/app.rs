//! Main App Component

use landing_core::PageVariant;
use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::config;
use crate::pages::{LandingPage, NotFoundPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_context(config::load());

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route
                    path=path!("/")
                    view=|| view! { <LandingPage variant=PageVariant::RealTime /> }
                />
                <Route
                    path=path!("/static")
                    view=|| view! { <LandingPage variant=PageVariant::Static /> }
                />
                <Route
                    path=path!("/demo")
                    view=|| view! { <LandingPage variant=PageVariant::Demo /> }
                />
            </Routes>
        </Router>
    }
}
