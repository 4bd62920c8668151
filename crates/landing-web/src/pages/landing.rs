//! Landing Page

use landing_core::{Lead, PageVariant};
use leptos::callback::Callback;
use leptos::prelude::*;

use crate::components::{Hero, LeadCaptureForm, SiteFooter, SiteHeader, TrustBadges};

/// One iteration of the landing page
///
/// The header call button appears up front for the static variant and,
/// for the others, while a captured lead's success card is showing.
#[component]
pub fn LandingPage(variant: PageVariant) -> impl IntoView {
    let (captured, set_captured) = signal(false);

    let on_success = Callback::new(move |lead: Lead| {
        tracing::info!(submitted_at = %lead.submitted_at, "lead captured");
        set_captured.set(true);
    });
    let on_reset = Callback::new(move |()| set_captured.set(false));
    let show_call = Signal::derive(move || variant.header_call_visible(captured.get()));

    view! {
        <div class="landing">
            <div class="landing-glow"></div>
            <SiteHeader show_call=show_call />
            <main class="landing-main">
                <Hero />
                <LeadCaptureForm variant=variant on_success=on_success on_reset=on_reset />
                <TrustBadges />
            </main>
            <SiteFooter />
        </div>
    }
}
