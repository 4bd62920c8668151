//! Lead Capture Form
//!
//! Holds the `LeadForm` model in a signal, renders inline field errors, and
//! hands accepted submissions to the `SubmissionHandler` for the variant.

use landing_core::{Field, LandingConfig, Lead, LeadForm, PageVariant, SubmissionHandler, TrackingParams};
use leptos::callback::{Callable, Callback};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::SuccessCard;
use crate::host::BrowserHost;

const INPUT_CLASS: &str = "form-input";
const INPUT_ERROR_CLASS: &str = "form-input form-input-error";

/// Input classes, with the destructive border when the field is invalid
const fn input_class(has_error: bool) -> &'static str {
    if has_error { INPUT_ERROR_CLASS } else { INPUT_CLASS }
}

fn submit_label(pending: bool, variant: PageVariant) -> &'static str {
    match (pending, variant) {
        (true, PageVariant::Demo) => "Submitting...",
        (_, PageVariant::Demo) => "Get Started",
        _ => "Submit & Generate Call Button",
    }
}

#[component]
pub fn LeadCaptureForm(
    variant: PageVariant,
    /// Notified with the accepted lead once the success view is showing
    #[prop(optional)]
    on_success: Option<Callback<Lead>>,
    /// Notified after a reset returns the form view
    #[prop(optional)]
    on_reset: Option<Callback<()>>,
) -> impl IntoView {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let form = RwSignal::new(LeadForm::new(TrackingParams::from_query(&BrowserHost::search())));
    let handler = SubmissionHandler::new(config.submit_mode(variant), config.tracker.clone());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let submission = match form.try_update(LeadForm::submit) {
            Some(Ok(submission)) => submission,
            Some(Err(e)) => {
                tracing::debug!(error = %e, "submit blocked");
                return;
            }
            None => return,
        };

        let handler = handler.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = handler.deliver(&submission, &BrowserHost).await {
                tracing::warn!(error = %e, "submission side effects failed");
            }
            form.update(|f| {
                let _ = f.confirm();
            });
            if let Some(on_success) = on_success {
                on_success.run(submission.lead);
            }
        });
    };

    let reset_form = variant.allows_reset().then(|| {
        Callback::new(move |()| {
            form.update(LeadForm::reset);
            if let Some(on_reset) = on_reset {
                on_reset.run(());
            }
        })
    });

    let tracking = form.with_untracked(|f| f.tracking().clone());
    let pending = move || form.with(LeadForm::is_pending);

    view! {
        <div class="lead-card-wrap">
            <Show
                when=move || form.with(|f| f.phase().shows_form())
                fallback=move || view! { <SuccessCard on_reset=reset_form /> }
            >
                <div class="lead-card animate-fade-in">
                    <h3 class="lead-card-title">"Get Started Today"</h3>
                    <form id=config.tracker.form_id.clone() class="lead-form" on:submit=on_submit.clone()>
                        <input type="hidden" name="utm" value=tracking.value_or_empty("utm") />
                        <input type="hidden" name="gclid" value=tracking.value_or_empty("gclid") />

                        <div class="form-row">
                            <FormField field=Field::FirstName form=form />
                            <FormField field=Field::LastName form=form />
                        </div>
                        <FormField field=Field::Email form=form />
                        <FormField field=Field::Zip form=form />
                        <FormField field=Field::CompanyName form=form />

                        // Watched by the external call-tracking script
                        <input id=config.tracker.caller_number_id.clone() type="hidden" />

                        <button type="submit" class="btn btn-gradient btn-lg btn-block" disabled=pending>
                            {move || submit_label(pending(), variant)}
                        </button>
                    </form>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn FormField(field: Field, form: RwSignal<LeadForm>) -> impl IntoView {
    let error = move || form.with(|f| f.error_message(field));

    view! {
        <div class="form-field">
            <label for=field.name() class="form-label">
                {field.label()} " "
                <Show
                    when=move || field.is_required()
                    fallback=|| view! { <span class="form-optional">"(optional)"</span> }
                >
                    <span class="form-required">"*"</span>
                </Show>
            </label>
            <input
                id=field.name()
                name=field.name()
                type=field.input_type()
                placeholder=field.placeholder()
                class=move || input_class(error().is_some())
                prop:value=move || form.with(|f| f.value(field).to_string())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
            {move || error().map(|message| view! { <p class="form-error">{message}</p> })}
        </div>
    }
}
