//! Contact form bound to the shared `ContactForm` controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Inputs write through `ContactForm::update_field`; submit runs
//! `begin_submit`, sends the snapshot from a local task, and hands the result
//! to `complete`. Disabling the button while submitting is cosmetic; the
//! controller refuses overlapping submissions on its own.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api::{ContactClient, HttpContactClient};
use crate::state::contact::{ContactField, ContactForm, SubmissionState};

/// Submit button text for `state`.
pub fn submit_label(state: &SubmissionState) -> &'static str {
    if state.is_submitting() { "Sending..." } else { "Send Message" }
}

/// Banner modifier class for the status message.
pub fn status_class(state: &SubmissionState) -> &'static str {
    if state.is_success() {
        "contact-form__status contact-form__status--success"
    } else {
        "contact-form__status contact-form__status--error"
    }
}

/// Contact form panel.
#[component]
pub fn ContactFormPanel() -> impl IntoView {
    let form = expect_context::<RwSignal<ContactForm>>();

    let field_value = move |field: ContactField| form.with(|f| f.data().get(field).to_owned());
    let set_field = move |field: ContactField, value: String| form.update(|f| f.update_field(field, value));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(payload)) = form.try_update(ContactForm::begin_submit) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = HttpContactClient::default().send(&payload).await;
            form.update(|f| f.complete(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <div class="contact-form__field">
                <label class="contact-form__label">"Name"</label>
                <input
                    class="contact-form__input"
                    type="text"
                    name=ContactField::Name.as_str()
                    required=true
                    placeholder="Your Name"
                    prop:value=move || field_value(ContactField::Name)
                    on:input=move |ev| set_field(ContactField::Name, event_target_value(&ev))
                />
            </div>
            <div class="contact-form__field">
                <label class="contact-form__label">"Email"</label>
                <input
                    class="contact-form__input"
                    type="email"
                    name=ContactField::Email.as_str()
                    required=true
                    placeholder="your.email@example.com"
                    prop:value=move || field_value(ContactField::Email)
                    on:input=move |ev| set_field(ContactField::Email, event_target_value(&ev))
                />
            </div>
            <div class="contact-form__field">
                <label class="contact-form__label">"Message"</label>
                <textarea
                    class="contact-form__input"
                    rows="4"
                    name=ContactField::Message.as_str()
                    required=true
                    placeholder="Tell me about your project..."
                    prop:value=move || field_value(ContactField::Message)
                    on:input=move |ev| set_field(ContactField::Message, event_target_value(&ev))
                ></textarea>
            </div>
            <button
                class="contact-form__submit"
                type="submit"
                disabled=move || form.with(|f| f.state().is_submitting())
            >
                {move || form.with(|f| submit_label(f.state()))}
            </button>
            <Show when=move || form.with(|f| f.state().message().is_some())>
                <div class=move || form.with(|f| status_class(f.state()))>
                    {move || form.with(|f| f.state().message().unwrap_or_default().to_owned())}
                </div>
            </Show>
        </form>
    }
}
