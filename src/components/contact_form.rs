use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::catalog::treatments::{TreatmentCatalog, GENERAL_CONSULTATION};
use crate::components::toast::Toast;
use crate::inquiry::form::LeadForm;
use crate::inquiry::launcher::BrowserOpener;
use crate::inquiry::prefill::{incoming_service, ServicePrefill, ServiceQuery};
use crate::inquiry::validation::{FieldErrors, InquiryField};

fn field_error(errors: &FieldErrors, field: InquiryField) -> Html {
    match errors.message(field) {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}

/// Booking form that hands the visitor over to WhatsApp.
///
/// The treatment is prefilled from navigation state when another page pushed
/// a [`ServicePrefill`], otherwise from the `service` query parameter.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let catalog = use_memo(|_| TreatmentCatalog::standard(), ());
    let form = use_state(LeadForm::default);
    let toast = use_state(|| None::<AttrValue>);
    let fallback = use_state(|| None::<String>);

    // read from the router so a new ?service= reaches an already mounted form
    let location = use_location();
    let incoming = location.as_ref().and_then(|l| {
        let state = l.state::<ServicePrefill>();
        incoming_service(state.as_deref(), l.query::<ServiceQuery>().ok())
    });

    {
        let form = form.clone();
        let catalog = catalog.clone();
        use_effect_with_deps(
            move |incoming: &Option<String>| {
                if let Some(service) = incoming {
                    let mut next = (*form).clone();
                    if next.apply_prefill(service, &catalog).is_some() {
                        form.set(next);
                    }
                }
                || ()
            },
            incoming,
        );
    }

    let on_input = |field: InquiryField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            next.set_field(field, value);
            form.set(next);
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            let mut next = (*form).clone();
            next.set_field(InquiryField::Message, value);
            form.set(next);
        })
    };

    let on_treatment = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let mut next = (*form).clone();
            next.set_field(InquiryField::Treatment, value);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let toast = toast.clone();
        let fallback = fallback.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match next.submit(&BrowserOpener) {
                Ok(submission) => {
                    log::info!("Booking handed over to WhatsApp");
                    fallback.set(submission.fallback_url());
                    toast.set(Some("Redirecting to WhatsApp...".into()));
                }
                Err(errors) => {
                    log::debug!("Booking form rejected: {:?}", errors.messages());
                    fallback.set(None);
                }
            }
            form.set(next);
        })
    };

    let on_dismiss = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    let input = form.input();
    let errors = form.errors();
    let invalid = |field: InquiryField| errors.get(field).is_some().then(|| "invalid");

    html! {
        <div class="contact-form-card">
            <h2>{"Book an Appointment"}</h2>
            <p class="form-intro">{"Fill out the form below and we'll redirect you to WhatsApp to complete your booking."}</p>
            <form class="contact-form" {onsubmit} novalidate=true>
                <div class="form-field">
                    <label for="name">{"Full Name *"}</label>
                    <input
                        id="name"
                        type="text"
                        placeholder="Enter your full name"
                        class={classes!(invalid(InquiryField::Name))}
                        value={input.name.clone()}
                        oninput={on_input(InquiryField::Name)}
                    />
                    { field_error(errors, InquiryField::Name) }
                </div>

                <div class="form-field">
                    <label for="phone">{"Phone Number *"}</label>
                    <input
                        id="phone"
                        type="tel"
                        placeholder="Enter your phone number"
                        class={classes!(invalid(InquiryField::Phone))}
                        value={input.phone.clone()}
                        oninput={on_input(InquiryField::Phone)}
                    />
                    { field_error(errors, InquiryField::Phone) }
                </div>

                <div class="form-field">
                    <label for="treatment">{"Treatment Needed *"}</label>
                    <select
                        id="treatment"
                        class={classes!(invalid(InquiryField::Treatment))}
                        onchange={on_treatment}
                    >
                        <option value="" selected={input.treatment.is_empty()} disabled=true>
                            {"Select a service..."}
                        </option>
                        <option value={GENERAL_CONSULTATION} selected={input.treatment == GENERAL_CONSULTATION}>
                            {GENERAL_CONSULTATION}
                        </option>
                        {
                            catalog.display_names().map(|name| html! {
                                <option key={name} value={name} selected={input.treatment == name}>
                                    {name}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                    { field_error(errors, InquiryField::Treatment) }
                </div>

                <div class="form-field">
                    <label for="message">{"Message (Optional)"}</label>
                    <textarea
                        id="message"
                        rows="4"
                        placeholder="Tell us about your condition or any specific concerns..."
                        class={classes!(invalid(InquiryField::Message))}
                        value={input.message.clone()}
                        oninput={on_message}
                    />
                    { field_error(errors, InquiryField::Message) }
                </div>

                <button type="submit" class="submit-button">{"Submit & Open WhatsApp"}</button>
            </form>
            if let Some(url) = (*fallback).as_ref() {
                <p class="launch-fallback">
                    {"WhatsApp didn't open? "}
                    <a href={url.clone()} target="_blank" rel="noopener">{"Tap here to continue"}</a>
                </p>
            }
            <Toast message={(*toast).clone()} {on_dismiss} />
            <style>
            {r#".contact-form-card {
                background: #fff;
                border: 1px solid #e5e7eb;
                border-radius: 16px;
                padding: 2rem;
            }
            .contact-form-card h2 {
                font-size: 1.5rem;
                margin-bottom: 0.5rem;
            }
            .form-intro {
                color: #6b7280;
                margin-bottom: 1.5rem;
            }
            .contact-form {
                display: flex;
                flex-direction: column;
                gap: 1.25rem;
            }
            .form-field label {
                display: block;
                font-size: 0.875rem;
                font-weight: 500;
                margin-bottom: 0.5rem;
            }
            .form-field input,
            .form-field select,
            .form-field textarea {
                width: 100%;
                padding: 0.75rem 1rem;
                border: 1px solid #d1d5db;
                border-radius: 12px;
                font: inherit;
            }
            .form-field .invalid {
                border-color: #dc2626;
            }
            .field-error {
                color: #dc2626;
                font-size: 0.875rem;
                margin-top: 0.25rem;
            }
            .submit-button {
                padding: 0.9rem;
                border: none;
                border-radius: 12px;
                background: #25D366;
                color: #fff;
                font-weight: 600;
                cursor: pointer;
            }
            .launch-fallback {
                margin-top: 1rem;
                color: #6b7280;
            }
            .launch-fallback a {
                color: #0f766e;
            }"#}
            </style>
        </div>
    }
}
