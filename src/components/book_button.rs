use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;

use crate::inquiry::prefill::{ServicePrefill, ServiceQuery};
use crate::Route;

#[derive(Clone, Copy, PartialEq)]
pub enum Handoff {
    /// `?service=` on the contact URL, shareable.
    Query,
    /// History state only, keeps the URL clean.
    State,
}

#[derive(Properties, PartialEq)]
pub struct BookButtonProps {
    pub treatment: AttrValue,
    #[prop_or(Handoff::Query)]
    pub handoff: Handoff,
    #[prop_or(AttrValue::Static("Book this treatment"))]
    pub label: AttrValue,
}

/// Takes the visitor to the booking form with `treatment` preselected.
#[function_component(BookButton)]
pub fn book_button(props: &BookButtonProps) -> Html {
    let navigator = use_navigator();

    let onclick = {
        let treatment = props.treatment.to_string();
        let handoff = props.handoff;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let Some(navigator) = navigator.as_ref() else {
                log::warn!("No router available to open the booking form");
                return;
            };
            let result = match handoff {
                Handoff::Query => navigator.push_with_query(
                    &Route::Contact,
                    &ServiceQuery { service: Some(treatment.clone()) },
                ),
                Handoff::State => {
                    navigator.push_with_state(&Route::Contact, ServicePrefill { service: treatment.clone() });
                    Ok(())
                }
            };
            if let Err(e) = result {
                log::warn!("Could not open booking form for {}: {:?}", treatment, e);
            }
        })
    };

    html! {
        <button class="book-button" {onclick}>{&props.label}</button>
    }
}
