use yew::prelude::*;
use web_sys::MouseEvent;

use crate::inquiry::deep_link::{DeepLink, QuickEnquiry};
use crate::inquiry::launcher::{open_or_log, BrowserOpener};

/// Floating chat button shown on every page.
#[function_component(WhatsAppButton)]
pub fn whatsapp_button() -> Html {
    let onclick = Callback::from(|_: MouseEvent| {
        open_or_log(&BrowserOpener, &DeepLink::quick(QuickEnquiry::General).url());
    });

    html! {
        <>
            <button class="whatsapp-float" aria-label="Chat on WhatsApp" {onclick}>
                <img src="/images/whatsapp.svg" alt="WhatsApp" />
            </button>
            <style>
            {r#".whatsapp-float {
                position: fixed;
                bottom: 1.5rem;
                right: 1.5rem;
                width: 3.5rem;
                height: 3.5rem;
                border: none;
                border-radius: 50%;
                background: #25D366;
                box-shadow: 0 8px 24px rgba(37, 211, 102, 0.4);
                display: flex;
                align-items: center;
                justify-content: center;
                cursor: pointer;
                z-index: 50;
                transition: transform 0.2s ease;
            }
            .whatsapp-float:hover {
                transform: scale(1.1);
            }
            .whatsapp-float img {
                width: 1.75rem;
                height: 1.75rem;
            }"#}
            </style>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct EnquireButtonProps {
    pub label: AttrValue,
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Opens WhatsApp with `text` already typed.
#[function_component(EnquireButton)]
pub fn enquire_button(props: &EnquireButtonProps) -> Html {
    let onclick = {
        let url = DeepLink::whatsapp(props.text.to_string()).url();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open_or_log(&BrowserOpener, &url);
        })
    };

    html! {
        <button class={classes!("enquire-button", props.class.clone())} {onclick}>
            {&props.label}
        </button>
    }
}
