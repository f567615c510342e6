use yew::prelude::*;

use crate::config;
use crate::content::{is_open_now, OPENING_HOURS};

#[function_component(ContactDetails)]
pub fn contact_details() -> Html {
    let open_now = use_state(is_open_now);

    html! {
        <div class="contact-details">
            <div class="contact-detail">
                <h3>{"Address"}</h3>
                <p>{config::ADDRESS_LINE_1}<br />{config::ADDRESS_LINE_2}</p>
            </div>
            <div class="contact-detail">
                <h3>{"Phone"}</h3>
                <a href={format!("tel:{}", config::PHONE_RAW)}>{config::PHONE_DISPLAY}</a>
            </div>
            <div class="contact-detail">
                <h3>{"Email"}</h3>
                <a href={format!("mailto:{}", config::EMAIL)}>{config::EMAIL}</a>
            </div>
            <div class="contact-detail">
                <h3>
                    {"Working Hours "}
                    <span class={classes!("open-badge", if *open_now { "open" } else { "closed" })}>
                        {if *open_now { "Open now" } else { "Closed now" }}
                    </span>
                </h3>
                {
                    OPENING_HOURS.iter().map(|h| html! {
                        <p key={h.days}>{format!("{}: {}", h.days, h.hours)}</p>
                    }).collect::<Html>()
                }
            </div>
            <style>
            {r#".contact-details {
                display: flex;
                flex-direction: column;
                gap: 1.5rem;
            }
            .contact-detail h3 {
                font-size: 1rem;
                margin-bottom: 0.25rem;
            }
            .contact-detail a {
                color: #0f766e;
                text-decoration: none;
            }
            .open-badge {
                font-size: 0.75rem;
                padding: 0.15rem 0.6rem;
                border-radius: 999px;
                margin-left: 0.5rem;
            }
            .open-badge.open {
                background: #dcfce7;
                color: #166534;
            }
            .open-badge.closed {
                background: #fee2e2;
                color: #991b1b;
            }"#}
            </style>
        </div>
    }
}
