use yew::prelude::*;

use crate::catalog::data::PARTNERS;
use crate::components::book_button::{BookButton, Handoff};

/// Sister businesses. "Learn More" opens the booking form with the partner
/// preselected and a referral message filled in.
#[function_component(Associates)]
pub fn associates() -> Html {
    html! {
        <section class="home-section associates-section">
            <span class="pill">{"Wellness Partners"}</span>
            <h2>{"Our "}<span class="accent">{"Associates"}</span></h2>
            <p class="section-lead">
                {"Expanding our commitment to your health through our specialized sister concerns."}
            </p>
            <div class="associate-grid">
                {
                    PARTNERS.iter().map(|partner| html! {
                        <article class="associate-card" key={partner.id}>
                            <div class="associate-logo">
                                <img src={partner.logo} alt={format!("{} logo", partner.name)} loading="lazy" />
                            </div>
                            <h3>{partner.name}</h3>
                            <p class="associate-tagline">{partner.tagline}</p>
                            <p>{partner.description}</p>
                            <BookButton
                                treatment={partner.name}
                                handoff={Handoff::Query}
                                label="Learn More →"
                            />
                        </article>
                    }).collect::<Html>()
                }
            </div>
            <style>
            {r#".associate-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                gap: 2rem;
                max-width: 1000px;
            }
            .associate-card {
                display: flex;
                flex-direction: column;
                border: 1px solid #f1f5f9;
                border-radius: 2rem;
                padding: 2rem;
                background: #fff;
                box-shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
            }
            .associate-card .book-button {
                margin-top: auto;
                align-self: flex-start;
            }
            .associate-logo {
                display: flex;
                align-items: center;
                justify-content: center;
                min-height: 140px;
                border: 1px solid #f1f5f9;
                border-radius: 1rem;
                margin-bottom: 1.5rem;
            }
            .associate-logo img {
                max-height: 110px;
                width: auto;
            }
            .associate-tagline {
                font-size: 0.8rem;
                font-weight: 700;
                text-transform: uppercase;
                letter-spacing: 0.1em;
                color: #0f766e;
            }"#}
            </style>
        </section>
    }
}
