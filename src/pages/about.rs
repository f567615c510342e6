use yew::prelude::*;

use crate::content::{CORE_VALUES, MILESTONES};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="page about-page">
            <section class="page-hero">
                <span class="pill">{"About Us"}</span>
                <h1>{"Two Decades of Healing Hands"}</h1>
                <p>
                    {"Surya Kiran Physiotherapy began in Anchal in 2006 and has cared for more than ten thousand patients across Kollam district. We combine clinical expertise with genuine compassion to help every patient move freely again."}
                </p>
            </section>

            <section class="page-section">
                <h2>{"Our Journey"}</h2>
                <ol class="timeline">
                    {
                        MILESTONES.iter().map(|m| html! {
                            <li key={m.year}>
                                <span class="timeline-year">{m.year}</span>
                                <div>
                                    <h3>{m.title}</h3>
                                    <p>{m.description}</p>
                                </div>
                            </li>
                        }).collect::<Html>()
                    }
                </ol>
            </section>

            <section class="page-section">
                <h2>{"Our Values"}</h2>
                <div class="card-grid">
                    {
                        CORE_VALUES.iter().map(|(title, description)| html! {
                            <div class="value-card" key={*title}>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>
            <style>
            {r#".timeline {
                list-style: none;
                padding: 0;
                border-left: 2px solid #99f6e4;
            }
            .timeline li {
                display: flex;
                gap: 1.5rem;
                padding: 0 0 2rem 1.5rem;
            }
            .timeline-year {
                font-weight: 700;
                color: #0d9488;
                min-width: 3.5rem;
            }"#}
            </style>
        </div>
    }
}
