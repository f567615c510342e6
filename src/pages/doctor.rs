use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::DOCTORS;
use crate::Route;

#[function_component(Doctor)]
pub fn doctor() -> Html {
    html! {
        <div class="page doctor-page">
            <section class="page-hero">
                <span class="pill">{"Our Team"}</span>
                <h1>{"Meet Our Physiotherapists"}</h1>
                <p>{"Qualified, experienced and caring. Our team brings decades of combined practice to every session."}</p>
            </section>

            <section class="page-section">
                <div class="card-grid">
                    {
                        DOCTORS.iter().map(|d| html! {
                            <div class="doctor-card" key={d.name}>
                                <img src={d.image} alt={d.name} loading="lazy" />
                                <h3>{d.name}</h3>
                                <p class="doctor-position">{d.position}</p>
                                <p class="doctor-experience">{d.experience}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="doctor-cta">
                    <Link<Route> to={Route::Contact} classes="cta-button">
                        {"Book a consultation"}
                    </Link<Route>>
                </div>
            </section>
            <style>
            {r#".doctor-card img {
                width: 100%;
                aspect-ratio: 3 / 4;
                object-fit: cover;
                border-radius: 16px;
            }
            .doctor-position {
                color: #0f766e;
                font-weight: 500;
            }
            .doctor-experience {
                color: #6b7280;
                font-size: 0.875rem;
            }
            .doctor-cta {
                text-align: center;
                margin-top: 3rem;
            }"#}
            </style>
        </div>
    }
}
