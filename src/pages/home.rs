use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::data::SERVICES;
use crate::components::associates::Associates;
use crate::components::book_button::{BookButton, Handoff};
use crate::components::contact_details::ContactDetails;
use crate::components::contact_form::ContactForm;
use crate::components::testimonials::Testimonials;
use crate::content::DOCTORS;
use crate::Route;

const WHY_CHOOSE_US: &[(&str, &str)] = &[
    ("Experienced Team", "Over two decades of physiotherapy practice in Kadakkal."),
    ("Personalized Plans", "Every treatment plan starts from a thorough assessment."),
    ("Modern Equipment", "Electrotherapy, manual therapy and exercise rehab under one roof."),
    ("Care at Home", "PHYSIO@HOME brings treatment to patients who cannot travel."),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <section class="hero">
                <span class="pill">{"Physiotherapy & Rehabilitation"}</span>
                <h1>{"Move Better. "}<span class="accent">{"Live Pain-Free."}</span></h1>
                <p>
                    {"Expert physiotherapy in Kadakkal for back and neck pain, sports injuries, stroke recovery and post-surgical rehab."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Contact} classes="cta-button">{"Book an Appointment"}</Link<Route>>
                    <Link<Route> to={Route::Services} classes="secondary-button">{"Our Services"}</Link<Route>>
                </div>
            </section>

            <section class="home-section">
                <h2>{"Our Services"}</h2>
                <div class="card-grid">
                    {
                        SERVICES.iter().take(6).map(|s| html! {
                            <div class="service-card" key={s.id}>
                                <h3>{s.title}</h3>
                                <p>{s.description}</p>
                                <BookButton treatment={s.title} handoff={Handoff::State} label="Book now" />
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <Link<Route> to={Route::Services} classes="text-link">{"View all services →"}</Link<Route>>
            </section>

            <section class="home-section muted">
                <h2>{"Why Choose Us"}</h2>
                <div class="card-grid">
                    {
                        WHY_CHOOSE_US.iter().map(|(title, body)| html! {
                            <div class="value-card" key={*title}>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="home-section">
                <h2>{"Meet Our Physiotherapists"}</h2>
                <div class="card-grid">
                    {
                        DOCTORS.iter().map(|d| html! {
                            <div class="doctor-card" key={d.name}>
                                <img src={d.image} alt={d.name} />
                                <h3>{d.name}</h3>
                                <p>{d.position}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <Testimonials />

            <Associates />

            <section id="contact" class="home-section contact-section">
                <div>
                    <h2>{"Start Your Recovery Today"}</h2>
                    <p>{"Have questions or ready to book? Reach out via WhatsApp for the quickest response."}</p>
                    <ContactDetails />
                </div>
                <ContactForm />
            </section>
            <style>
            {r#".home-page .hero {
                padding: 8rem 2rem 5rem;
                max-width: 1100px;
                margin: 0 auto;
            }
            .home-page h1 {
                font-size: 3.5rem;
                line-height: 1.1;
                margin-bottom: 1.5rem;
            }
            .accent {
                color: #0d9488;
            }
            .hero-actions {
                display: flex;
                gap: 1rem;
                margin-top: 2rem;
                flex-wrap: wrap;
            }
            .home-section {
                padding: 4rem 2rem;
                max-width: 1200px;
                margin: 0 auto;
            }
            .home-section.muted {
                background: #f8fafc;
                max-width: none;
            }
            .section-lead {
                color: #64748b;
                font-size: 1.125rem;
                max-width: 640px;
                margin-bottom: 2.5rem;
            }
            .contact-section {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                gap: 3rem;
            }
            .doctor-card img {
                width: 100%;
                border-radius: 16px;
            }
            @media (max-width: 768px) {
                .home-page h1 {
                    font-size: 2.4rem;
                }
            }"#}
            </style>
        </div>
    }
}
