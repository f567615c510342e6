use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const PROGRAMS: &[(&str, &str)] = &[
    ("Injury Assessment", "Comprehensive evaluation of sports injuries to develop targeted treatment plans"),
    ("Performance Recovery", "Advanced techniques to restore athletic performance and prevent future injuries"),
    ("Speed & Agility", "Specialized training to improve speed, agility, and explosive power"),
    ("Injury Prevention", "Education and training programs to minimize risk of future sports injuries"),
];

const PROCESS: &[(&str, &str)] = &[
    ("Initial Assessment", "Thorough evaluation of injury, movement patterns, and functional limitations"),
    ("Customized Treatment", "Personalized rehabilitation program with progressive exercises and therapies"),
    ("Return to Sport", "Gradual progression back to sports activities with injury prevention strategies"),
];

/// Landing page for athletes, linked from ads and the footer.
#[function_component(SportsInjuryRehabilitation)]
pub fn sports_injury_rehabilitation() -> Html {
    html! {
        <div class="page sports-page">
            <section class="page-hero">
                <h1>{"Sports Injury Rehabilitation"}</h1>
                <p>
                    {"Specialized recovery programs for athletes to restore strength, flexibility, and peak performance after sports-related injuries."}
                </p>
                <Link<Route> to={Route::Contact} classes="cta-button">{"Book Consultation →"}</Link<Route>>
            </section>

            <section class="page-section">
                <h2>{"Our Sports Rehabilitation Services"}</h2>
                <p>{"Comprehensive treatment plans designed specifically for athletes and sports enthusiasts"}</p>
                <div class="card-grid">
                    {
                        PROGRAMS.iter().map(|(title, body)| html! {
                            <div class="value-card" key={*title}>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="page-section">
                <h2>{"Our Treatment Process"}</h2>
                <p>{"A systematic approach to ensure complete recovery and optimal performance"}</p>
                <ol class="process-steps">
                    {
                        PROCESS.iter().enumerate().map(|(i, (title, body))| html! {
                            <li key={*title}>
                                <span class="step-number">{i + 1}</span>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </li>
                        }).collect::<Html>()
                    }
                </ol>
            </section>

            <section class="page-section sports-cta">
                <h2>{"Ready to Get Back in the Game?"}</h2>
                <p>{"Let our expert sports rehabilitation team help you recover stronger and faster."}</p>
                <div class="card-actions">
                    <Link<Route> to={Route::Contact} classes="cta-button">{"Schedule Consultation →"}</Link<Route>>
                    <Link<Route> to={Route::Services} classes="secondary-button">{"View All Services"}</Link<Route>>
                </div>
            </section>
            <style>
            {r#".process-steps {
                list-style: none;
                padding: 0;
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                gap: 2rem;
            }
            .step-number {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                width: 3rem;
                height: 3rem;
                border-radius: 50%;
                background: #0d9488;
                color: #fff;
                font-weight: 700;
            }
            .sports-cta {
                text-align: center;
            }
            .sports-cta .card-actions {
                justify-content: center;
            }"#}
            </style>
        </div>
    }
}
