use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::data::SERVICES;
use crate::config;
use crate::content::{current_year, OPENING_HOURS};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h4>{config::CLINIC_NAME}</h4>
                    <p>{"Restoring movement and relieving pain in Kadakkal since 2006."}</p>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::About}>{"About Us"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Services}>{"Services"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Conditions}>{"Conditions"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Doctor}>{"Our Doctors"}</Link<Route>></li>
                        <li><Link<Route> to={Route::SportsInjuryRehabilitation}>{"Sports Injury Rehab"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Faq}>{"FAQ"}</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Services"}</h4>
                    <ul>
                        {
                            SERVICES.iter().take(5).map(|s| html! {
                                <li key={s.id}>
                                    <Link<Route> to={Route::Services}>{s.title}</Link<Route>>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
                <div>
                    <h4>{"Visit Us"}</h4>
                    <p>{config::ADDRESS_LINE_1}<br />{config::ADDRESS_LINE_2}</p>
                    {
                        OPENING_HOURS.iter().map(|h| html! {
                            <p key={h.days}>{format!("{}: {}", h.days, h.hours)}</p>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <p class="footer-copyright">
                {format!("© {} {}. All rights reserved.", current_year(), config::CLINIC_NAME)}
            </p>
            <style>
            {r#".site-footer {
                background: #0f172a;
                color: #cbd5e1;
                padding: 4rem 2rem 2rem;
            }
            .footer-grid {
                max-width: 1200px;
                margin: 0 auto;
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                gap: 2rem;
            }
            .site-footer h4 {
                color: #fff;
                margin-bottom: 1rem;
            }
            .site-footer ul {
                list-style: none;
                padding: 0;
            }
            .site-footer a {
                color: #cbd5e1;
                text-decoration: none;
            }
            .footer-copyright {
                text-align: center;
                margin-top: 3rem;
                font-size: 0.875rem;
                color: #64748b;
            }"#}
            </style>
        </footer>
    }
}
