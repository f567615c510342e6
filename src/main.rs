use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod catalog {
    pub mod data;
    pub mod filter;
    pub mod treatments;
}
mod inquiry {
    pub mod deep_link;
    pub mod form;
    pub mod launcher;
    pub mod prefill;
    pub mod validation;
}
mod components {
    pub mod associates;
    pub mod book_button;
    pub mod contact_details;
    pub mod contact_form;
    pub mod faq_item;
    pub mod footer;
    pub mod testimonials;
    pub mod toast;
    pub mod whatsapp_button;
}
mod pages {
    pub mod about;
    pub mod conditions;
    pub mod contact;
    pub mod doctor;
    pub mod faq;
    pub mod home;
    pub mod not_found;
    pub mod services;
    pub mod sports_injury;
}

use components::{footer::Footer, whatsapp_button::WhatsAppButton};
use pages::{
    about::About,
    conditions::Conditions,
    contact::Contact,
    doctor::Doctor,
    faq::Faq,
    home::Home,
    not_found::NotFound,
    services::Services,
    sports_injury::SportsInjuryRehabilitation,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/conditions")]
    Conditions,
    #[at("/doctor")]
    Doctor,
    #[at("/faq")]
    Faq,
    #[at("/contact")]
    Contact,
    #[at("/sports-injury-rehabilitation")]
    SportsInjuryRehabilitation,
    #[not_found]
    #[at("/404")]
    NotFound,
}

const NAV_LINKS: &[(&str, Route)] = &[
    ("Home", Route::Home),
    ("About", Route::About),
    ("Doctor", Route::Doctor),
    ("Services", Route::Services),
    ("Conditions", Route::Conditions),
    ("FAQ", Route::Faq),
    ("Contact", Route::Contact),
];

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Conditions => {
            info!("Rendering Conditions page");
            html! { <Conditions /> }
        },
        Route::Doctor => {
            info!("Rendering Doctor page");
            html! { <Doctor /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::SportsInjuryRehabilitation => {
            info!("Rendering Sports Injury Rehabilitation page");
            html! { <SportsInjuryRehabilitation /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_top = window
                        .as_ref()
                        .and_then(|w| w.document())
                        .and_then(|d| d.document_element())
                        .map(|e| e.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(scroll_top > 40);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = window.as_ref() {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window.as_ref() {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Surya Kiran"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        NAV_LINKS.iter().map(|(label, route)| html! {
                            <div key={*label} onclick={close_menu.clone()}>
                                <Link<Route> to={route.clone()} classes="nav-link">
                                    {*label}
                                </Link<Route>>
                            </div>
                        }).collect::<Html>()
                    }
                    <a href={format!("tel:{}", config::PHONE_RAW)} class="nav-call-button">
                        {config::PHONE_DISPLAY}
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
            <WhatsAppButton />
            <style>
            {r#"body {
                margin: 0;
                font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                color: #0f172a;
                background: #fff;
            }
            .top-nav {
                position: fixed;
                top: 0;
                width: 100%;
                z-index: 40;
                transition: background 0.3s ease, box-shadow 0.3s ease;
            }
            .top-nav.scrolled {
                background: rgba(255, 255, 255, 0.95);
                box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
            }
            .nav-content {
                max-width: 1200px;
                margin: 0 auto;
                padding: 1rem 2rem;
                display: flex;
                align-items: center;
                justify-content: space-between;
            }
            .nav-logo {
                font-weight: 800;
                font-size: 1.25rem;
                color: #0d9488;
                text-decoration: none;
            }
            .nav-right {
                display: flex;
                align-items: center;
                gap: 1.5rem;
            }
            .nav-link {
                color: #334155;
                text-decoration: none;
            }
            .nav-call-button {
                padding: 0.5rem 1rem;
                border-radius: 999px;
                background: #0d9488;
                color: #fff;
                text-decoration: none;
            }
            .burger-menu {
                display: none;
                background: none;
                border: none;
                cursor: pointer;
            }
            .burger-menu span {
                display: block;
                width: 24px;
                height: 2px;
                margin: 5px 0;
                background: #0f172a;
            }
            .pill {
                display: inline-block;
                padding: 0.35rem 1rem;
                border-radius: 999px;
                background: #ccfbf1;
                color: #0f766e;
                font-size: 0.875rem;
                margin-bottom: 1rem;
            }
            .page-hero {
                padding: 8rem 2rem 3rem;
                max-width: 1100px;
                margin: 0 auto;
            }
            .page-hero h1 {
                font-size: 3rem;
                margin-bottom: 1rem;
            }
            .page-section {
                padding: 2rem 2rem 4rem;
                max-width: 1200px;
                margin: 0 auto;
            }
            .card-grid {
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                gap: 1.5rem;
            }
            .service-card,
            .condition-card,
            .value-card,
            .doctor-card {
                border: 1px solid #e5e7eb;
                border-radius: 16px;
                padding: 1.5rem;
                background: #fff;
            }
            .card-category {
                font-size: 0.75rem;
                text-transform: uppercase;
                letter-spacing: 0.05em;
                color: #0f766e;
            }
            .card-actions {
                display: flex;
                gap: 0.75rem;
                flex-wrap: wrap;
                margin-top: 1rem;
            }
            .filter-tabs {
                display: flex;
                flex-wrap: wrap;
                gap: 0.5rem;
                margin-bottom: 2.5rem;
            }
            .filter-tab {
                padding: 0.6rem 1.25rem;
                border-radius: 999px;
                border: 1px solid #e5e7eb;
                background: #fff;
                cursor: pointer;
                font-weight: 600;
            }
            .filter-tab.active {
                background: #000;
                color: #fff;
            }
            .cta-button,
            .book-button {
                display: inline-block;
                padding: 0.75rem 1.5rem;
                border-radius: 999px;
                border: none;
                background: #0d9488;
                color: #fff;
                text-decoration: none;
                cursor: pointer;
                font-weight: 600;
            }
            .secondary-button,
            .enquire-button {
                display: inline-block;
                padding: 0.75rem 1.5rem;
                border-radius: 999px;
                border: 1px solid #25D366;
                background: #fff;
                color: #15803d;
                text-decoration: none;
                cursor: pointer;
                font-weight: 600;
            }
            .text-link {
                background: none;
                border: none;
                padding: 0;
                color: #0f766e;
                cursor: pointer;
                font-weight: 600;
                text-decoration: none;
            }
            @media (max-width: 900px) {
                .burger-menu {
                    display: block;
                }
                .nav-right {
                    display: none;
                }
                .nav-right.mobile-menu-open {
                    display: flex;
                    flex-direction: column;
                    position: absolute;
                    top: 100%;
                    left: 0;
                    right: 0;
                    padding: 1.5rem;
                    background: #fff;
                }
                .page-hero h1 {
                    font-size: 2.2rem;
                }
            }"#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::CLINIC_NAME);
    yew::Renderer::<App>::new().render();
}
