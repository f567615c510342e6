use yew::prelude::*;
use web_sys::MouseEvent;

use crate::catalog::data::{find_service, hash_anchor, SERVICES};
use crate::catalog::filter::{categories, filter_by_category, ALL_CATEGORIES};
use crate::components::book_button::BookButton;
use crate::components::whatsapp_button::EnquireButton;
use crate::inquiry::deep_link::QuickEnquiry;

#[function_component(Services)]
pub fn services() -> Html {
    let active_category = use_state(|| ALL_CATEGORIES);
    let expanded = use_state(|| None::<&'static str>);

    // /services#dry-needling opens that card
    {
        let expanded = expanded.clone();
        use_effect_with_deps(
            move |_| {
                let hash = web_sys::window().and_then(|w| w.location().hash().ok());
                if let Some(service) = hash.as_deref().and_then(hash_anchor).and_then(find_service) {
                    expanded.set(Some(service.id));
                }
                || ()
            },
            (),
        );
    }

    let tabs = categories(SERVICES);
    let visible = filter_by_category(SERVICES, *active_category);

    html! {
        <div class="page services-page">
            <section class="page-hero">
                <span class="pill">{"Our Services"}</span>
                <h1>{"Comprehensive Physiotherapy Care"}</h1>
                <p>{"We offer a wide range of specialized treatments to address your unique needs and help you achieve optimal physical health and wellness."}</p>
            </section>

            <section class="page-section">
                <div class="filter-tabs">
                    {
                        tabs.into_iter().map(|category| {
                            let onclick = {
                                let active_category = active_category.clone();
                                Callback::from(move |_: MouseEvent| active_category.set(category))
                            };
                            html! {
                                <button
                                    key={category}
                                    class={classes!("filter-tab", (*active_category == category).then(|| "active"))}
                                    {onclick}
                                >
                                    {category}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="card-grid">
                    {
                        visible.into_iter().map(|service| {
                            let is_open = *expanded == Some(service.id);
                            let toggle = {
                                let expanded = expanded.clone();
                                let id = service.id;
                                Callback::from(move |_: MouseEvent| {
                                    expanded.set(if is_open { None } else { Some(id) });
                                })
                            };
                            html! {
                                <article id={service.id} key={service.id} class={classes!("service-card", is_open.then(|| "open"))}>
                                    <span class="card-category">{service.category}</span>
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                    <button class="text-link" onclick={toggle}>
                                        {if is_open { "Show less" } else { "Learn more" }}
                                    </button>
                                    if is_open {
                                        <div class="card-details">
                                            <h4>{"Benefits"}</h4>
                                            <ul>
                                                { for service.benefits.iter().map(|b| html! { <li>{*b}</li> }) }
                                            </ul>
                                            <h4>{"Helps with"}</h4>
                                            <ul>
                                                { for service.conditions.iter().map(|c| html! { <li>{*c}</li> }) }
                                            </ul>
                                        </div>
                                    }
                                    <div class="card-actions">
                                        <BookButton treatment={service.title} />
                                        <EnquireButton
                                            label="Enquire on WhatsApp"
                                            text={QuickEnquiry::Service(service.title).text()}
                                        />
                                    </div>
                                </article>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </section>
        </div>
    }
}
