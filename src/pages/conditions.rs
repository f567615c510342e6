use yew::prelude::*;
use web_sys::MouseEvent;
use gloo_timers::callback::Timeout;

use crate::catalog::data::{find_condition, hash_anchor, CONDITIONS};
use crate::catalog::filter::{categories, filter_by_category, ALL_CATEGORIES};
use crate::components::book_button::BookButton;
use crate::components::whatsapp_button::EnquireButton;
use crate::inquiry::deep_link::QuickEnquiry;

#[function_component(Conditions)]
pub fn conditions() -> Html {
    let active_category = use_state(|| ALL_CATEGORIES);
    let highlighted = use_state(|| None::<&'static str>);

    // /conditions#sports-injuries highlights that card and scrolls it into view
    {
        let highlighted = highlighted.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    let hash = window.location().hash().unwrap_or_default();
                    if let Some(condition) = hash_anchor(&hash).and_then(find_condition) {
                        highlighted.set(Some(condition.id));
                        let id = condition.id;
                        Timeout::new(100, move || {
                            if let Some(element) = window.document().and_then(|doc| doc.get_element_by_id(id)) {
                                element.scroll_into_view_with_bool(true);
                            }
                        })
                        .forget();
                    }
                }
                || ()
            },
            (),
        );
    }

    let tabs = categories(CONDITIONS);
    let visible = filter_by_category(CONDITIONS, *active_category);

    html! {
        <div class="page conditions-page">
            <section class="page-hero">
                <span class="pill">{"Conditions We Treat"}</span>
                <h1>{"Expert Care for Your Condition"}</h1>
                <p>{"We specialize in treating a wide range of conditions. Learn about how physiotherapy can help your specific situation and when to seek treatment."}</p>
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

                <div class="condition-list">
                    {
                        visible.into_iter().map(|condition| html! {
                            <article
                                id={condition.id}
                                key={condition.id}
                                class={classes!("condition-card", (*highlighted == Some(condition.id)).then(|| "highlighted"))}
                            >
                                <span class="card-category">{condition.category}</span>
                                <h3>{condition.name}</h3>
                                <p>{condition.description}</p>
                                <div class="condition-columns">
                                    <div>
                                        <h4>{"Common Symptoms"}</h4>
                                        <ul>
                                            { for condition.symptoms.iter().map(|s| html! { <li>{*s}</li> }) }
                                        </ul>
                                    </div>
                                    <div>
                                        <h4>{"How We Help"}</h4>
                                        <p>{condition.how_we_help}</p>
                                        <h4>{"When to Consult"}</h4>
                                        <p>{condition.when_to_consult}</p>
                                    </div>
                                </div>
                                <div class="card-actions">
                                    <BookButton treatment={condition.name} />
                                    <EnquireButton
                                        label="Enquire on WhatsApp"
                                        text={QuickEnquiry::Condition(condition.name).text()}
                                    />
                                </div>
                            </article>
                        }).collect::<Html>()
                    }
                </div>
            </section>
            <style>
            {r#".condition-card.highlighted {
                border-color: #0d9488;
                box-shadow: 0 0 0 3px #ccfbf1;
            }
            .condition-list {
                display: flex;
                flex-direction: column;
                gap: 2rem;
            }
            .condition-columns {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                gap: 2rem;
                margin: 1.5rem 0;
            }"#}
            </style>
        </div>
    }
}
