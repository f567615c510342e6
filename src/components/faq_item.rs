use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};
use gloo_timers::callback::Timeout;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    pub id: AttrValue,
    pub children: Children,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    // Deep links like /faq#faq-3 open the matching answer
    {
        let is_open = is_open.clone();
        let id = props.id.clone();
        use_effect_with_deps(move |_| {
            if let Some(window) = web_sys::window() {
                if let Ok(hash) = window.location().hash() {
                    if hash == format!("#{}", id) {
                        is_open.set(true);
                        let timeout = Timeout::new(100, move || {
                            if let Some(element) = window.document().and_then(|doc| doc.get_element_by_id(&id)) {
                                element.scroll_into_view_with_bool(true);
                            }
                        });
                        timeout.forget();
                    }
                }
            }
            || ()
        }, ());
    }

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div id={props.id.clone()} class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}
