use yew::prelude::*;
use gloo_timers::callback::Timeout;

const TOAST_MILLIS: u32 = 3_000;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<AttrValue>,
    pub on_dismiss: Callback<()>,
}

/// Short confirmation that hides itself after a few seconds.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |message: &Option<AttrValue>| {
                let timeout = message
                    .as_ref()
                    .map(|_| Timeout::new(TOAST_MILLIS, move || on_dismiss.emit(())));
                // dropping the handle cancels a pending dismiss
                move || drop(timeout)
            },
            props.message.clone(),
        );
    }

    match &props.message {
        Some(message) => html! {
            <div class="toast toast-success" role="status">
                {message}
                <style>
                {r#".toast {
                    position: fixed;
                    bottom: 6rem;
                    left: 50%;
                    transform: translateX(-50%);
                    padding: 0.9rem 1.5rem;
                    border-radius: 12px;
                    background: #14532d;
                    color: #fff;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);
                    z-index: 1000;
                }"#}
                </style>
            </div>
        },
        None => html! {},
    }
}
