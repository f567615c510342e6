use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page not-found-page">
            <section class="page-hero">
                <h1>{"404"}</h1>
                <p>{"Oops! The page you are looking for does not exist."}</p>
                <Link<Route> to={Route::Home} classes="cta-button">{"Return to Home"}</Link<Route>>
            </section>
        </div>
    }
}
