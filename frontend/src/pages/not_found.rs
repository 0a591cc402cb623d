use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <i class="fas fa-dog"></i>
            <h1>{"404"}</h1>
            <p>{"This page wandered off."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back Home"}</Link<Route>>
        </div>
    }
}
