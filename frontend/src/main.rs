use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod effects;
mod models;
mod components {
    pub mod accordion;
    pub mod form;
    pub mod nav;
    pub mod results;
    pub mod upload;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod detection;
    pub mod home;
    pub mod not_found;
}

use components::nav::Nav;
use pages::{
    about::About,
    contact::Contact,
    detection::Detection,
    home::Home,
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/detection")]
    Detection,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/404")]
    #[not_found]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Detection => {
            info!("Rendering Detection page");
            html! { <Detection /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
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
            <footer class="footer">
                <p>{"© PawScript. Diet guidance is not a substitute for veterinary care."}</p>
            </footer>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
