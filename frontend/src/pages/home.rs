use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::PARALLAX_RATE;
use crate::effects::{use_parallax, use_scroll_reveal, use_typing_effect};
use crate::Route;

const HEADLINE: &str = "Smarter Diets for Healthier Dogs";

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "fas fa-file-prescription",
        title: "Prescription Scanning",
        body: "Upload a photo or PDF of your vet's prescription and we pick out the medications.",
    },
    Feature {
        icon: "fas fa-bone",
        title: "Tailored Diet Plans",
        body: "Get food suggestions that work alongside your dog's treatment, not against it.",
    },
    Feature {
        icon: "fas fa-clock",
        title: "Feeding Schedules",
        body: "A daily routine that lines up meals with medication times.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    let headline = use_typing_effect(AttrValue::Static(HEADLINE));
    let hero_transform = use_parallax(PARALLAX_RATE);
    let page_ref = use_node_ref();
    use_scroll_reveal(page_ref.clone(), ".feature-card");

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="home-page" ref={page_ref}>
            <section class="hero" style={format!("transform: {};", hero_transform)}>
                <div class="hero-content">
                    <h1>{headline}</h1>
                    <p class="hero-subtitle">
                        {"Turn your dog's prescription into a diet plan in seconds."}
                    </p>
                    <Link<Route> to={Route::Detection} classes="btn btn-primary">
                        <i class="fas fa-upload"></i>{" Analyze a Prescription"}
                    </Link<Route>>
                </div>
            </section>

            <section class="features">
                <h2>{"How PawScript Helps"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().map(|f| html! {
                        <div class="feature-card">
                            <i class={f.icon}></i>
                            <h3>{f.title}</h3>
                            <p>{f.body}</p>
                        </div>
                    }) }
                </div>
            </section>
        </div>
    }
}
