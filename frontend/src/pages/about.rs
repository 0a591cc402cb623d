use yew::prelude::*;

use crate::config::PARALLAX_RATE;
use crate::effects::{use_parallax, use_scroll_reveal};

const VALUES: [(&str, &str, &str); 3] = [
    ("fas fa-heart", "Care First", "Every recommendation starts from your dog's wellbeing."),
    ("fas fa-user-md", "Vet Aligned", "We complement your veterinarian's advice, never replace it."),
    ("fas fa-lock", "Private", "Uploaded prescriptions are deleted as soon as they are analyzed."),
];

const TEAM: [(&str, &str); 3] = [
    ("Dr. Maya Lindqvist", "Veterinary Nutritionist"),
    ("Jonas Park", "Engineering"),
    ("Aiko Tanaka", "Product Design"),
];

#[function_component(About)]
pub fn about() -> Html {
    let hero_transform = use_parallax(PARALLAX_RATE);
    let page_ref = use_node_ref();
    use_scroll_reveal(page_ref.clone(), ".value-card, .team-member");

    html! {
        <div class="about-page" ref={page_ref}>
            <section class="about-hero" style={format!("transform: {};", hero_transform)}>
                <h1>{"About PawScript"}</h1>
                <p>{"We help dog owners feed their companions well while they recover."}</p>
            </section>

            <section class="values">
                <h2>{"What We Value"}</h2>
                <div class="values-grid">
                    { for VALUES.iter().map(|(icon, title, body)| html! {
                        <div class="value-card">
                            <i class={*icon}></i>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="team">
                <h2>{"The Team"}</h2>
                <div class="team-grid">
                    { for TEAM.iter().map(|(name, role)| html! {
                        <div class="team-member">
                            <i class="fas fa-user-circle"></i>
                            <h3>{*name}</h3>
                            <p>{*role}</p>
                        </div>
                    }) }
                </div>
            </section>
        </div>
    }
}
