use yew::prelude::*;

use crate::components::accordion::{FaqEntry, FaqList};
use crate::components::form::{FieldKind, ValidatedField};
use crate::config::PARALLAX_RATE;
use crate::effects::{use_parallax, use_scroll_reveal};

fn faq_entries() -> Vec<FaqEntry> {
    [
        (
            "What file types can I upload?",
            "PDF, PNG and JPG prescriptions up to 16 MB.",
        ),
        (
            "Does PawScript replace my vet?",
            "No. The diet plan is a starting point to discuss with your veterinarian.",
        ),
        (
            "Is my prescription stored?",
            "No. The file is removed from our server right after it is analyzed.",
        ),
        (
            "Why were no medications detected?",
            "Blurry scans and handwritten notes are hard to read. Try a sharper photo or the original PDF.",
        ),
    ]
    .into_iter()
    .map(|(question, answer)| FaqEntry {
        question: AttrValue::Static(question),
        answer: AttrValue::Static(answer),
    })
    .collect()
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let hero_transform = use_parallax(PARALLAX_RATE);
    let page_ref = use_node_ref();
    use_scroll_reveal(page_ref.clone(), ".support-option, .faq-item");
    let entries = use_memo(|_| faq_entries(), ());

    // Submission is handled elsewhere; fields only give inline feedback.
    let on_submit = Callback::from(|e: SubmitEvent| e.prevent_default());

    html! {
        <div class="contact-page" ref={page_ref}>
            <section class="contact-hero" style={format!("transform: {};", hero_transform)}>
                <h1>{"Get in Touch"}</h1>
                <p>{"Questions about your results? We're happy to help."}</p>
            </section>

            <section class="contact-content">
                <div class="support-options">
                    <div class="support-option">
                        <i class="fas fa-envelope"></i>
                        <h3>{"Email"}</h3>
                        <p>{"support@pawscript.example"}</p>
                    </div>
                    <div class="support-option">
                        <i class="fas fa-clock"></i>
                        <h3>{"Response Time"}</h3>
                        <p>{"Within 24 hours"}</p>
                    </div>
                </div>

                <form class="contact-form" onsubmit={on_submit}>
                    <ValidatedField name="name" label="Name" kind={FieldKind::Text} required=true placeholder="Your name" />
                    <ValidatedField name="email" label="Email" kind={FieldKind::Email} required=true placeholder="you@example.com" />
                    <ValidatedField name="subject" label="Subject" kind={FieldKind::Text} placeholder="What is this about?" />
                    <ValidatedField name="message" label="Message" kind={FieldKind::TextArea} required=true />
                    <button type="submit" class="btn btn-primary">{"Send Message"}</button>
                </form>
            </section>

            <section class="faq">
                <h2>{"Frequently Asked Questions"}</h2>
                <FaqList entries={(*entries).clone()} />
            </section>
        </div>
    }
}
