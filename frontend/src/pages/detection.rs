use yew::prelude::*;

use crate::components::upload::UploadZone;

#[function_component(Detection)]
pub fn detection() -> Html {
    html! {
        <div class="detection-page">
            <section class="detection-hero">
                <h1><i class="fas fa-file-medical"></i>{" Prescription Analysis"}</h1>
                <p>{"Upload your dog's prescription to get medication details and a matching diet plan."}</p>
            </section>
            <section class="detection-content">
                <UploadZone />
                <p class="disclaimer">
                    {"Results are guidance only. Always confirm diet changes with your veterinarian."}
                </p>
            </section>
        </div>
    }
}
