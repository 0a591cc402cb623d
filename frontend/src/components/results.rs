use yew::prelude::*;

use crate::models::{
    AnalysisResult, DietRecommendations, Medication, PrescriptionAnalysis, ScheduleEntry,
};

#[derive(Clone, PartialEq, Debug)]
pub enum Section {
    Error(String),
    Header {
        confidence: Option<u32>,
        analyzed_at: Option<String>,
        file_name: Option<String>,
    },
    Conditions(Vec<String>),
    Medications(Vec<Medication>),
    Instructions {
        duration: Option<String>,
        special: Vec<String>,
        notes: Vec<String>,
    },
    Diet(DietView),
}

#[derive(Clone, PartialEq, Debug)]
pub struct DietView {
    pub general: Vec<String>,
    pub foods: Vec<String>,
    pub avoid: Option<Vec<String>>,
    pub schedule: Vec<ScheduleEntry>,
    pub supplements: Option<Vec<String>>,
    pub hydration: Option<Vec<String>>,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ResultsView {
    pub sections: Vec<Section>,
}

fn non_empty(items: &[String]) -> Option<Vec<String>> {
    (!items.is_empty()).then(|| items.to_vec())
}

impl From<&DietRecommendations> for DietView {
    fn from(diet: &DietRecommendations) -> Self {
        DietView {
            general: diet.general_recommendations.clone(),
            foods: diet.food_suggestions.clone(),
            avoid: non_empty(&diet.foods_to_avoid),
            schedule: diet.feeding_schedule.entries().to_vec(),
            supplements: non_empty(&diet.supplements),
            hydration: non_empty(&diet.hydration_tips),
        }
    }
}

impl From<&AnalysisResult> for ResultsView {
    fn from(result: &AnalysisResult) -> Self {
        if let Some(message) = &result.error {
            return ResultsView {
                sections: vec![Section::Error(message.clone())],
            };
        }

        let missing = PrescriptionAnalysis::default();
        let analysis = result.prescription_analysis.as_ref().unwrap_or(&missing);
        let mut sections = vec![Section::Header {
            confidence: (analysis.confidence_score > 0).then_some(analysis.confidence_score),
            analyzed_at: result.analyzed_at(),
            file_name: result.uploaded_file.clone(),
        }];

        if !analysis.detected_conditions.is_empty() {
            sections.push(Section::Conditions(analysis.detected_conditions.clone()));
        }
        if !analysis.medications.is_empty() {
            sections.push(Section::Medications(analysis.medications.clone()));
        }

        let duration = Some(analysis.duration.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        if duration.is_some()
            || !analysis.special_instructions.is_empty()
            || !analysis.general_notes.is_empty()
        {
            sections.push(Section::Instructions {
                duration,
                special: analysis.special_instructions.clone(),
                notes: analysis.general_notes.clone(),
            });
        }

        if let Some(diet) = &result.diet_recommendations {
            sections.push(Section::Diet(DietView::from(diet)));
        }

        ResultsView { sections }
    }
}

fn food_grid(items: &[String], avoid: bool) -> Html {
    let icon = if avoid { "fas fa-times" } else { "fas fa-check" };
    html! {
        <div class="food-grid">
            { for items.iter().map(|food| html! {
                <div class={classes!("food-item", avoid.then(|| "avoid"))}>
                    <i class={icon}></i>
                    <span>{food}</span>
                </div>
            }) }
        </div>
    }
}

fn bullet_list(items: &[String]) -> Html {
    html! {
        <ul>
            { for items.iter().map(|item| html! { <li>{item}</li> }) }
        </ul>
    }
}

fn render_diet(diet: &DietView) -> Html {
    html! {
        <div class="result-section">
            <h3><i class="fas fa-utensils"></i>{" Tailored Diet Plan"}</h3>

            <div class="diet-section">
                <h4><i class="fas fa-heart"></i>{" General Recommendations"}</h4>
                { bullet_list(&diet.general) }
            </div>

            <div class="diet-section">
                <h4><i class="fas fa-thumbs-up"></i>{" Recommended Foods"}</h4>
                { food_grid(&diet.foods, false) }
            </div>

            if let Some(avoid) = &diet.avoid {
                <div class="diet-section">
                    <h4><i class="fas fa-ban"></i>{" Foods to Avoid"}</h4>
                    { food_grid(avoid, true) }
                </div>
            }

            <div class="diet-section">
                <h4><i class="fas fa-clock"></i>{" Feeding Schedule"}</h4>
                <div class="schedule-grid">
                    { for diet.schedule.iter().map(|entry| html! {
                        <div class="schedule-item">
                            <strong>{format!("{}:", entry.time)}</strong>{" "}{&entry.description}
                        </div>
                    }) }
                </div>
            </div>

            if let Some(supplements) = &diet.supplements {
                <div class="diet-section">
                    <h4><i class="fas fa-capsules"></i>{" Supplements"}</h4>
                    { bullet_list(supplements) }
                </div>
            }

            if let Some(hydration) = &diet.hydration {
                <div class="diet-section">
                    <h4><i class="fas fa-tint"></i>{" Hydration"}</h4>
                    { bullet_list(hydration) }
                </div>
            }
        </div>
    }
}

fn render_section(section: &Section) -> Html {
    match section {
        Section::Error(message) => html! {
            <div class="error-message">
                <i class="fas fa-exclamation-triangle"></i>
                <h3>{"Error"}</h3>
                <p>{message}</p>
            </div>
        },
        Section::Header { confidence, analyzed_at, file_name } => html! {
            <div class="results-header">
                <h2><i class="fas fa-file-medical-alt"></i>{" Prescription Analysis Complete!"}</h2>
                <p>{"Here's what we found in your dog's prescription:"}</p>
                <div class="results-meta">
                    if let Some(name) = file_name {
                        <span><i class="fas fa-file"></i>{" "}{name}</span>
                    }
                    if let Some(when) = analyzed_at {
                        <span><i class="fas fa-calendar"></i>{format!(" Analyzed {}", when)}</span>
                    }
                    if let Some(score) = confidence {
                        <span class="confidence"><i class="fas fa-chart-line"></i>{format!(" Confidence {}%", score)}</span>
                    }
                </div>
            </div>
        },
        Section::Conditions(conditions) => html! {
            <div class="result-section">
                <h3><i class="fas fa-stethoscope"></i>{" Detected Conditions"}</h3>
                <div class="condition-tags">
                    { for conditions.iter().map(|c| html! { <span class="condition-tag">{c}</span> }) }
                </div>
            </div>
        },
        Section::Medications(medications) => html! {
            <div class="result-section">
                <h3><i class="fas fa-pills"></i>{" Medications Detected"}</h3>
                <div class="medications-grid">
                    { for medications.iter().map(|med| html! {
                        <div class="medication-card">
                            <h4>{&med.name}</h4>
                            <span class="med-category">{&med.category}</span>
                        </div>
                    }) }
                </div>
            </div>
        },
        Section::Instructions { duration, special, notes } => html! {
            <div class="result-section">
                <h3><i class="fas fa-notes-medical"></i>{" Instructions"}</h3>
                if let Some(duration) = duration {
                    <p class="duration"><strong>{"Duration: "}</strong>{duration}</p>
                }
                { bullet_list(special) }
                { for notes.iter().map(|note| html! { <p class="general-note">{note}</p> }) }
            </div>
        },
        Section::Diet(diet) => render_diet(diet),
    }
}

// Backend text is untrusted: only ever interpolate it as html! text, never raw HTML.
#[derive(Properties, PartialEq)]
pub struct ResultsProps {
    pub result: AnalysisResult,
}

#[function_component(Results)]
pub fn results(props: &ResultsProps) -> Html {
    let view = ResultsView::from(&props.result);
    html! {
        <>
            { for view.sections.iter().map(render_section) }
        </>
    }
}
