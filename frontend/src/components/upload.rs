use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use gloo_net::http::Request;
use log::{error, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, FormData, HtmlInputElement};
use yew::prelude::*;

use crate::components::results::Results;
use crate::config;
use crate::models::AnalysisResult;

const FAILURE_ALERT: &str = "Error processing file. Please try again.";

#[derive(Debug)]
pub enum UploadError {
    Form(String),
    Network(String),
    Status(u16),
    Decode(String),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Form(e) => write!(f, "could not build form data: {}", e),
            UploadError::Network(e) => write!(f, "request failed: {}", e),
            UploadError::Status(code) => write!(f, "server responded with status {}", code),
            UploadError::Decode(e) => write!(f, "malformed response: {}", e),
        }
    }
}

impl std::error::Error for UploadError {}

// One ticket per submission; only the newest ticket may render.
#[derive(Clone, Default)]
pub struct UploadTracker {
    generation: Rc<Cell<u64>>,
}

impl UploadTracker {
    pub fn begin(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.get() == ticket
    }
}

/// Non-2xx bodies that still carry an `error` render inline.
pub fn interpret_response(ok: bool, status: u16, body: &str) -> Result<AnalysisResult, UploadError> {
    let parsed = AnalysisResult::from_json(body);
    if ok {
        return parsed.map_err(|e| UploadError::Decode(e.to_string()));
    }
    match parsed {
        Ok(result) if result.error.is_some() => Ok(result),
        _ => Err(UploadError::Status(status)),
    }
}

pub fn file_label(name: &str, size_bytes: f64) -> String {
    format!("{} ({:.2} MB)", name, size_bytes / 1024.0 / 1024.0)
}

async fn submit(file: &File) -> Result<AnalysisResult, UploadError> {
    let form = FormData::new().map_err(|e| UploadError::Form(format!("{:?}", e)))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| UploadError::Form(format!("{:?}", e)))?;

    gloo_console::log!("POST", config::analyze_url(), file.name());
    let response = Request::post(&config::analyze_url())
        .body(form)
        .send()
        .await
        .map_err(|e| UploadError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| UploadError::Network(e.to_string()))?;
    interpret_response(response.ok(), status, &body)
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[function_component(UploadZone)]
pub fn upload_zone() -> Html {
    let input_ref = use_node_ref();
    let tracker = use_state(UploadTracker::default);
    let is_loading = use_state(|| false);
    let result = use_state(|| None::<AnalysisResult>);
    let drag_over = use_state(|| false);
    let file_info = use_state(|| None::<String>);

    let process_file = {
        let tracker = (*tracker).clone();
        let is_loading = is_loading.clone();
        let result = result.clone();
        let file_info = file_info.clone();
        Callback::from(move |file: File| {
            file_info.set(Some(file_label(&file.name(), file.size())));
            is_loading.set(true);
            result.set(None);

            let ticket = tracker.begin();
            let tracker = tracker.clone();
            let is_loading = is_loading.clone();
            let result = result.clone();
            spawn_local(async move {
                let outcome = submit(&file).await;
                if !tracker.is_current(ticket) {
                    warn!("Dropping response for superseded upload #{}", ticket);
                    return;
                }
                is_loading.set(false);
                match outcome {
                    Ok(analysis) => {
                        info!(
                            "Analysis received: {} medications",
                            analysis
                                .prescription_analysis
                                .as_ref()
                                .map_or(0, |a| a.medications.len())
                        );
                        result.set(Some(analysis));
                    }
                    Err(e) => {
                        error!("Upload failed: {}", e);
                        alert(FAILURE_ALERT);
                    }
                }
            });
        })
    };

    let open_picker = {
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_drag_over = {
        let drag_over = drag_over.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_over.set(true);
        })
    };

    let on_drag_leave = {
        let drag_over = drag_over.clone();
        Callback::from(move |_: DragEvent| drag_over.set(false))
    };

    let on_drop = {
        let drag_over = drag_over.clone();
        let process_file = process_file.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_over.set(false);
            // Only the first dropped file is analyzed.
            if let Some(file) = e
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                process_file.emit(file);
            }
        })
    };

    let on_change = {
        let process_file = process_file.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                process_file.emit(file);
            }
        })
    };

    let zone_style = if *drag_over {
        "border-color: #FF6B6B; background: #f0f8ff;"
    } else {
        ""
    };

    html! {
        <div class="upload-section">
            <div id="uploadArea"
                class={classes!("upload-area", (*drag_over).then(|| "drag-over"))}
                style={zone_style}
                onclick={open_picker}
                ondragover={on_drag_over}
                ondragleave={on_drag_leave}
                ondrop={on_drop}
            >
                <i class="fas fa-cloud-upload-alt upload-icon"></i>
                <h3>{"Drop your prescription here"}</h3>
                <p>{"or click to browse (PDF, PNG, JPG)"}</p>
                if let Some(info) = &*file_info {
                    <div class="file-info">
                        <i class="fas fa-file"></i>
                        <span>{info}</span>
                        <i class="fas fa-check"></i>
                    </div>
                }
            </div>
            <input type="file" id="fileInput" ref={input_ref} style="display: none;" onchange={on_change} />

            <div id="loading" class="loading" style={if *is_loading { "display: block;" } else { "display: none;" }}>
                <div class="spinner"></div>
                <p>{"Analyzing prescription..."}</p>
            </div>

            <div id="resultsContainer" class="results-container">
                if let Some(analysis) = &*result {
                    <Results result={analysis.clone()} />
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_ticket_wins() {
        let tracker = UploadTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn cloned_tracker_shares_generation() {
        let tracker = UploadTracker::default();
        let handle = tracker.clone();
        let ticket = handle.begin();
        assert!(tracker.is_current(ticket));
        tracker.begin();
        assert!(!handle.is_current(ticket));
    }

    #[test]
    fn ok_response_decodes() {
        let body = r#"{"prescription_analysis":{"medications":[{"name":"Amoxicillin","category":"Antibiotic"}]}}"#;
        let result = interpret_response(true, 200, body).unwrap();
        assert_eq!(result.prescription_analysis.unwrap().medications[0].name, "Amoxicillin");
    }

    #[test]
    fn ok_response_without_analysis_is_decode_error() {
        let bodies = [
            "{}",
            r#"{"status": "healthy"}"#,
            r#"{"prescription_analysis": {"medications": []}, "diet_recommendations": {}}"#,
        ];
        for body in bodies {
            assert!(
                matches!(interpret_response(true, 200, body), Err(UploadError::Decode(_))),
                "{} should be rejected",
                body
            );
        }
    }

    #[test]
    fn ok_response_with_malformed_json_is_decode_error() {
        assert!(matches!(
            interpret_response(true, 200, "<html>oops</html>"),
            Err(UploadError::Decode(_))
        ));
    }

    #[test]
    fn error_body_on_bad_request_renders_inline() {
        let result = interpret_response(false, 400, r#"{"error": "Invalid file type"}"#).unwrap();
        assert_eq!(result.error.as_deref(), Some("Invalid file type"));
    }

    #[test]
    fn other_non_2xx_is_status_error() {
        assert!(matches!(
            interpret_response(false, 502, "Bad Gateway"),
            Err(UploadError::Status(502))
        ));
        assert!(matches!(
            interpret_response(false, 500, r#"{"prescription_analysis": {}}"#),
            Err(UploadError::Status(500))
        ));
    }

    #[test]
    fn file_label_shows_megabytes() {
        assert_eq!(file_label("rx.pdf", 2.0 * 1024.0 * 1024.0), "rx.pdf (2.00 MB)");
        assert_eq!(file_label("scan.png", 1536.0), "scan.png (0.00 MB)");
    }

    #[test]
    fn errors_describe_their_cause() {
        assert_eq!(UploadError::Status(404).to_string(), "server responded with status 404");
        assert_eq!(
            UploadError::Network("timeout".into()).to_string(),
            "request failed: timeout"
        );
    }
}
