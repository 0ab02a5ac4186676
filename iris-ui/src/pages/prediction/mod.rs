//! Prediction page
//!
//! Owns the draft, the surfaced diagnostic, and the submission state, and
//! wires them to the pure state machine in `iris-types`. The dispatched
//! request body is a snapshot taken at submit time: edits made while the
//! request is in flight never reach it.

mod logic;
mod styles;

use dioxus::prelude::*;
use iris_types::{
    begin_submission, resolve_submission, Diagnostic, Draft, ImageAttachment, MeasurementField,
    PredictError, PredictionResult, SubmissionGate, SubmissionPayload, SubmissionState,
};

use crate::api::{predict_with_image, predict_with_measurements};
use crate::interop::{clear_file_input, load_image_preview, selected_file};
use logic::{
    bar_width, error_slot, format_confidence, probability_rows, species_color, submit_label,
};
use styles::PREDICTION_STYLES;

const IMAGE_INPUT_ID: &str = "flower-image-input";

#[component]
pub fn Prediction() -> Element {
    let mut draft = use_signal(Draft::default);
    let mut image_file = use_signal(|| None::<web_sys::File>);
    let mut preview = use_signal(|| None::<String>);
    let mut diagnostic = use_signal(|| None::<Diagnostic>);
    let mut submission = use_signal(|| SubmissionState::Idle);

    let on_image_change = move |_e: FormEvent| {
        let Some(file) = selected_file(IMAGE_INPUT_ID) else {
            return;
        };

        let attachment = ImageAttachment {
            name: file.name(),
            size: file.size() as u64,
            mime: file.type_(),
        };
        let attach_result = draft.write().attach_image(attachment);
        if let Err(rejection) = attach_result {
            diagnostic.set(Some(rejection));
            clear_file_input(IMAGE_INPUT_ID);
            return;
        }

        image_file.set(Some(file.clone()));
        diagnostic.set(None);

        // The raw file is already registered; the preview arrives later and
        // never gates validation or submission.
        let mut preview_slot = preview;
        load_image_preview(
            &file,
            Callback::new(move |data_url| preview_slot.set(Some(data_url))),
        );
    };

    let on_remove_image = move |_| {
        draft.write().clear_image();
        image_file.set(None);
        preview.set(None);
        clear_file_input(IMAGE_INPUT_ID);
    };

    let on_reset = move |_| {
        draft.set(Draft::default());
        image_file.set(None);
        preview.set(None);
        diagnostic.set(None);
        submission.set(SubmissionState::Idle);
        clear_file_input(IMAGE_INPUT_ID);
    };

    let on_submit = move |e: FormEvent| {
        e.prevent_default();

        let gate = begin_submission(&submission.read(), &draft.read());
        match gate {
            SubmissionGate::InFlight => {}
            SubmissionGate::Blocked(rejection) => diagnostic.set(Some(rejection)),
            SubmissionGate::Ready(payload) => {
                diagnostic.set(None);
                submission.set(SubmissionState::Pending);

                // Snapshot the file handle alongside the payload; later draft
                // edits do not touch the in-flight request.
                let file_snapshot = image_file.read().clone();
                spawn(async move {
                    let outcome = match payload {
                        SubmissionPayload::Measurements(measurements) => {
                            predict_with_measurements(measurements).await
                        }
                        SubmissionPayload::Image(attachment) => match file_snapshot {
                            Some(file) => predict_with_image(file).await,
                            None => Err(PredictError::Transport(format!(
                                "No file handle for {}",
                                attachment.name
                            ))),
                        },
                    };

                    if let Err(error) = &outcome {
                        dioxus_logger::tracing::warn!(
                            "Prediction request failed: {}",
                            error.user_message()
                        );
                    }
                    submission.set(resolve_submission(outcome));
                });
            }
        }
    };

    let pending = submission.read().is_pending();
    let error_message = error_slot(diagnostic.read().as_ref(), &submission.read());
    let result = match &*submission.read() {
        SubmissionState::Succeeded(result) => Some(result.clone()),
        _ => None,
    };

    rsx! {
        style { {PREDICTION_STYLES} }
        div {
            h1 { class: "page-title", "Flower Prediction" }

            div { class: "prediction-layout",
                div { class: "form-section",
                    div { class: "card",
                        h2 { "Enter Flower Measurements" }
                        form { onsubmit: on_submit,
                            div { class: "image-upload-section",
                                label { class: "image-upload-label", "Upload Flower Image (Optional)" }
                                div { class: "image-upload-area",
                                    if let Some(preview_url) = preview() {
                                        div { class: "image-preview",
                                            img { src: "{preview_url}", alt: "Flower preview" }
                                            button {
                                                r#type: "button",
                                                class: "remove-image",
                                                onclick: on_remove_image,
                                                "×"
                                            }
                                        }
                                    } else {
                                        label { class: "upload-placeholder",
                                            input {
                                                id: IMAGE_INPUT_ID,
                                                r#type: "file",
                                                accept: "image/*",
                                                style: "display: none;",
                                                onchange: on_image_change,
                                            }
                                            div { class: "upload-icon", "📷" }
                                            p { "Click to upload flower image" }
                                            span { class: "upload-hint", "PNG, JPG up to 5MB" }
                                        }
                                    }
                                }
                            }

                            div { class: "form-grid",
                                for field in MeasurementField::ALL {
                                    div { class: "form-group",
                                        label {
                                            {field.label()}
                                            span { class: "required", " *" }
                                        }
                                        input {
                                            r#type: "number",
                                            step: "0.1",
                                            min: "0",
                                            max: "10",
                                            value: draft.read().field(field).to_string(),
                                            placeholder: field.placeholder(),
                                            oninput: move |e: FormEvent| {
                                                draft.write().set_field(field, e.value())
                                            },
                                        }
                                    }
                                }
                            }

                            if let Some(message) = error_message {
                                div { class: "error-message",
                                    span { class: "error-icon", "⚠" }
                                    "{message}"
                                }
                            }

                            div { class: "button-group",
                                button {
                                    r#type: "submit",
                                    class: "btn btn-primary",
                                    disabled: pending,
                                    if pending {
                                        span { class: "spinner" }
                                    }
                                    {submit_label(pending)}
                                }
                                button {
                                    r#type: "button",
                                    class: "btn btn-secondary",
                                    onclick: on_reset,
                                    "Reset Form"
                                }
                            }
                        }
                    }
                }

                div { class: "result-section",
                    if let Some(result) = result {
                        ResultCard { result }
                    } else {
                        div { class: "card placeholder-card",
                            div { class: "placeholder-content",
                                div { class: "placeholder-icon", "🔍" }
                                h3 { "Awaiting Prediction" }
                                p { "Fill in the flower measurements and click predict to see the results" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ResultCard(result: PredictionResult) -> Element {
    let accent = species_color(&result.prediction);
    let confidence_width = bar_width(result.confidence);
    let confidence_value = format_confidence(result.confidence);
    let rows = probability_rows(&result.probabilities);

    rsx! {
        div { class: "card result-card",
            h2 { "Prediction Result" }

            div { class: "prediction-badge", style: "background: {accent};",
                div { class: "species-icon", "🌸" }
                div { class: "species-name", "{result.prediction}" }
            }

            div { class: "confidence-section",
                h3 { "Confidence Score" }
                div { class: "confidence-bar-container",
                    div {
                        class: "confidence-bar",
                        style: "width: {confidence_width}; background: {accent};",
                    }
                }
                div { class: "confidence-value", "{confidence_value}" }
            }

            if !rows.is_empty() {
                div { class: "probabilities-section",
                    h3 { "Class Probabilities" }
                    div { class: "probability-list",
                        for row in rows {
                            div { class: "probability-item", key: "{row.label}",
                                div { class: "probability-label",
                                    span { class: "species-dot", style: "background: {row.color};" }
                                    "{row.label}"
                                }
                                div { class: "probability-bar-container",
                                    div {
                                        class: "probability-bar",
                                        style: "width: {row.width}; background: {row.color};",
                                    }
                                }
                                div { class: "probability-value", "{row.value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
