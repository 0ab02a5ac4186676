use dioxus::prelude::*;

const MODEL_CONFIG_STYLES: &str = r#"
.info-card {
    background: var(--card-bg);
    border: 1px solid var(--border-color);
    border-radius: 12px;
    padding: 1.5rem;
    margin-bottom: 1.5rem;
}

.info-card h2 {
    margin-bottom: 1rem;
}

.info-card h3 {
    margin-bottom: 0.5rem;
}

.section-description {
    margin-bottom: 1rem;
    color: var(--text-secondary);
}

.info-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 0.75rem;
}

.info-item {
    display: flex;
    justify-content: space-between;
    gap: 0.5rem;
    padding: 0.6rem 0.75rem;
    border: 1px solid var(--border-color);
    border-radius: 8px;
}

.info-label {
    color: var(--text-secondary);
}

.info-value {
    font-weight: 600;
}

.accuracy-high {
    color: var(--success);
}

.features-table {
    border: 1px solid var(--border-color);
    border-radius: 8px;
    overflow: hidden;
}

.table-header,
.table-row {
    display: grid;
    grid-template-columns: 1.2fr 0.5fr 0.9fr 1.6fr;
    gap: 0.5rem;
    padding: 0.6rem 0.9rem;
}

.table-header {
    background: var(--page-bg);
    font-weight: 600;
}

.table-row {
    border-top: 1px solid var(--border-color);
    color: var(--text-secondary);
}

.table-row .feature-name {
    color: var(--text-primary);
    font-weight: 600;
}

.api-section {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    margin-bottom: 1rem;
}

.api-detail {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.api-label {
    color: var(--text-secondary);
}

.api-badge {
    padding: 0.15rem 0.6rem;
    border-radius: 6px;
    font-size: 0.8rem;
    font-weight: 700;
    color: white;
    background: var(--success);
}

.api-code {
    background: var(--page-bg);
    border: 1px solid var(--border-color);
    border-radius: 6px;
    padding: 0.15rem 0.5rem;
    font-family: monospace;
}

.api-subsection {
    margin-top: 1rem;
}

.code-block {
    background: #1a202c;
    color: #e2e8f0;
    border-radius: 8px;
    padding: 1rem;
    overflow-x: auto;
    font-family: monospace;
    font-size: 0.85rem;
    line-height: 1.5;
}

.workflow-explanation {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.workflow-step-detail {
    display: flex;
    gap: 0.9rem;
}

.step-icon {
    width: 2.25rem;
    height: 2.25rem;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 50%;
    background: var(--accent);
    color: white;
    font-weight: 700;
    flex-shrink: 0;
}

.step-text p {
    color: var(--text-secondary);
    line-height: 1.6;
}

.notes-list {
    margin-left: 1.25rem;
    line-height: 1.8;
    color: var(--text-secondary);
}
"#;

const REQUEST_SCHEMA: &str = r#"{
  "image": File (optional),
  "sepal_length": float (required),
  "sepal_width": float (required),
  "petal_length": float (required),
  "petal_width": float (required)
}"#;

const RESPONSE_SCHEMA: &str = r#"{
  "prediction": string,
  "confidence": float,
  "probabilities": {
    "setosa": float,
    "versicolor": float,
    "virginica": float
  }
}"#;

const EXAMPLE_RESPONSE: &str = r#"{
  "prediction": "Iris-setosa",
  "confidence": 0.98,
  "probabilities": {
    "setosa": 0.98,
    "versicolor": 0.01,
    "virginica": 0.01
  }
}"#;

#[component]
pub fn ModelConfig() -> Element {
    rsx! {
        style { {MODEL_CONFIG_STYLES} }
        div {
            h1 { class: "page-title", "Model & API Configuration" }

            section { class: "info-card",
                h2 { "Model Information" }
                div { class: "info-grid",
                    div { class: "info-item",
                        span { class: "info-label", "Model Type:" }
                        span { class: "info-value", "Random Forest Classifier" }
                    }
                    div { class: "info-item",
                        span { class: "info-label", "Training Accuracy:" }
                        span { class: "info-value accuracy-high", "97.5%" }
                    }
                    div { class: "info-item",
                        span { class: "info-label", "Dataset Size:" }
                        span { class: "info-value", "150 samples" }
                    }
                    div { class: "info-item",
                        span { class: "info-label", "Number of Classes:" }
                        span { class: "info-value", "3 (Setosa, Versicolor, Virginica)" }
                    }
                    div { class: "info-item",
                        span { class: "info-label", "Features:" }
                        span { class: "info-value", "4 (Sepal & Petal measurements)" }
                    }
                    div { class: "info-item",
                        span { class: "info-label", "Algorithm:" }
                        span { class: "info-value", "Ensemble Learning (Random Forest)" }
                    }
                }
            }

            section { class: "info-card",
                h2 { "Input Features" }
                p { class: "section-description",
                    "The model requires the following four measurements to make a prediction:"
                }
                div { class: "features-table",
                    div { class: "table-header",
                        div { "Feature Name" }
                        div { "Unit" }
                        div { "Typical Range" }
                        div { "Description" }
                    }
                    div { class: "table-row",
                        div { class: "feature-name", "Sepal Length" }
                        div { "cm" }
                        div { "4.3 - 7.9" }
                        div { "Length of the outer leaf" }
                    }
                    div { class: "table-row",
                        div { class: "feature-name", "Sepal Width" }
                        div { "cm" }
                        div { "2.0 - 4.4" }
                        div { "Width of the outer leaf" }
                    }
                    div { class: "table-row",
                        div { class: "feature-name", "Petal Length" }
                        div { "cm" }
                        div { "1.0 - 6.9" }
                        div { "Length of the inner petal" }
                    }
                    div { class: "table-row",
                        div { class: "feature-name", "Petal Width" }
                        div { "cm" }
                        div { "0.1 - 2.5" }
                        div { "Width of the inner petal" }
                    }
                }
            }

            section { class: "info-card",
                h2 { "API Endpoint Details" }
                div { class: "api-section",
                    div { class: "api-detail",
                        span { class: "api-label", "Method:" }
                        span { class: "api-badge", "POST" }
                    }
                    div { class: "api-detail",
                        span { class: "api-label", "Endpoint:" }
                        code { class: "api-code", "/api/predict" }
                    }
                    div { class: "api-detail",
                        span { class: "api-label", "Content-Type:" }
                        code { class: "api-code", "multipart/form-data" }
                    }
                }
                div { class: "api-subsection",
                    h3 { "Request Parameters" }
                    div { class: "code-block", pre { {REQUEST_SCHEMA} } }
                }
                div { class: "api-subsection",
                    h3 { "Response Format" }
                    div { class: "code-block", pre { {RESPONSE_SCHEMA} } }
                }
                div { class: "api-subsection",
                    h3 { "Example Response" }
                    div { class: "code-block", pre { {EXAMPLE_RESPONSE} } }
                }
            }

            section { class: "info-card",
                h2 { "How It Works" }
                div { class: "workflow-explanation",
                    div { class: "workflow-step-detail",
                        div { class: "step-icon", "1" }
                        div { class: "step-text",
                            h3 { "Data Input" }
                            p {
                                "You provide the four flower measurements (or alternatively an image). "
                                "The system validates that all values are within expected ranges."
                            }
                        }
                    }
                    div { class: "workflow-step-detail",
                        div { class: "step-icon", "2" }
                        div { class: "step-text",
                            h3 { "Preprocessing" }
                            p {
                                "The input values are normalized and formatted to match the training data structure. "
                                "This ensures consistent predictions regardless of input variations."
                            }
                        }
                    }
                    div { class: "workflow-step-detail",
                        div { class: "step-icon", "3" }
                        div { class: "step-text",
                            h3 { "Model Prediction" }
                            p {
                                "The Random Forest model processes the data through multiple decision trees. "
                                "Each tree votes on the predicted class, and the majority wins."
                            }
                        }
                    }
                    div { class: "workflow-step-detail",
                        div { class: "step-icon", "4" }
                        div { class: "step-text",
                            h3 { "Result & Confidence" }
                            p {
                                "The system returns the predicted flower species along with confidence scores "
                                "for each possible class, giving you insight into the model's certainty."
                            }
                        }
                    }
                }
            }

            section { class: "info-card",
                h2 { "Important Notes" }
                ul { class: "notes-list",
                    li { "All measurement values should be in centimeters (cm)" }
                    li { "Values outside typical ranges may result in lower confidence scores" }
                    li { "The image upload is an alternative input method; measurements and image are mutually exclusive" }
                    li { "The model is trained on the classic Iris dataset with high accuracy" }
                    li { "Predictions are made in real-time with minimal latency" }
                }
            }
        }
    }
}
