use dioxus::prelude::*;

const HOME_STYLES: &str = r#"
.hero-section {
    text-align: center;
    padding: 2.5rem 1rem 2rem;
}

.main-title {
    font-size: 2.25rem;
    font-weight: 700;
    background: linear-gradient(90deg, var(--accent), var(--accent-dark));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.subtitle {
    margin-top: 0.5rem;
    font-size: 1.125rem;
    color: var(--text-secondary);
}

.home-section {
    background: var(--card-bg);
    border: 1px solid var(--border-color);
    border-radius: 12px;
    padding: 1.5rem;
    margin-bottom: 1.5rem;
}

.home-section h2 {
    margin-bottom: 0.75rem;
}

.home-section p {
    margin-bottom: 0.75rem;
    line-height: 1.6;
    color: var(--text-secondary);
}

.workflow-steps {
    display: flex;
    align-items: center;
    gap: 1rem;
    flex-wrap: wrap;
}

.workflow-step {
    flex: 1;
    min-width: 160px;
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.step-number {
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

.workflow-arrow {
    font-size: 1.5rem;
    color: var(--text-secondary);
}

.features-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 1rem;
}

.feature-card {
    background: var(--card-bg);
    border: 1px solid var(--border-color);
    border-radius: 12px;
    padding: 1.25rem;
    text-align: center;
}

.feature-icon {
    font-size: 1.75rem;
    margin-bottom: 0.5rem;
}
"#;

#[component]
pub fn Home() -> Element {
    rsx! {
        style { {HOME_STYLES} }
        div {
            div { class: "hero-section",
                h1 { class: "main-title", "Iris Flower Classification System" }
                p { class: "subtitle", "Machine Learning Powered Classification" }
            }

            div { class: "home-section",
                h2 { "What is Iris Flower Classification?" }
                p {
                    "The Iris flower dataset is one of the most famous datasets in machine learning and statistics. "
                    "It contains measurements of 150 iris flowers from three different species: Setosa, Versicolor, and Virginica."
                }
                p {
                    "Each flower is characterized by four features: sepal length, sepal width, petal length, and petal width. "
                    "Using these measurements, our machine learning model can accurately predict which species a flower belongs to."
                }
            }

            div { class: "home-section",
                h2 { "How Machine Learning Powers This Application" }
                p {
                    "Our system uses advanced machine learning algorithms trained on the Iris dataset. "
                    "The model learns patterns from historical data to make accurate predictions on new flower measurements."
                }
                p {
                    "You can upload an image of an iris flower or input its measurements to get instant classification results."
                }
            }

            div { class: "home-section",
                h2 { "Simple Workflow" }
                div { class: "workflow-steps",
                    div { class: "workflow-step",
                        div { class: "step-number", "1" }
                        div {
                            h3 { "Input Data" }
                            p { "Upload flower image or enter measurements" }
                        }
                    }
                    div { class: "workflow-arrow", "→" }
                    div { class: "workflow-step",
                        div { class: "step-number", "2" }
                        div {
                            h3 { "ML Model" }
                            p { "Process data through trained model" }
                        }
                    }
                    div { class: "workflow-arrow", "→" }
                    div { class: "workflow-step",
                        div { class: "step-number", "3" }
                        div {
                            h3 { "Prediction" }
                            p { "Get flower species classification" }
                        }
                    }
                }
            }

            div { class: "features-grid",
                div { class: "feature-card",
                    div { class: "feature-icon", "📊" }
                    h3 { "Accurate Predictions" }
                    p { "High accuracy model trained on validated data" }
                }
                div { class: "feature-card",
                    div { class: "feature-icon", "⚡" }
                    h3 { "Fast Results" }
                    p { "Get instant classification results" }
                }
                div { class: "feature-card",
                    div { class: "feature-icon", "🎯" }
                    h3 { "Easy to Use" }
                    p { "Simple interface for everyone" }
                }
                div { class: "feature-card",
                    div { class: "feature-icon", "🔬" }
                    h3 { "Scientific Approach" }
                    p { "Based on proven ML algorithms" }
                }
            }
        }
    }
}
