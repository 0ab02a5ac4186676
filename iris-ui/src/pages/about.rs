use dioxus::prelude::*;

const ABOUT_STYLES: &str = r#"
.about-section {
    background: var(--card-bg);
    border: 1px solid var(--border-color);
    border-radius: 12px;
    padding: 1.5rem;
    margin-bottom: 1.5rem;
}

.about-section h2 {
    margin-bottom: 0.75rem;
}

.about-section p {
    margin-bottom: 0.75rem;
    line-height: 1.6;
    color: var(--text-secondary);
}

.species-grid,
.algorithms-grid,
.outcomes-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 1rem;
    margin-top: 1rem;
}

.species-card,
.algorithm-card,
.outcome-card {
    border: 1px solid var(--border-color);
    border-radius: 10px;
    padding: 1rem;
}

.species-card h3,
.algorithm-card h3,
.outcome-card h4 {
    margin-bottom: 0.5rem;
    color: var(--accent);
}

.features-list {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    margin-top: 1rem;
}

.feature-item {
    border-left: 3px solid var(--accent);
    padding-left: 0.75rem;
}

.feature-label {
    font-weight: 600;
}

.tech-category {
    margin-top: 1rem;
}

.tech-category h3 {
    margin-bottom: 0.5rem;
}

.tech-category ul,
.applications-list {
    margin-left: 1.25rem;
    line-height: 1.8;
    color: var(--text-secondary);
}
"#;

#[component]
pub fn About() -> Element {
    rsx! {
        style { {ABOUT_STYLES} }
        div {
            h1 { class: "page-title", "About the Project" }

            section { class: "about-section",
                h2 { "The Iris Dataset" }
                p {
                    "The Iris flower dataset is a multivariate dataset introduced by British statistician "
                    "and biologist Ronald Fisher in 1936. It is widely used in machine learning and statistics "
                    "as a benchmark dataset for classification algorithms."
                }
                p { "The dataset contains 150 samples of iris flowers, with 50 samples from each of three species:" }
                div { class: "species-grid",
                    div { class: "species-card",
                        h3 { "Iris Setosa" }
                        p { "Characterized by smaller petals and distinct features" }
                    }
                    div { class: "species-card",
                        h3 { "Iris Versicolor" }
                        p { "Medium-sized petals with intermediate characteristics" }
                    }
                    div { class: "species-card",
                        h3 { "Iris Virginica" }
                        p { "Larger petals and longer measurements" }
                    }
                }
            }

            section { class: "about-section",
                h2 { "Features Used for Classification" }
                p { "Each iris flower is measured using four key features:" }
                div { class: "features-list",
                    div { class: "feature-item",
                        div { class: "feature-label", "1. Sepal Length" }
                        p { "The length of the sepal (outer part of the flower) measured in centimeters" }
                    }
                    div { class: "feature-item",
                        div { class: "feature-label", "2. Sepal Width" }
                        p { "The width of the sepal measured in centimeters" }
                    }
                    div { class: "feature-item",
                        div { class: "feature-label", "3. Petal Length" }
                        p { "The length of the petal (inner part of the flower) measured in centimeters" }
                    }
                    div { class: "feature-item",
                        div { class: "feature-label", "4. Petal Width" }
                        p { "The width of the petal measured in centimeters" }
                    }
                }
            }

            section { class: "about-section",
                h2 { "Machine Learning Algorithms" }
                p {
                    "This project employs multiple classification algorithms to predict the iris species. "
                    "The models are trained on historical data and can achieve high accuracy rates."
                }
                div { class: "algorithms-grid",
                    div { class: "algorithm-card",
                        h3 { "Random Forest" }
                        p {
                            "An ensemble learning method that constructs multiple decision trees and merges "
                            "them together for more accurate and stable predictions"
                        }
                    }
                    div { class: "algorithm-card",
                        h3 { "Logistic Regression" }
                        p {
                            "A statistical model that uses a logistic function to model the probability "
                            "of a certain class or event"
                        }
                    }
                    div { class: "algorithm-card",
                        h3 { "Support Vector Machine" }
                        p {
                            "A supervised learning model that analyzes data for classification by finding "
                            "the optimal hyperplane that separates different classes"
                        }
                    }
                }
            }

            section { class: "about-section",
                h2 { "Technologies Used" }
                div { class: "tech-category",
                    h3 { "Frontend Technologies" }
                    ul {
                        li { strong { "Rust + Dioxus: " } "Type-safe UI compiled to WebAssembly" }
                        li { strong { "WebAssembly: " } "Near-native performance in the browser" }
                        li { strong { "CSS3: " } "For responsive and attractive styling" }
                    }
                }
                div { class: "tech-category",
                    h3 { "Backend Technologies" }
                    ul {
                        li { strong { "Python: " } "Programming language for machine learning" }
                        li { strong { "FastAPI: " } "Modern, fast web framework for building APIs" }
                        li { strong { "Scikit-learn: " } "Machine learning library for Python" }
                    }
                }
                div { class: "tech-category",
                    h3 { "Machine Learning" }
                    ul {
                        li { strong { "Pandas: " } "Data manipulation and analysis" }
                        li { strong { "NumPy: " } "Numerical computing with arrays" }
                        li { strong { "Joblib: " } "Model serialization and loading" }
                    }
                }
            }

            section { class: "about-section",
                h2 { "Real-World Applications" }
                p {
                    "While this project focuses on iris flower classification, the techniques and algorithms "
                    "used here have broader applications in various fields:"
                }
                ul { class: "applications-list",
                    li { "Medical diagnosis and disease prediction" }
                    li { "Image recognition and computer vision" }
                    li { "Customer segmentation in marketing" }
                    li { "Fraud detection in financial systems" }
                    li { "Quality control in manufacturing" }
                    li { "Species identification in biology" }
                }
            }

            section { class: "about-section",
                h2 { "Learning Outcomes" }
                div { class: "outcomes-grid",
                    div { class: "outcome-card",
                        h4 { "Understanding ML Basics" }
                        p { "Learn fundamental machine learning concepts through a practical example" }
                    }
                    div { class: "outcome-card",
                        h4 { "Data Preprocessing" }
                        p { "Experience how raw data is prepared and processed for model training" }
                    }
                    div { class: "outcome-card",
                        h4 { "Model Evaluation" }
                        p { "Understand how to assess model performance and accuracy" }
                    }
                    div { class: "outcome-card",
                        h4 { "Full-Stack Integration" }
                        p { "See how frontend, backend, and ML components work together" }
                    }
                }
            }
        }
    }
}
