use dioxus::prelude::*;

use crate::pages::{About, Home, ModelConfig, Prediction};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/model")]
    ModelConfig {},
    #[route("/predict")]
    Prediction {},
}

/// Global style tokens shared by every page. Injected once by the app shell.
pub const APP_TOKENS: &str = r#"
:root {
    --accent: #667eea;
    --accent-dark: #764ba2;
    --success: #48bb78;
    --warning: #f6ad55;
    --error-bg: #fff5f5;
    --error-border: #fc8181;
    --error-text: #c53030;
    --page-bg: #f7fafc;
    --card-bg: #ffffff;
    --border-color: #e2e8f0;
    --text-primary: #2d3748;
    --text-secondary: #718096;
}

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: 'Segoe UI', system-ui, -apple-system, sans-serif;
    color: var(--text-primary);
    background: var(--page-bg);
}

.app-container {
    display: flex;
    min-height: 100vh;
}

.main-content {
    flex: 1;
    margin-left: 260px;
    padding: 2rem;
}

.page-title {
    font-size: 1.875rem;
    font-weight: 700;
    margin-bottom: 1.5rem;
}

.card {
    background: var(--card-bg);
    border: 1px solid var(--border-color);
    border-radius: 12px;
    padding: 1.5rem;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.06);
}

/* Sidebar */
.sidebar {
    position: fixed;
    top: 0;
    left: 0;
    bottom: 0;
    width: 260px;
    display: flex;
    flex-direction: column;
    background: linear-gradient(180deg, var(--accent) 0%, var(--accent-dark) 100%);
    color: white;
}

.sidebar-header {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 1.5rem 1.25rem;
    border-bottom: 1px solid rgba(255, 255, 255, 0.2);
}

.sidebar-logo {
    font-size: 1.75rem;
}

.sidebar-title {
    font-size: 1.125rem;
    font-weight: 600;
}

.sidebar-nav {
    flex: 1;
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
    padding: 1rem 0.75rem;
}

.nav-item {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 0.7rem 1rem;
    border-radius: 8px;
    color: rgba(255, 255, 255, 0.85);
    text-decoration: none;
    transition: background 0.15s ease;
}

.nav-item:hover {
    background: rgba(255, 255, 255, 0.12);
    color: white;
}

.nav-item.active {
    background: rgba(255, 255, 255, 0.22);
    color: white;
    font-weight: 600;
}

.nav-icon {
    font-size: 1.1rem;
}

.sidebar-footer {
    padding: 1.25rem;
    border-top: 1px solid rgba(255, 255, 255, 0.2);
    font-size: 0.75rem;
    color: rgba(255, 255, 255, 0.7);
    text-align: center;
}
"#;

#[component]
pub fn App() -> Element {
    rsx! {
        style { {APP_TOKENS} }
        Router::<Route> {}
    }
}

#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "app-container",
            Sidebar {}
            main { class: "main-content", Outlet::<Route> {} }
        }
    }
}

/// CSS class for a nav link, highlighting the route being viewed.
pub fn nav_class(current: &Route, target: &Route) -> &'static str {
    if current == target {
        "nav-item active"
    } else {
        "nav-item"
    }
}

#[component]
fn Sidebar() -> Element {
    let current: Route = use_route();

    let items = [
        (Route::Home {}, "🏠", "Home"),
        (Route::About {}, "📚", "About Project"),
        (Route::ModelConfig {}, "⚙️", "Model & API"),
        (Route::Prediction {}, "🔮", "Prediction"),
    ];

    rsx! {
        div { class: "sidebar",
            div { class: "sidebar-header",
                div { class: "sidebar-logo", "🌸" }
                h2 { class: "sidebar-title", "Iris Classifier" }
            }
            nav { class: "sidebar-nav",
                for (route, icon, text) in items {
                    Link {
                        to: route.clone(),
                        class: nav_class(&current, &route),
                        span { class: "nav-icon", {icon} }
                        span { class: "nav-text", {text} }
                    }
                }
            }
            div { class: "sidebar-footer",
                p { "Machine Learning" }
                p { "Classification System" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_class_marks_only_the_current_route() {
        let current = Route::Prediction {};
        assert_eq!(nav_class(&current, &Route::Prediction {}), "nav-item active");
        assert_eq!(nav_class(&current, &Route::Home {}), "nav-item");
        assert_eq!(nav_class(&current, &Route::About {}), "nav-item");
    }
}
