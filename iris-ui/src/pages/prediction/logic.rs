//! Prediction page pure helpers — no RSX, no signals

use iris_types::{Diagnostic, SubmissionState};
use std::collections::BTreeMap;

pub const DEFAULT_SPECIES_COLOR: &str = "#667eea";

/// Accent color for a species name; unknown labels fall back to the default.
pub fn species_color(species: &str) -> &'static str {
    match species.to_lowercase().as_str() {
        "setosa" => "#667eea",
        "versicolor" => "#48bb78",
        "virginica" => "#f6ad55",
        _ => DEFAULT_SPECIES_COLOR,
    }
}

/// Species name with the first letter capitalized for display.
pub fn display_species(species: &str) -> String {
    let mut chars = species.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// CSS width for a probability/confidence bar.
pub fn bar_width(value: f64) -> String {
    format!("{:.2}%", value.clamp(0.0, 1.0) * 100.0)
}

/// Confidence rendered with two decimals.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}

/// Per-class probability rendered with one decimal.
pub fn format_probability(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// One rendered row of the class-probability list.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityRow {
    pub label: String,
    pub color: &'static str,
    pub width: String,
    pub value: String,
}

/// Rows for the probability list, ordered by class name.
pub fn probability_rows(probabilities: &BTreeMap<String, f64>) -> Vec<ProbabilityRow> {
    probabilities
        .iter()
        .map(|(species, prob)| ProbabilityRow {
            label: display_species(species),
            color: species_color(species),
            width: bar_width(*prob),
            value: format_probability(*prob),
        })
        .collect()
}

/// Text for the single error slot. Validation diagnostics and request
/// failures are mutually exclusive in time, but the diagnostic wins if both
/// are somehow set.
pub fn error_slot(diagnostic: Option<&Diagnostic>, state: &SubmissionState) -> Option<String> {
    if let Some(diagnostic) = diagnostic {
        return Some(diagnostic.to_string());
    }
    match state {
        SubmissionState::Failed(message) => Some(message.clone()),
        _ => None,
    }
}

pub fn submit_label(pending: bool) -> &'static str {
    if pending {
        "Predicting..."
    } else {
        "Predict Flower Type"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_colors_cover_the_three_classes_with_a_fallback() {
        assert_eq!(species_color("setosa"), "#667eea");
        assert_eq!(species_color("Versicolor"), "#48bb78");
        assert_eq!(species_color("virginica"), "#f6ad55");
        assert_eq!(species_color("Iris-setosa"), DEFAULT_SPECIES_COLOR);
        assert_eq!(species_color(""), DEFAULT_SPECIES_COLOR);
    }

    #[test]
    fn percent_formatting_matches_display_contract() {
        assert_eq!(format_confidence(0.98), "98.00%");
        assert_eq!(format_probability(0.01), "1.0%");
        assert_eq!(bar_width(0.5), "50.00%");
        assert_eq!(bar_width(1.5), "100.00%");
        assert_eq!(bar_width(-0.1), "0.00%");
    }

    #[test]
    fn probability_rows_are_ordered_by_class_name() {
        let mut probabilities = BTreeMap::new();
        probabilities.insert("virginica".to_string(), 0.01);
        probabilities.insert("setosa".to_string(), 0.98);
        probabilities.insert("versicolor".to_string(), 0.01);

        let rows = probability_rows(&probabilities);
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["Setosa", "Versicolor", "Virginica"]);
        assert_eq!(rows[0].value, "98.0%");
        assert_eq!(rows[0].width, "98.00%");
        assert_eq!(rows[0].color, "#667eea");
    }

    #[test]
    fn error_slot_prefers_diagnostic_over_request_failure() {
        let failed = SubmissionState::Failed("model unavailable".to_string());
        assert_eq!(
            error_slot(Some(&Diagnostic::ImageTooLarge), &failed),
            Some("Image size should be less than 5MB".to_string())
        );
        assert_eq!(
            error_slot(None, &failed),
            Some("model unavailable".to_string())
        );
        assert_eq!(error_slot(None, &SubmissionState::Idle), None);
        assert_eq!(error_slot(None, &SubmissionState::Pending), None);
    }

    #[test]
    fn submit_label_reflects_pending_state() {
        assert_eq!(submit_label(false), "Predict Flower Type");
        assert_eq!(submit_label(true), "Predicting...");
    }
}
