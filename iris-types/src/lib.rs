//! Shared types for the Iris Classifier front end
//!
//! Everything here is plain data plus pure functions:
//! - the measurement/image `Draft` the user edits,
//! - the validator that reconciles the draft into exactly one input mode,
//! - the submission gate and resolution functions for the request lifecycle.
//!
//! No browser types appear in this crate, so the whole test suite runs on the
//! native host.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Draft
// ============================================================================

/// Upper bound for an attached image, checked eagerly at selection time.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Loose sanity ceiling for a measurement in centimeters. Deliberately above
/// the realistic feature ranges (petal length tops out at 6.9 cm); intended to
/// catch typos, not to enforce the dataset's true bounds.
pub const MAX_MEASUREMENT_CM: f64 = 10.0;

/// The four measurement inputs, addressed by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementField {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
}

impl MeasurementField {
    pub const ALL: [MeasurementField; 4] = [
        MeasurementField::SepalLength,
        MeasurementField::SepalWidth,
        MeasurementField::PetalLength,
        MeasurementField::PetalWidth,
    ];

    /// Form-field name on the wire.
    pub fn form_key(&self) -> &'static str {
        match self {
            MeasurementField::SepalLength => "sepal_length",
            MeasurementField::SepalWidth => "sepal_width",
            MeasurementField::PetalLength => "petal_length",
            MeasurementField::PetalWidth => "petal_width",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MeasurementField::SepalLength => "Sepal Length (cm)",
            MeasurementField::SepalWidth => "Sepal Width (cm)",
            MeasurementField::PetalLength => "Petal Length (cm)",
            MeasurementField::PetalWidth => "Petal Width (cm)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            MeasurementField::SepalLength => "e.g., 5.1",
            MeasurementField::SepalWidth => "e.g., 3.5",
            MeasurementField::PetalLength => "e.g., 1.4",
            MeasurementField::PetalWidth => "e.g., 0.2",
        }
    }
}

/// Metadata for a selected image. The binary `File` handle and the preview
/// data URL live beside this in the UI layer; this slot is what validation
/// looks at.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAttachment {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

/// The user's in-progress, unsubmitted input.
///
/// Fields stay raw text until validation so the exact keystrokes survive for
/// redisplay. The draft does not enforce exclusivity between measurements and
/// image; a user may fill both and only learn of the conflict on submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub sepal_length: String,
    pub sepal_width: String,
    pub petal_length: String,
    pub petal_width: String,
    pub image: Option<ImageAttachment>,
}

impl Draft {
    pub fn field(&self, field: MeasurementField) -> &str {
        match field {
            MeasurementField::SepalLength => &self.sepal_length,
            MeasurementField::SepalWidth => &self.sepal_width,
            MeasurementField::PetalLength => &self.petal_length,
            MeasurementField::PetalWidth => &self.petal_width,
        }
    }

    /// Replace exactly one field's raw text; everything else is untouched.
    pub fn set_field(&mut self, field: MeasurementField, raw: String) {
        match field {
            MeasurementField::SepalLength => self.sepal_length = raw,
            MeasurementField::SepalWidth => self.sepal_width = raw,
            MeasurementField::PetalLength => self.petal_length = raw,
            MeasurementField::PetalWidth => self.petal_width = raw,
        }
    }

    /// Register a selected image, enforcing the size ceiling eagerly.
    ///
    /// On rejection the image slot is left exactly as it was and the caller
    /// gets the diagnostic to surface.
    pub fn attach_image(&mut self, attachment: ImageAttachment) -> Result<(), Diagnostic> {
        if attachment.size > MAX_IMAGE_BYTES {
            return Err(Diagnostic::ImageTooLarge);
        }
        self.image = Some(attachment);
        Ok(())
    }

    /// Clear the image slot; measurement fields are untouched.
    pub fn clear_image(&mut self) {
        self.image = None;
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// All four fields carry non-empty raw text. No parsing happens here.
    pub fn has_values(&self) -> bool {
        MeasurementField::ALL
            .iter()
            .all(|f| !self.field(*f).is_empty())
    }
}

// ============================================================================
// Validation
// ============================================================================

/// A single user-facing failure reason. Exactly one is surfaced at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    NoInputProvided,
    ConflictingInputModes,
    NonNumericMeasurement,
    NegativeMeasurement,
    MeasurementOutOfRange,
    ImageTooLarge,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Diagnostic::NoInputProvided => "Upload an image OR enter all measurements",
            Diagnostic::ConflictingInputModes => "Please use only ONE method: image or measurements",
            Diagnostic::NonNumericMeasurement => "All measurements must be valid numbers",
            Diagnostic::NegativeMeasurement => "Measurements cannot be negative",
            Diagnostic::MeasurementOutOfRange => "Measurements seem unusually large (max 10 cm)",
            Diagnostic::ImageTooLarge => "Image size should be less than 5MB",
        };
        f.write_str(text)
    }
}

/// The four parsed measurements of a measurements-mode submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
}

impl Measurements {
    pub fn values(&self) -> [f64; 4] {
        [
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
        ]
    }

    /// Wire rendering: one decimal string per form key.
    pub fn form_fields(&self) -> [(&'static str, String); 4] {
        [
            ("sepal_length", self.sepal_length.to_string()),
            ("sepal_width", self.sepal_width.to_string()),
            ("petal_length", self.petal_length.to_string()),
            ("petal_width", self.petal_width.to_string()),
        ]
    }
}

/// What a valid draft submits: exactly one of the two input modes.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionPayload {
    Measurements(Measurements),
    Image(ImageAttachment),
}

/// Result of reconciling a draft into a submittable request.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Valid(SubmissionPayload),
    Invalid(Diagnostic),
}

fn parse_measurement(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    // NaN/inf parse but are never sensible measurements.
    value.is_finite().then_some(value)
}

/// Reconcile the draft into exactly one input mode, first match wins.
///
/// Pure and idempotent; called once per submission attempt, not per
/// keystroke. Earlier checks mask later ones, so exactly one diagnostic ever
/// fires for a given draft.
pub fn validate_draft(draft: &Draft) -> ValidationOutcome {
    let has_image = draft.has_image();
    let has_values = draft.has_values();

    if !has_image && !has_values {
        return ValidationOutcome::Invalid(Diagnostic::NoInputProvided);
    }
    if has_image && has_values {
        return ValidationOutcome::Invalid(Diagnostic::ConflictingInputModes);
    }

    if has_values {
        let parsed: Vec<Option<f64>> = MeasurementField::ALL
            .iter()
            .map(|f| parse_measurement(draft.field(*f)))
            .collect();

        let mut values = [0.0f64; 4];
        for (slot, parsed) in values.iter_mut().zip(&parsed) {
            match parsed {
                Some(v) => *slot = *v,
                None => return ValidationOutcome::Invalid(Diagnostic::NonNumericMeasurement),
            }
        }

        if values.iter().any(|v| *v < 0.0) {
            return ValidationOutcome::Invalid(Diagnostic::NegativeMeasurement);
        }
        if values.iter().any(|v| *v > MAX_MEASUREMENT_CM) {
            return ValidationOutcome::Invalid(Diagnostic::MeasurementOutOfRange);
        }

        return ValidationOutcome::Valid(SubmissionPayload::Measurements(Measurements {
            sepal_length: values[0],
            sepal_width: values[1],
            petal_length: values[2],
            petal_width: values[3],
        }));
    }

    // Image-only: content is not inspected client-side.
    match &draft.image {
        Some(attachment) => ValidationOutcome::Valid(SubmissionPayload::Image(attachment.clone())),
        None => ValidationOutcome::Invalid(Diagnostic::NoInputProvided),
    }
}

// ============================================================================
// Prediction result and request errors
// ============================================================================

/// Successful classifier response. The service also echoes `input_features`;
/// unknown fields are ignored, and a missing probability map is tolerated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResult {
    pub prediction: String,
    pub confidence: f64,
    #[serde(default)]
    pub probabilities: BTreeMap<String, f64>,
}

/// Why a dispatched attempt failed.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    /// The request never produced a response.
    Transport(String),
    /// Non-2xx status, with the server's `detail` body field when it sent one.
    Http { status: u16, detail: Option<String> },
    /// 2xx status but the body did not decode as a prediction.
    Decode(String),
}

const GENERIC_FAILURE: &str = "Prediction failed";

impl PredictError {
    /// Ordered fallback chain for the surfaced message: server-supplied
    /// detail, else the transport-level message, else a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            PredictError::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            PredictError::Http {
                status,
                detail: None,
            } => format!("HTTP error: {status}"),
            PredictError::Transport(message) | PredictError::Decode(message) => {
                if message.is_empty() {
                    GENERIC_FAILURE.to_string()
                } else {
                    message.clone()
                }
            }
        }
    }
}

/// Pull the `detail` string out of a FastAPI-shaped error body. Non-JSON
/// bodies and non-string `detail` values yield `None`.
pub fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(|d| d.as_str())
        .map(|d| d.to_string())
}

// ============================================================================
// Submission lifecycle
// ============================================================================

/// Lifecycle of the current prediction attempt. Overwritten, never queued.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded(PredictionResult),
    Failed(String),
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending)
    }
}

/// Verdict on a new submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionGate {
    /// An attempt is already pending; the new one is a no-op.
    InFlight,
    /// The draft failed validation; surface the diagnostic, dispatch nothing.
    Blocked(Diagnostic),
    /// Snapshot to dispatch.
    Ready(SubmissionPayload),
}

/// Gate a submission attempt against the current state and draft.
///
/// At most one attempt is in flight: while `Pending`, every new attempt is
/// rejected here regardless of what the draft holds. The submit control is
/// also disabled while pending; this gate is the second line of defense.
pub fn begin_submission(state: &SubmissionState, draft: &Draft) -> SubmissionGate {
    if state.is_pending() {
        return SubmissionGate::InFlight;
    }
    match validate_draft(draft) {
        ValidationOutcome::Valid(payload) => SubmissionGate::Ready(payload),
        ValidationOutcome::Invalid(diagnostic) => SubmissionGate::Blocked(diagnostic),
    }
}

/// Map a finished dispatch onto the next state. Total: both arms leave
/// `Pending`, so a stuck pending state cannot outlive its attempt.
pub fn resolve_submission(outcome: Result<PredictionResult, PredictError>) -> SubmissionState {
    match outcome {
        Ok(result) => SubmissionState::Succeeded(result),
        Err(error) => SubmissionState::Failed(error.user_message()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with_fields(sl: &str, sw: &str, pl: &str, pw: &str) -> Draft {
        Draft {
            sepal_length: sl.to_string(),
            sepal_width: sw.to_string(),
            petal_length: pl.to_string(),
            petal_width: pw.to_string(),
            image: None,
        }
    }

    fn sample_attachment(size: u64) -> ImageAttachment {
        ImageAttachment {
            name: "flower.jpg".to_string(),
            size,
            mime: "image/jpeg".to_string(),
        }
    }

    #[test]
    fn empty_draft_is_no_input() {
        let outcome = validate_draft(&Draft::default());
        assert_eq!(
            outcome,
            ValidationOutcome::Invalid(Diagnostic::NoInputProvided)
        );
    }

    #[test]
    fn partially_filled_fields_without_image_is_no_input() {
        let draft = draft_with_fields("5.1", "", "1.4", "0.2");
        assert_eq!(
            validate_draft(&draft),
            ValidationOutcome::Invalid(Diagnostic::NoInputProvided)
        );
    }

    #[test]
    fn both_modes_conflict_even_when_values_would_be_valid() {
        let mut draft = draft_with_fields("5.1", "3.5", "1.4", "0.2");
        draft.attach_image(sample_attachment(1024)).unwrap();
        assert_eq!(
            validate_draft(&draft),
            ValidationOutcome::Invalid(Diagnostic::ConflictingInputModes)
        );
    }

    #[test]
    fn non_numeric_field_reports_before_range_checks() {
        let draft = draft_with_fields("abc", "3.5", "-1.0", "99");
        assert_eq!(
            validate_draft(&draft),
            ValidationOutcome::Invalid(Diagnostic::NonNumericMeasurement)
        );
    }

    #[test]
    fn nan_and_infinity_count_as_non_numeric() {
        for bad in ["NaN", "inf", "-inf"] {
            let draft = draft_with_fields(bad, "3.5", "1.4", "0.2");
            assert_eq!(
                validate_draft(&draft),
                ValidationOutcome::Invalid(Diagnostic::NonNumericMeasurement),
                "expected {bad} to be rejected as non-numeric"
            );
        }
    }

    #[test]
    fn negative_value_reports_before_upper_bound() {
        let draft = draft_with_fields("-0.1", "3.5", "1.4", "25");
        assert_eq!(
            validate_draft(&draft),
            ValidationOutcome::Invalid(Diagnostic::NegativeMeasurement)
        );
    }

    #[test]
    fn value_above_ten_is_out_of_range() {
        let draft = draft_with_fields("5.1", "10.1", "1.4", "0.2");
        assert_eq!(
            validate_draft(&draft),
            ValidationOutcome::Invalid(Diagnostic::MeasurementOutOfRange)
        );
    }

    #[test]
    fn boundary_values_are_accepted() {
        let draft = draft_with_fields("0", "10", "0.0", "10.0");
        match validate_draft(&draft) {
            ValidationOutcome::Valid(SubmissionPayload::Measurements(m)) => {
                assert_eq!(m.values(), [0.0, 10.0, 0.0, 10.0]);
            }
            other => panic!("expected valid measurements, got {other:?}"),
        }
    }

    #[test]
    fn valid_measurements_carry_exact_parsed_values() {
        let draft = draft_with_fields("5.1", "3.5", "1.4", "0.2");
        match validate_draft(&draft) {
            ValidationOutcome::Valid(SubmissionPayload::Measurements(m)) => {
                assert_eq!(m.sepal_length, 5.1);
                assert_eq!(m.sepal_width, 3.5);
                assert_eq!(m.petal_length, 1.4);
                assert_eq!(m.petal_width, 0.2);
            }
            other => panic!("expected valid measurements, got {other:?}"),
        }
    }

    #[test]
    fn surrounding_whitespace_still_parses() {
        let draft = draft_with_fields(" 5.1", "3.5 ", " 1.4 ", "0.2");
        match validate_draft(&draft) {
            ValidationOutcome::Valid(SubmissionPayload::Measurements(m)) => {
                assert_eq!(m.values(), [5.1, 3.5, 1.4, 0.2]);
            }
            other => panic!("expected valid measurements, got {other:?}"),
        }
    }

    #[test]
    fn image_only_draft_is_valid_without_numeric_checks() {
        let mut draft = Draft::default();
        draft.attach_image(sample_attachment(2 * 1024 * 1024)).unwrap();
        assert_eq!(
            validate_draft(&draft),
            ValidationOutcome::Valid(SubmissionPayload::Image(sample_attachment(2 * 1024 * 1024)))
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let drafts = [
            Draft::default(),
            draft_with_fields("5.1", "3.5", "1.4", "0.2"),
            draft_with_fields("abc", "3.5", "1.4", "0.2"),
        ];
        for draft in drafts {
            assert_eq!(validate_draft(&draft), validate_draft(&draft));
        }
    }

    #[test]
    fn set_field_touches_only_that_field() {
        let mut draft = draft_with_fields("5.1", "3.5", "1.4", "0.2");
        draft.attach_image(sample_attachment(100)).unwrap();
        draft.set_field(MeasurementField::PetalWidth, "0.3".to_string());

        assert_eq!(draft.sepal_length, "5.1");
        assert_eq!(draft.sepal_width, "3.5");
        assert_eq!(draft.petal_length, "1.4");
        assert_eq!(draft.petal_width, "0.3");
        assert_eq!(draft.image, Some(sample_attachment(100)));
    }

    #[test]
    fn oversized_image_is_rejected_and_slot_untouched() {
        let mut draft = Draft::default();
        let result = draft.attach_image(sample_attachment(6 * 1024 * 1024));
        assert_eq!(result, Err(Diagnostic::ImageTooLarge));
        assert!(draft.image.is_none());
    }

    #[test]
    fn image_size_boundary_is_inclusive() {
        let mut draft = Draft::default();
        assert_eq!(draft.attach_image(sample_attachment(MAX_IMAGE_BYTES)), Ok(()));

        let mut over = Draft::default();
        assert_eq!(
            over.attach_image(sample_attachment(MAX_IMAGE_BYTES + 1)),
            Err(Diagnostic::ImageTooLarge)
        );
    }

    #[test]
    fn oversized_replacement_keeps_previous_attachment() {
        let mut draft = Draft::default();
        draft.attach_image(sample_attachment(1024)).unwrap();
        let result = draft.attach_image(sample_attachment(MAX_IMAGE_BYTES + 1));
        assert_eq!(result, Err(Diagnostic::ImageTooLarge));
        assert_eq!(draft.image, Some(sample_attachment(1024)));
    }

    #[test]
    fn clear_image_leaves_fields_alone() {
        let mut draft = draft_with_fields("5.1", "3.5", "1.4", "0.2");
        draft.attach_image(sample_attachment(1024)).unwrap();
        draft.clear_image();
        assert!(draft.image.is_none());
        assert!(draft.has_values());
    }

    #[test]
    fn gate_rejects_attempt_while_pending() {
        let draft = draft_with_fields("5.1", "3.5", "1.4", "0.2");
        assert_eq!(
            begin_submission(&SubmissionState::Pending, &draft),
            SubmissionGate::InFlight
        );
    }

    #[test]
    fn gate_blocks_invalid_draft_without_dispatch() {
        let mut draft = draft_with_fields("5.1", "3.5", "1.4", "0.2");
        draft.attach_image(sample_attachment(1024)).unwrap();

        let mut dispatches = 0;
        match begin_submission(&SubmissionState::Idle, &draft) {
            SubmissionGate::Ready(_) => dispatches += 1,
            SubmissionGate::Blocked(diagnostic) => {
                assert_eq!(diagnostic, Diagnostic::ConflictingInputModes);
            }
            SubmissionGate::InFlight => panic!("nothing is in flight"),
        }
        assert_eq!(dispatches, 0);
    }

    #[test]
    fn gate_passes_payload_through_from_terminal_states() {
        let draft = draft_with_fields("5.1", "3.5", "1.4", "0.2");
        let expected = SubmissionGate::Ready(SubmissionPayload::Measurements(Measurements {
            sepal_length: 5.1,
            sepal_width: 3.5,
            petal_length: 1.4,
            petal_width: 0.2,
        }));

        assert_eq!(begin_submission(&SubmissionState::Idle, &draft), expected);
        assert_eq!(
            begin_submission(&SubmissionState::Failed("x".to_string()), &draft),
            expected
        );
    }

    #[test]
    fn successful_response_resolves_to_succeeded() {
        let body = r#"{
            "prediction": "Iris-setosa",
            "confidence": 0.98,
            "probabilities": {"setosa": 0.98, "versicolor": 0.01, "virginica": 0.01},
            "input_features": {"sepal_length": 5.1}
        }"#;
        let result: PredictionResult = serde_json::from_str(body).unwrap();

        match resolve_submission(Ok(result.clone())) {
            SubmissionState::Succeeded(got) => {
                assert_eq!(got.prediction, "Iris-setosa");
                assert_eq!(got.confidence, 0.98);
                assert_eq!(got.probabilities.get("setosa"), Some(&0.98));
                assert_eq!(got.probabilities.get("versicolor"), Some(&0.01));
                assert_eq!(got.probabilities.get("virginica"), Some(&0.01));
            }
            other => panic!("expected Succeeded, got {other:?}"),
        }
    }

    #[test]
    fn missing_probabilities_decode_as_empty_map() {
        let body = r#"{"prediction": "Iris-setosa", "confidence": 0.98}"#;
        let result: PredictionResult = serde_json::from_str(body).unwrap();
        assert!(result.probabilities.is_empty());
    }

    #[test]
    fn server_detail_wins_the_message_chain() {
        let detail = detail_from_body(r#"{"detail": "model unavailable"}"#);
        let error = PredictError::Http {
            status: 500,
            detail,
        };
        assert_eq!(
            resolve_submission(Err(error)),
            SubmissionState::Failed("model unavailable".to_string())
        );
    }

    #[test]
    fn status_message_when_server_gave_no_detail() {
        let error = PredictError::Http {
            status: 502,
            detail: None,
        };
        assert_eq!(error.user_message(), "HTTP error: 502");
    }

    #[test]
    fn transport_message_passes_through() {
        let error = PredictError::Transport("Request failed: connection refused".to_string());
        assert_eq!(error.user_message(), "Request failed: connection refused");
    }

    #[test]
    fn generic_fallback_when_nothing_more_specific_exists() {
        assert_eq!(
            PredictError::Transport(String::new()).user_message(),
            "Prediction failed"
        );
        assert_eq!(
            PredictError::Decode(String::new()).user_message(),
            "Prediction failed"
        );
    }

    #[test]
    fn detail_extraction_ignores_non_string_and_non_json_bodies() {
        assert_eq!(
            detail_from_body(r#"{"detail": "model unavailable"}"#),
            Some("model unavailable".to_string())
        );
        assert_eq!(detail_from_body(r#"{"detail": 42}"#), None);
        assert_eq!(detail_from_body(r#"{"error": "nope"}"#), None);
        assert_eq!(detail_from_body("<html>502</html>"), None);
    }

    #[test]
    fn resolution_always_leaves_pending() {
        let ok = resolve_submission(Ok(PredictionResult {
            prediction: "Iris-setosa".to_string(),
            confidence: 0.98,
            probabilities: BTreeMap::new(),
        }));
        assert!(!ok.is_pending());

        let err = resolve_submission(Err(PredictError::Transport("boom".to_string())));
        assert!(!err.is_pending());
    }

    #[test]
    fn measurement_form_fields_render_decimal_strings() {
        let m = Measurements {
            sepal_length: 5.1,
            sepal_width: 3.5,
            petal_length: 1.4,
            petal_width: 0.2,
        };
        assert_eq!(
            m.form_fields(),
            [
                ("sepal_length", "5.1".to_string()),
                ("sepal_width", "3.5".to_string()),
                ("petal_length", "1.4".to_string()),
                ("petal_width", "0.2".to_string()),
            ]
        );
    }

    #[test]
    fn diagnostics_render_their_exact_messages() {
        assert_eq!(
            Diagnostic::NoInputProvided.to_string(),
            "Upload an image OR enter all measurements"
        );
        assert_eq!(
            Diagnostic::ConflictingInputModes.to_string(),
            "Please use only ONE method: image or measurements"
        );
        assert_eq!(
            Diagnostic::ImageTooLarge.to_string(),
            "Image size should be less than 5MB"
        );
    }
}
