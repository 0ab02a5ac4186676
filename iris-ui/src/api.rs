use gloo_net::http::Request;
use iris_types::{detail_from_body, Measurements, PredictError, PredictionResult};
use std::sync::OnceLock;
use web_sys::FormData;

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:8000
/// - In production: use same origin (API serves static files)
fn get_api_base() -> String {
    // Get the current hostname from the browser
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    // If running on localhost, point to the classifier API on port 8000
    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8000".to_string()
    } else {
        // In production, use same origin
        "".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

fn empty_form() -> Result<FormData, PredictError> {
    FormData::new().map_err(|e| PredictError::Transport(format!("Failed to build form: {e:?}")))
}

/// Submit the measurements mode: four decimal string fields, no image part.
pub async fn predict_with_measurements(
    measurements: Measurements,
) -> Result<PredictionResult, PredictError> {
    let form = empty_form()?;
    for (key, value) in measurements.form_fields() {
        form.append_with_str(key, &value)
            .map_err(|e| PredictError::Transport(format!("Failed to build form: {e:?}")))?;
    }
    send_predict(form).await
}

/// Submit the image mode: a single binary file part, no measurement fields.
pub async fn predict_with_image(file: web_sys::File) -> Result<PredictionResult, PredictError> {
    let form = empty_form()?;
    form.append_with_blob_and_filename("image", &file, &file.name())
        .map_err(|e| PredictError::Transport(format!("Failed to build form: {e:?}")))?;
    send_predict(form).await
}

/// POST one multipart body to the classifier. The browser supplies the
/// multipart boundary when the body is a `FormData`.
async fn send_predict(form: FormData) -> Result<PredictionResult, PredictError> {
    let url = format!("{}/api/predict", api_base());

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| PredictError::Transport(format!("Failed to encode request: {e}")))?
        .send()
        .await
        .map_err(|e| PredictError::Transport(format!("Request failed: {e}")))?;

    if !response.ok() {
        let status = response.status();
        let detail = response
            .text()
            .await
            .ok()
            .and_then(|body| detail_from_body(&body));
        return Err(PredictError::Http { status, detail });
    }

    response
        .json::<PredictionResult>()
        .await
        .map_err(|e| PredictError::Decode(format!("Failed to parse JSON: {e}")))
}
