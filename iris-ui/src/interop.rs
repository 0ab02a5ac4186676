use dioxus::prelude::Callback;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, FileReader, HtmlInputElement};

/// Read the first file currently selected in the given `<input type="file">`.
pub fn selected_file(input_id: &str) -> Option<web_sys::File> {
    let document = web_sys::window()?.document()?;
    let input = document
        .get_element_by_id(input_id)?
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    input.files()?.get(0)
}

/// Reset the file input's value so re-picking the same file fires `onchange`.
pub fn clear_file_input(input_id: &str) {
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(input_id))
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok());

    if let Some(input) = input {
        input.set_value("");
    }
}

/// Start a fire-and-forget `FileReader` read of `file`, delivering the data
/// URL to `on_ready` when it completes. The preview is cosmetic: callers must
/// never gate validation or submission on it.
pub fn load_image_preview(file: &web_sys::File, on_ready: Callback<String>) {
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            log::error!("Failed to create FileReader: {e:?}");
            return;
        }
    };

    let reader_handle = reader.clone();
    let onloadend = Closure::wrap(Box::new(move |_e: Event| match reader_handle.result() {
        Ok(value) => {
            if let Some(data_url) = value.as_string() {
                on_ready.call(data_url);
            }
        }
        Err(e) => log::error!("Failed to read image preview: {e:?}"),
    }) as Box<dyn FnMut(Event)>);
    reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));

    // Leak the closure to keep it alive until the read fires
    onloadend.forget();

    if let Err(e) = reader.read_as_data_url(file) {
        log::error!("Failed to start preview read: {e:?}");
    }
}
