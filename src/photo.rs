//! Photo Decoding
//!
//! Reads a picked image file into a `data:` URL with `FileReader`.

use js_sys::Promise;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, File, FileReader, HtmlInputElement};

use crate::error::PhotoError;

/// First file selected in a file input, if any
pub fn selected_file(ev: &Event) -> Option<File> {
    let input = ev.target()?.dyn_into::<HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

pub async fn read_as_data_url(file: &File) -> Result<String, PhotoError> {
    let reader = FileReader::new().map_err(js_error)?;

    let promise = Promise::new(&mut |resolve, reject| {
        reader.set_onload(Some(&resolve));
        reader.set_onerror(Some(&reject));
        reader.set_onabort(Some(&reject));
    });
    reader.read_as_data_url(file).map_err(js_error)?;

    match JsFuture::from(promise).await {
        Ok(_) => reader
            .result()
            .map_err(js_error)?
            .as_string()
            .ok_or_else(|| PhotoError::Read("reader result is not a string".to_string())),
        Err(ev) => {
            let kind = ev.dyn_ref::<Event>().map(|e| e.type_());
            if kind.as_deref() == Some("abort") {
                Err(PhotoError::Aborted)
            } else {
                Err(PhotoError::Read(format!("{} ({})", file.name(), kind.unwrap_or_default())))
            }
        }
    }
}

fn js_error(value: JsValue) -> PhotoError {
    PhotoError::Read(format!("{:?}", value))
}
