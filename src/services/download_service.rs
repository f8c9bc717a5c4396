// ============================================================================
// DOWNLOAD SERVICE - Descarga de archivos generados en memoria
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};
use crate::dom::{create_element, document};
use crate::models::pdf_file_name;

const PDF_MIME: &str = "application/pdf";

/// Descargar el PDF de un relatório como `relatorio_{id}.pdf`
pub fn trigger_pdf_download(id: i64, bytes: &[u8]) -> Result<(), JsValue> {
    let blob = bytes_to_blob(bytes, PDF_MIME)?;
    trigger_blob_download(&blob, &pdf_file_name(id))
}

fn bytes_to_blob(bytes: &[u8], mime: &str) -> Result<Blob, JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let options = BlobPropertyBag::new();
    options.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}

/// Enlace temporal con `download`, click y limpieza
fn trigger_blob_download(blob: &Blob, file_name: &str) -> Result<(), JsValue> {
    let body = document()
        .and_then(|d| d.body())
        .ok_or_else(|| JsValue::from_str("No body"))?;

    let url = Url::create_object_url_with_blob(blob)?;

    let anchor = create_element("a")?.dyn_into::<HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    body.append_child(&anchor)?;
    anchor.click();

    Url::revoke_object_url(&url)?;
    body.remove_child(&anchor)?;

    log::info!("📥 [DOWNLOAD] {} descargado", file_name);
    Ok(())
}
