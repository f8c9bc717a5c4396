// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, NodeList, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Obtener elemento por ID o error (para elementos obligatorios del index.html)
pub fn require_element(id: &str) -> Result<Element, JsValue> {
    get_element_by_id(id).ok_or_else(|| JsValue::from_str(&format!("No #{} element found", id)))
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().remove_1(class)
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

pub fn get_attribute(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name)
}

/// `style.display` (p.ej. "flex" / "none")
pub fn set_display(element: &Element, display: &str) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .style()
        .set_property("display", display)
}

/// Query selector all sobre el document
pub fn query_selector_all(selector: &str) -> Result<Vec<Element>, JsValue> {
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
    Ok(node_list_elements(&doc.query_selector_all(selector)?))
}

fn node_list_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Valor de un <input> o <textarea> por ID ("" si no existe)
pub fn input_value(id: &str) -> String {
    let Some(element) = get_element_by_id(id) else {
        log::warn!("⚠️ [DOM] Campo #{} no encontrado", id);
        return String::new();
    };

    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

pub fn set_input_value(id: &str, value: &str) {
    if let Some(element) = get_element_by_id(id) {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }
}

/// Vaciar varios campos de formulario
pub fn clear_inputs(ids: &[&str]) {
    for id in ids {
        set_input_value(id, "");
    }
}
