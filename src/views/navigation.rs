// ============================================================================
// NAVIGATION VIEW - Botones del menú y secciones visibles
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{add_class, get_element_by_id, on_click, query_selector_all, remove_class, set_display};
use crate::state::{resolve_section, AppState, NavItem, Section};
use crate::utils::{ACTIVE_SECTION_CLASS, LOGIN_MESSAGE, SECTION_CLASS};
use crate::views::messages::show_error;
use crate::views::report_list::load_report_list;

/// Mostrar/ocultar botones según haya token o no
pub fn update_navigation(state: &AppState) -> Result<(), JsValue> {
    let authenticated = state.auth.is_authenticated();
    for item in NavItem::ALL {
        match get_element_by_id(item.element_id()) {
            Some(button) => set_display(&button, item.display(authenticated))?,
            None => log::warn!("⚠️ [NAV] #{} no encontrado", item.element_id()),
        }
    }
    Ok(())
}

/// Activar una sección (las protegidas redirigen a Login sin token)
pub fn show_section(state: &AppState, requested: Section) -> Result<Section, JsValue> {
    let resolution = resolve_section(requested, state.auth.is_authenticated());

    for section in query_selector_all(&format!(".{}", SECTION_CLASS))? {
        remove_class(&section, ACTIVE_SECTION_CLASS)?;
    }

    if let Some(message) = resolution.guard_message {
        log::warn!("🔒 [NAV] {:?} requiere login", requested);
        show_error(LOGIN_MESSAGE, message);
    }

    if let Some(element) = get_element_by_id(resolution.section.element_id()) {
        add_class(&element, ACTIVE_SECTION_CLASS)?;
    }

    Ok(resolution.section)
}

/// Clicks del menú (el logout se enlaza en views::auth)
pub fn bind_navigation(state: &AppState) -> Result<(), JsValue> {
    let targets = [
        (NavItem::Login, Section::Login),
        (NavItem::Register, Section::Register),
        (NavItem::ReportForm, Section::ReportForm),
        (NavItem::ReportList, Section::ReportList),
    ];

    for (item, section) in targets {
        let Some(button) = get_element_by_id(item.element_id()) else {
            log::warn!("⚠️ [NAV] #{} no encontrado", item.element_id());
            continue;
        };
        let state = state.clone();
        on_click(&button, move |_| {
            match show_section(&state, section) {
                Ok(Section::ReportList) => {
                    if let Err(e) = load_report_list(&state) {
                        log::error!("❌ [NAV] {:?}", e);
                    }
                }
                Ok(_) => {}
                Err(e) => log::error!("❌ [NAV] {:?}", e),
            }
        })?;
    }
    Ok(())
}
