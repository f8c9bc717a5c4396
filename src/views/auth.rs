// ============================================================================
// AUTH VIEW - Formularios de registro y login, botón de logout
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use gloo_timers::callback::Timeout;
use crate::config::CONFIG;
use crate::dom::{clear_inputs, input_value, on_click, on_submit, require_element};
use crate::state::{AppState, NavItem, Section};
use crate::utils::{messages, FORM_LOGIN, FORM_REGISTER, LOGIN_MESSAGE, LOGIN_PASSWORD, LOGIN_USERNAME, REGISTER_MESSAGE, REGISTER_PASSWORD, REGISTER_USERNAME};
use crate::viewmodels::auth_viewmodel::{login_error_message, register_error_message, validate_login, validate_registration};
use crate::viewmodels::AuthViewModel;
use crate::views::messages::{show_error, show_success};
use crate::views::navigation::{show_section, update_navigation};

/// Cerrar sesión y volver a Login
///
/// También se usa cuando el backend responde 401.
pub fn perform_logout(state: &AppState) {
    AuthViewModel::new(state.auth.clone()).logout();

    if let Err(e) = update_navigation(state) {
        log::error!("❌ [LOGOUT] Error actualizando navegación: {:?}", e);
    }
    show_success(LOGIN_MESSAGE, messages::LOGOUT_SUCCESS);
    if let Err(e) = show_section(state, Section::Login) {
        log::error!("❌ [LOGOUT] Error mostrando login: {:?}", e);
    }
}

/// Mostrar una sección tras `delay_ms`
fn show_section_later(state: &AppState, section: Section, delay_ms: u32) {
    let state = state.clone();
    Timeout::new(delay_ms, move || {
        if let Err(e) = show_section(&state, section) {
            log::error!("❌ [NAV] {:?}", e);
        }
    })
    .forget();
}

pub fn bind_register_form(state: &AppState) -> Result<(), JsValue> {
    let form = require_element(FORM_REGISTER)?;
    let state = state.clone();

    on_submit(&form, move || {
        let credentials = match validate_registration(
            &input_value(REGISTER_USERNAME),
            &input_value(REGISTER_PASSWORD),
            CONFIG.min_password_length,
        ) {
            Ok(c) => c,
            Err(e) => {
                show_error(REGISTER_MESSAGE, &e.to_string());
                return;
            }
        };

        let state = state.clone();
        spawn_local(async move {
            let vm = AuthViewModel::new(state.auth.clone());
            match vm.register(&credentials).await {
                Ok(()) => {
                    show_success(REGISTER_MESSAGE, messages::REGISTER_SUCCESS);
                    clear_inputs(&[REGISTER_USERNAME, REGISTER_PASSWORD]);
                    show_section_later(&state, Section::Login, CONFIG.ui_config.register_redirect_ms);
                }
                Err(e) => {
                    log::error!("❌ [REGISTRO] {}", e);
                    show_error(REGISTER_MESSAGE, &register_error_message(&e));
                }
            }
        });
    })
}

pub fn bind_login_form(state: &AppState) -> Result<(), JsValue> {
    let form = require_element(FORM_LOGIN)?;
    let state = state.clone();

    on_submit(&form, move || {
        let credentials = match validate_login(&input_value(LOGIN_USERNAME), &input_value(LOGIN_PASSWORD)) {
            Ok(c) => c,
            Err(e) => {
                show_error(LOGIN_MESSAGE, &e.to_string());
                return;
            }
        };

        let state = state.clone();
        spawn_local(async move {
            let vm = AuthViewModel::new(state.auth.clone());
            match vm.login(&credentials).await {
                Ok(()) => {
                    show_success(LOGIN_MESSAGE, messages::LOGIN_SUCCESS);
                    clear_inputs(&[LOGIN_USERNAME, LOGIN_PASSWORD]);
                    if let Err(e) = update_navigation(&state) {
                        log::error!("❌ [LOGIN] {:?}", e);
                    }
                    show_section_later(&state, Section::ReportForm, CONFIG.ui_config.login_redirect_ms);
                }
                Err(e) => {
                    log::warn!("⚠️ [LOGIN] {}", e);
                    show_error(LOGIN_MESSAGE, &login_error_message(&e));
                }
            }
        });
    })
}

pub fn bind_logout(state: &AppState) -> Result<(), JsValue> {
    let button = require_element(NavItem::Logout.element_id())?;
    let state = state.clone();
    on_click(&button, move |_| perform_logout(&state))
}
