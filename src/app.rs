// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::services::SessionService;
use crate::state::{AppState, AuthState, Section};
use crate::views::{
    bind_login_form, bind_logout, bind_navigation, bind_register_form, bind_report_form,
    bind_report_list_actions, show_section, update_navigation,
};

/// Aplicación principal
pub struct App {
    state: AppState,
}

impl App {
    /// Restaura el token y enlaza los listeners del documento (una sola vez)
    pub fn new() -> Result<Self, JsValue> {
        let token = SessionService::new().load_token();
        if token.is_some() {
            log::info!("💾 [APP] Token encontrado en storage, sesión restaurada");
        }

        let state = AppState::new(AuthState::with_token(token));

        bind_navigation(&state)?;
        bind_logout(&state)?;
        bind_register_form(&state)?;
        bind_login_form(&state)?;
        bind_report_form(&state)?;
        bind_report_list_actions(&state)?;

        Ok(Self { state })
    }

    /// Sincroniza menú y sección inicial
    pub fn render(&self) -> Result<(), JsValue> {
        update_navigation(&self.state)?;
        let landing = Section::landing(self.state.auth.is_authenticated());
        let shown = show_section(&self.state, landing)?;
        log::info!("🎬 [APP] Sección inicial: {:?}", shown);
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
