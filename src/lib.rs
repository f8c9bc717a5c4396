// ============================================================================
// MACROSCOPIA WEB - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// - Views: enlazan el index.html estático (formularios, menú, lista)
// - ViewModels: validación + orquestación de peticiones
// - Services: SOLO comunicación API / localStorage / descargas
// - State: token de sesión con Rc<RefCell>
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
pub mod app;

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use crate::app::App;
use crate::config::CONFIG;
use crate::state::Section;

// Instancia global de App (mantiene vivo el estado compartido por los listeners)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Error
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Macroscopia Web - Rust Puro + MVVM (API: {})", CONFIG.api_base_url());

    let app = App::new()?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Abrir la lista de relatórios (llamable desde JavaScript)
#[wasm_bindgen]
pub fn open_report_list() {
    APP.with(|cell| {
        if let Some(ref app) = *cell.borrow() {
            let state = app.state();
            match views::show_section(state, Section::ReportList) {
                Ok(Section::ReportList) => {
                    if let Err(e) = views::load_report_list(state) {
                        log::error!("❌ [LISTA] {:?}", e);
                    }
                }
                Ok(_) => {}
                Err(e) => log::error!("❌ [NAV] {:?}", e),
            }
        } else {
            log::warn!("⚠️ App no está inicializada");
        }
    });
}

/// Descargar el PDF de un relatório (llamable desde JavaScript con un `number`)
#[wasm_bindgen]
pub fn download_report_pdf(id: f64) {
    let Some(id) = views::report_id_from_js(id) else {
        log::warn!("⚠️ [PDF] Id de relatório inválido: {}", id);
        return;
    };
    APP.with(|cell| {
        if let Some(ref app) = *cell.borrow() {
            views::download_report_pdf(app.state(), id);
        } else {
            log::warn!("⚠️ App no está inicializada");
        }
    });
}
