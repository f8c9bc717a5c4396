// ============================================================================
// REPORT FORM VIEW - Formulario de nuevo relatório
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::dom::{clear_inputs, input_value, on_submit, require_element};
use crate::state::AppState;
use crate::utils::{messages, FORM_REPORT, REPORT_FIELD_IDS, REPORT_MESSAGE};
use crate::viewmodels::{ReportFailure, ReportForm, ReportViewModel};
use crate::views::auth::perform_logout;
use crate::views::messages::{show_error, show_success};

/// Leer los campos del formulario tal cual
pub fn read_report_form() -> ReportForm {
    let [title, description, author, crm, width, length, thickness] = REPORT_FIELD_IDS.map(input_value);
    ReportForm {
        title,
        description,
        author,
        crm,
        width,
        length,
        thickness,
    }
}

pub fn bind_report_form(state: &AppState) -> Result<(), JsValue> {
    let form = require_element(FORM_REPORT)?;
    let state = state.clone();

    on_submit(&form, move || {
        if !state.auth.is_authenticated() {
            show_error(REPORT_MESSAGE, &ReportFailure::NotAuthenticated.create_message());
            return;
        }

        let new_report = match read_report_form().validate() {
            Ok(r) => r,
            Err(e) => {
                show_error(REPORT_MESSAGE, &e.to_string());
                return;
            }
        };

        let state = state.clone();
        spawn_local(async move {
            let vm = ReportViewModel::new(state.auth.clone());
            match vm.create(&new_report).await {
                Ok(report) => {
                    show_success(REPORT_MESSAGE, &messages::report_created(report.id));
                    clear_inputs(&REPORT_FIELD_IDS);
                }
                Err(failure) => {
                    log::error!("❌ [RELATORIO] {:?}", failure);
                    show_error(REPORT_MESSAGE, &failure.create_message());
                    if failure.requires_logout() {
                        perform_logout(&state);
                    }
                }
            }
        });
    })
}
