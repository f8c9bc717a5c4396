// ============================================================================
// REPORT LIST VIEW - Lista de relatórios como cards
// ============================================================================
// El HTML se genera como string (texto del servidor siempre escapado). Los
// botones PDF no llevan listener propio: un único listener delegado en
// #listaRelatorios resuelve el botón pulsado por `data-report-id`.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};
use crate::dom::{get_attribute, on_click, require_element, set_inner_html};
use crate::error::ApiError;
use crate::models::Report;
use crate::services::trigger_pdf_download;
use crate::state::AppState;
use crate::utils::{escape_html, format_date, messages, or_not_available, REPORT_LIST_CONTAINER, REPORT_MESSAGE};
use crate::viewmodels::{ReportFailure, ReportViewModel};
use crate::views::auth::perform_logout;
use crate::views::messages::show_error;

const PDF_BUTTON_SELECTOR: &str = "button[data-report-id]";
const REPORT_ID_ATTR: &str = "data-report-id";

/// Valor de `data-report-id` → id del relatório
pub fn parse_report_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse::<i64>().ok().filter(|id| *id >= 0)
}

/// Número de JavaScript → id (solo enteros no negativos representables)
pub fn report_id_from_js(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value > i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}

/// Bloque `.relatorio-empty` con icono y texto (texto ya escapado)
fn empty_block(icon: &str, text: &str) -> String {
    format!(
        r#"<div class="relatorio-empty"><i class="fas {}"></i><p>{}</p></div>"#,
        icon,
        escape_html(text)
    )
}

pub fn render_loading_html() -> String {
    empty_block("fa-spinner", messages::LIST_LOADING)
}

pub fn render_empty_html() -> String {
    empty_block("fa-inbox", messages::LIST_EMPTY)
}

pub fn render_error_html(text: &str) -> String {
    empty_block("fa-exclamation-circle", text)
}

fn info_item(icon: &str, label: &str, value: &str) -> String {
    format!(
        r#"<div class="relatorio-info-item"><span class="relatorio-info-label"><i class="fas {}"></i> {}</span><span class="relatorio-info-value">{}</span></div>"#,
        icon,
        label,
        escape_html(value)
    )
}

/// Card de un relatório
pub fn render_report_card(report: &Report) -> String {
    let mut html = String::new();
    html.push_str(r#"<div class="relatorio-card">"#);

    html.push_str(&format!(
        r#"<div class="relatorio-header"><h3 class="relatorio-title">{}</h3><span class="relatorio-id">#{}</span></div>"#,
        escape_html(&report.title),
        report.id
    ));

    html.push_str(r#"<div class="relatorio-info">"#);
    html.push_str(&info_item("fa-user-md", "Autor", &report.author));
    html.push_str(&info_item("fa-id-card", "CRM", &report.crm));
    html.push_str(&info_item("fa-calendar", "Data Criação", &format_date(report.created_at.as_deref())));
    html.push_str(&info_item("fa-clock", "Hora", &or_not_available(report.measured_at.as_deref())));
    html.push_str(&info_item("fa-ruler", "Dimensões", &report.dimensions_label()));
    html.push_str("</div>");

    html.push_str(&format!(
        r#"<div class="relatorio-actions"><button type="button" class="btn btn-primary" data-report-id="{}" title="Gerar PDF do relatório"><i class="fas fa-file-pdf"></i> PDF</button></div>"#,
        report.id
    ));

    html.push_str("</div>");
    html
}

/// Lista completa (o el estado vacío)
pub fn render_report_list_html(reports: &[Report]) -> String {
    if reports.is_empty() {
        return render_empty_html();
    }
    reports.iter().map(render_report_card).collect()
}

/// Cargar y pintar la lista de relatórios del usuario
pub fn load_report_list(state: &AppState) -> Result<(), JsValue> {
    if !state.auth.is_authenticated() {
        show_error(REPORT_MESSAGE, messages::LOGIN_REQUIRED_LIST);
        return Ok(());
    }

    let container = require_element(REPORT_LIST_CONTAINER)?;
    set_inner_html(&container, &render_loading_html());

    let state = state.clone();
    spawn_local(async move {
        let vm = ReportViewModel::new(state.auth.clone());
        match vm.list().await {
            Ok(reports) => {
                set_inner_html(&container, &render_report_list_html(&reports));
            }
            Err(ReportFailure::SessionExpired) => {
                show_error(REPORT_MESSAGE, messages::TOKEN_EXPIRED);
                perform_logout(&state);
            }
            Err(ReportFailure::NotAuthenticated) => {
                show_error(REPORT_MESSAGE, messages::LOGIN_REQUIRED_LIST);
            }
            Err(ReportFailure::Api(ApiError::Network(msg))) => {
                log::error!("❌ [LISTA] {}", msg);
                set_inner_html(&container, &render_error_html(&messages::connection_error(&msg)));
            }
            Err(ReportFailure::Api(e)) => {
                log::error!("❌ [LISTA] {}", e);
                set_inner_html(&container, &render_error_html(messages::LIST_ERROR));
            }
        }
    });

    Ok(())
}

/// Botón PDF (o uno de sus hijos, p.ej. el icono) que recibió el click
fn clicked_report_id(event: &MouseEvent) -> Option<i64> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let button = target.closest(PDF_BUTTON_SELECTOR).ok()??;
    parse_report_id(get_attribute(&button, REPORT_ID_ATTR).as_deref())
}

/// Listener delegado para los botones PDF (se registra una vez en App::new)
pub fn bind_report_list_actions(state: &AppState) -> Result<(), JsValue> {
    let container = require_element(REPORT_LIST_CONTAINER)?;
    let state = state.clone();
    on_click(&container, move |e| {
        if let Some(id) = clicked_report_id(&e) {
            download_report_pdf(&state, id);
        }
    })
}

/// Descargar `relatorio_{id}.pdf`
pub fn download_report_pdf(state: &AppState, id: i64) {
    if !state.auth.is_authenticated() {
        show_error(REPORT_MESSAGE, &ReportFailure::NotAuthenticated.pdf_message());
        return;
    }

    let state = state.clone();
    spawn_local(async move {
        let vm = ReportViewModel::new(state.auth.clone());
        match vm.download_pdf(id).await {
            Ok(bytes) => {
                if let Err(e) = trigger_pdf_download(id, &bytes) {
                    log::error!("❌ [PDF] {:?}", e);
                    show_error(REPORT_MESSAGE, messages::PDF_ERROR);
                }
            }
            Err(failure) => {
                log::error!("❌ [PDF] {:?}", failure);
                show_error(REPORT_MESSAGE, &failure.pdf_message());
                if failure.requires_logout() {
                    perform_logout(&state);
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: i64, title: &str) -> Report {
        Report {
            id,
            title: title.to_string(),
            description: Some("desc".into()),
            author: "Dr. <House>".into(),
            crm: "CRM/SP 1".into(),
            width: 1.5,
            length: 2.0,
            thickness: 0.25,
            created_at: Some("2024-02-01T09:00:00".into()),
            measured_at: None,
        }
    }

    #[test]
    fn card_escapes_server_text() {
        let html = render_report_card(&report(3, "<script>alert('x')</script>"));
        assert!(html.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
        assert!(html.contains("Dr. &lt;House&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn card_shows_id_dates_and_dimensions() {
        let html = render_report_card(&report(3, "Biópsia"));
        assert!(html.contains(r#"<span class="relatorio-id">#3</span>"#));
        assert!(html.contains("01/02/2024"));
        assert!(html.contains(">N/A<"));
        assert!(html.contains("L: 1.5cm × C: 2cm × E: 0.25cm"));
        assert!(html.contains(r#"data-report-id="3""#));
    }

    #[test]
    fn empty_list_renders_empty_state() {
        let html = render_report_list_html(&[]);
        assert!(html.contains("fa-inbox"));
        assert!(html.contains("Nenhum relatório encontrado"));
    }

    #[test]
    fn list_renders_one_card_per_report() {
        let html = render_report_list_html(&[report(1, "a"), report(2, "b")]);
        assert_eq!(html.matches(r#"class="relatorio-card""#).count(), 2);
        assert_eq!(html.matches("data-report-id=").count(), 2);
    }

    #[test]
    fn report_id_attribute_parsing() {
        assert_eq!(parse_report_id(Some("42")), Some(42));
        assert_eq!(parse_report_id(Some(" 7 ")), Some(7));
        assert_eq!(parse_report_id(Some("")), None);
        assert_eq!(parse_report_id(Some("abc")), None);
        assert_eq!(parse_report_id(Some("-3")), None);
        assert_eq!(parse_report_id(None), None);
    }

    #[test]
    fn rendered_button_id_round_trips_through_attribute() {
        let html = render_report_card(&report(815, "t"));
        let attr = html
            .split(r#"data-report-id=""#)
            .nth(1)
            .and_then(|rest| rest.split('"').next());
        assert_eq!(parse_report_id(attr), Some(815));
    }

    #[test]
    fn js_numbers_convert_to_report_ids() {
        assert_eq!(report_id_from_js(3.0), Some(3));
        assert_eq!(report_id_from_js(0.0), Some(0));
        assert_eq!(report_id_from_js(2.5), None);
        assert_eq!(report_id_from_js(-1.0), None);
        assert_eq!(report_id_from_js(f64::NAN), None);
        assert_eq!(report_id_from_js(f64::INFINITY), None);
    }

    #[test]
    fn error_block_escapes_message() {
        let html = render_error_html("Erro de conexão: <timeout>");
        assert!(html.contains("fa-exclamation-circle"));
        assert!(html.contains("&lt;timeout&gt;"));
    }
}
