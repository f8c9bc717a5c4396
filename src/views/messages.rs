// ============================================================================
// MESSAGES VIEW - Avisos en los contenedores `.mensagem`
// ============================================================================

use gloo_timers::callback::Timeout;
use crate::config::CONFIG;
use crate::dom::{get_element_by_id, remove_class, set_class_name, set_text_content};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }

    /// Solo los avisos de éxito desaparecen solos
    pub fn auto_hides(self) -> bool {
        matches!(self, MessageKind::Success)
    }
}

pub fn message_class(kind: MessageKind) -> String {
    format!("mensagem show {}", kind.as_str())
}

/// Mostrar un aviso en el elemento `element_id` (no hace nada si no existe)
pub fn show_message(element_id: &str, text: &str, kind: MessageKind) {
    let Some(element) = get_element_by_id(element_id) else {
        log::warn!("⚠️ [MSG] #{} no encontrado", element_id);
        return;
    };

    set_text_content(&element, text);
    set_class_name(&element, &message_class(kind));

    if kind.auto_hides() {
        Timeout::new(CONFIG.ui_config.success_message_ms, move || {
            let _ = remove_class(&element, "show");
        })
        .forget();
    }
}

pub fn show_error(element_id: &str, text: &str) {
    show_message(element_id, text, MessageKind::Error);
}

pub fn show_success(element_id: &str, text: &str) {
    show_message(element_id, text, MessageKind::Success);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names_match_stylesheet() {
        assert_eq!(message_class(MessageKind::Success), "mensagem show success");
        assert_eq!(message_class(MessageKind::Error), "mensagem show error");
    }

    #[test]
    fn only_success_auto_hides() {
        assert!(MessageKind::Success.auto_hides());
        assert!(!MessageKind::Error.auto_hides());
    }
}
