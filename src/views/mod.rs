// ============================================================================
// VIEWS - Enlazan el index.html estático con los viewmodels
// ============================================================================

pub mod messages;
pub mod navigation;
pub mod auth;
pub mod report_form;
pub mod report_list;

pub use messages::{show_message, MessageKind};
pub use navigation::{bind_navigation, show_section, update_navigation};
pub use auth::{bind_login_form, bind_logout, bind_register_form, perform_logout};
pub use report_form::bind_report_form;
pub use report_list::{bind_report_list_actions, download_report_pdf, load_report_list, report_id_from_js};
