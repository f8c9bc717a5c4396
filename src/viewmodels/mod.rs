pub mod auth_viewmodel;
pub mod report_viewmodel;

pub use auth_viewmodel::AuthViewModel;
pub use report_viewmodel::{ReportFailure, ReportForm, ReportViewModel};
