pub mod auth;
pub mod report;

pub use auth::Credentials;
pub use report::{pdf_file_name, NewReport, Report};
