pub mod api_client;
pub mod session_service;
pub mod download_service;

pub use api_client::ApiClient;
pub use session_service::SessionService;
pub use download_service::trigger_pdf_download;
