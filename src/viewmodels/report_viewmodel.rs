// ============================================================================
// REPORT VIEWMODEL - Crear, listar y descargar relatórios
// ============================================================================

use crate::error::{ApiError, ValidationError};
use crate::models::{NewReport, Report};
use crate::services::ApiClient;
use crate::state::AuthState;
use crate::utils::messages;

/// Valores crudos del formulario de relatório
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportForm {
    pub title: String,
    pub description: String,
    pub author: String,
    pub crm: String,
    pub width: String,
    pub length: String,
    pub thickness: String,
}

impl ReportForm {
    /// Texto recortado + dimensiones numéricas
    ///
    /// Título, autor, CRM y las tres dimensiones son obligatorios; una dimensión
    /// vacía, ilegible o igual a cero cuenta como ausente. La descripción es
    /// opcional. Después se exige que ninguna dimensión sea negativa.
    pub fn validate(&self) -> Result<NewReport, ValidationError> {
        let title = self.title.trim();
        let author = self.author.trim();
        let crm = self.crm.trim();

        let dims = [
            parse_dimension(&self.width),
            parse_dimension(&self.length),
            parse_dimension(&self.thickness),
        ];

        let missing_text = title.is_empty() || author.is_empty() || crm.is_empty();
        let missing_dim = dims.iter().any(|d| d.map_or(true, |v| v == 0.0));
        if missing_text || missing_dim {
            return Err(ValidationError::MissingRequiredFields);
        }

        let [width, length, thickness] = dims.map(|d| d.unwrap_or_default());
        if width <= 0.0 || length <= 0.0 || thickness <= 0.0 {
            return Err(ValidationError::DimensionsNotPositive);
        }

        Ok(NewReport {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            author: author.to_string(),
            crm: crm.to_string(),
            width,
            length,
            thickness,
        })
    }
}

/// Decimal con punto o coma; None si no es un número finito
fn parse_dimension(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Fallos de las operaciones sobre relatórios
#[derive(Debug, Clone, PartialEq)]
pub enum ReportFailure {
    /// No hay token: no se hizo la petición
    NotAuthenticated,
    /// El backend respondió 401: hay que cerrar sesión
    SessionExpired,
    Api(ApiError),
}

impl From<ApiError> for ReportFailure {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Unauthorized => ReportFailure::SessionExpired,
            other => ReportFailure::Api(other),
        }
    }
}

impl ReportFailure {
    pub fn requires_logout(&self) -> bool {
        matches!(self, ReportFailure::SessionExpired)
    }

    pub fn create_message(&self) -> String {
        match self {
            ReportFailure::NotAuthenticated => messages::LOGIN_REQUIRED_CREATE.to_string(),
            ReportFailure::SessionExpired => messages::TOKEN_EXPIRED_CREATE.to_string(),
            ReportFailure::Api(ApiError::Network(msg)) => messages::connection_error(msg),
            ReportFailure::Api(other) => messages::create_report_error(&other.detail()),
        }
    }

    pub fn pdf_message(&self) -> String {
        match self {
            ReportFailure::NotAuthenticated => messages::LOGIN_REQUIRED.to_string(),
            ReportFailure::SessionExpired => messages::TOKEN_EXPIRED.to_string(),
            ReportFailure::Api(ApiError::Network(msg)) => messages::connection_error(msg),
            ReportFailure::Api(_) => messages::PDF_ERROR.to_string(),
        }
    }
}

pub struct ReportViewModel {
    api_client: ApiClient,
    auth: AuthState,
}

impl ReportViewModel {
    pub fn new(auth: AuthState) -> Self {
        Self {
            api_client: ApiClient::new(),
            auth,
        }
    }

    fn token(&self) -> Result<String, ReportFailure> {
        self.auth.get_token().ok_or(ReportFailure::NotAuthenticated)
    }

    pub async fn create(&self, report: &NewReport) -> Result<Report, ReportFailure> {
        let token = self.token()?;
        Ok(self.api_client.create_report(&token, report).await?)
    }

    pub async fn list(&self) -> Result<Vec<Report>, ReportFailure> {
        let token = self.token()?;
        Ok(self.api_client.list_reports(&token).await?)
    }

    pub async fn download_pdf(&self, id: i64) -> Result<Vec<u8>, ReportFailure> {
        let token = self.token()?;
        Ok(self.api_client.download_pdf(&token, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ReportForm {
        ReportForm {
            title: " Peça cirúrgica ".into(),
            description: "  fragmento irregular ".into(),
            author: "Dra. Ana".into(),
            crm: "12345".into(),
            width: "2.5".into(),
            length: "3".into(),
            thickness: "0,4".into(),
        }
    }

    #[test]
    fn valid_form_becomes_request_body() {
        let report = filled_form().validate().unwrap();
        assert_eq!(report.title, "Peça cirúrgica");
        assert_eq!(report.description, "fragmento irregular");
        assert_eq!(report.width, 2.5);
        assert_eq!(report.length, 3.0);
        assert_eq!(report.thickness, 0.4);
    }

    #[test]
    fn description_is_optional() {
        let mut form = filled_form();
        form.description.clear();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn missing_text_fields_are_rejected() {
        let mut form = filled_form();
        form.crm = "   ".into();
        assert_eq!(form.validate(), Err(ValidationError::MissingRequiredFields));
    }

    #[test]
    fn empty_unparsable_or_zero_dimensions_count_as_missing() {
        for bad in ["", "abc", "0", "0.0"] {
            let mut form = filled_form();
            form.length = bad.into();
            assert_eq!(form.validate(), Err(ValidationError::MissingRequiredFields), "input {:?}", bad);
        }
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        let mut form = filled_form();
        form.thickness = "-1".into();
        assert_eq!(form.validate(), Err(ValidationError::DimensionsNotPositive));
    }

    #[test]
    fn unauthorized_maps_to_session_expired() {
        let failure = ReportFailure::from(ApiError::Unauthorized);
        assert!(failure.requires_logout());
        assert_eq!(failure.create_message(), messages::TOKEN_EXPIRED_CREATE);
        assert_eq!(failure.pdf_message(), messages::TOKEN_EXPIRED);
    }

    #[test]
    fn create_failure_messages() {
        let http = ReportFailure::from(ApiError::Http { status: 400, body: "CRM inválido".into() });
        assert!(!http.requires_logout());
        assert_eq!(http.create_message(), "Erro ao criar relatório: CRM inválido");

        let net = ReportFailure::from(ApiError::Network("timeout".into()));
        assert_eq!(net.create_message(), "Erro de conexão: timeout");

        assert_eq!(ReportFailure::NotAuthenticated.create_message(), messages::LOGIN_REQUIRED_CREATE);
    }

    #[test]
    fn pdf_failure_is_generic() {
        let http = ReportFailure::from(ApiError::Http { status: 500, body: "stack trace".into() });
        assert_eq!(http.pdf_message(), messages::PDF_ERROR);
    }

    #[test]
    fn missing_token_short_circuits() {
        let vm = ReportViewModel::new(AuthState::new());
        assert_eq!(vm.token(), Err(ReportFailure::NotAuthenticated));
    }
}
