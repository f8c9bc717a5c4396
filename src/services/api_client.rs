// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio ni toca el DOM. El token lo aporta el llamador.
// ============================================================================

use gloo_net::http::{Request, Response};
use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{Credentials, NewReport, Report};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_base_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn register_url(&self) -> String {
        format!("{}/auth/register", self.base_url)
    }

    pub fn login_url(&self) -> String {
        format!("{}/auth/login", self.base_url)
    }

    pub fn reports_url(&self) -> String {
        format!("{}/relatorios", self.base_url)
    }

    pub fn report_pdf_url(&self, id: i64) -> String {
        format!("{}/relatorios/{}/pdf", self.base_url, id)
    }

    /// Crear cuenta
    pub async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        log::info!("📝 [API] Registrando usuario: {}", credentials.username);

        let response = Request::post(&self.register_url())
            .json(credentials)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        ensure_success(response).await?;
        log::info!("✅ [API] Usuario registrado");
        Ok(())
    }

    /// Login: el cuerpo de la respuesta (texto plano) es el token
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        log::info!("🔐 [API] Login para usuario: {}", credentials.username);

        let response = Request::post(&self.login_url())
            .json(credentials)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = ensure_success(response).await?;
        let token = response
            .text()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        parse_token(&token)
    }

    /// POST /relatorios
    pub async fn create_report(&self, token: &str, report: &NewReport) -> Result<Report, ApiError> {
        log::info!("🧾 [API] Creando relatório: {}", report.title);

        let response = Request::post(&self.reports_url())
            .header("Authorization", &bearer(token))
            .json(report)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = ensure_success(response).await?;
        let created = response
            .json::<Report>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        log::info!("✅ [API] Relatório creado con id {}", created.id);
        Ok(created)
    }

    /// GET /relatorios (solo los del usuario del token)
    pub async fn list_reports(&self, token: &str) -> Result<Vec<Report>, ApiError> {
        let response = Request::get(&self.reports_url())
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = ensure_success(response).await?;
        let reports = response
            .json::<Vec<Report>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        log::info!("📋 [API] {} relatórios recibidos", reports.len());
        Ok(reports)
    }

    /// GET /relatorios/{id}/pdf → bytes del PDF
    pub async fn download_pdf(&self, token: &str, id: i64) -> Result<Vec<u8>, ApiError> {
        log::info!("📄 [API] Descargando PDF del relatório {}", id);

        let response = Request::get(&self.report_pdf_url(id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = ensure_success(response).await?;
        let bytes = response
            .binary()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        log::info!("✅ [API] PDF recibido ({} bytes)", bytes.len());
        Ok(bytes)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Valor de la cabecera Authorization
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

fn parse_token(body: &str) -> Result<String, ApiError> {
    let token = body.trim();
    if token.is_empty() {
        return Err(ApiError::Parse("token vazio".to_string()));
    }
    Ok(token.to_string())
}

/// 401 → Unauthorized, otro no-2xx → Http con el texto del cuerpo
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    if status == 401 {
        log::warn!("⚠️ [API] 401 en {}", response.url());
        return Err(ApiError::Unauthorized);
    }

    let body = response.text().await.unwrap_or_default();
    log::error!("❌ [API] HTTP {} en {}", status, response.url());
    Err(ApiError::Http { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoint_urls() {
        let api = ApiClient::with_base_url("http://localhost:8080/api/");
        assert_eq!(api.register_url(), "http://localhost:8080/api/auth/register");
        assert_eq!(api.login_url(), "http://localhost:8080/api/auth/login");
        assert_eq!(api.reports_url(), "http://localhost:8080/api/relatorios");
        assert_eq!(api.report_pdf_url(12), "http://localhost:8080/api/relatorios/12/pdf");
    }

    #[test]
    fn bearer_header_value() {
        assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
    }

    #[test]
    fn login_body_is_trimmed_token() {
        assert_eq!(parse_token("eyJhbGciOi.x.y\n"), Ok("eyJhbGciOi.x.y".to_string()));
        assert!(matches!(parse_token("  "), Err(ApiError::Parse(_))));
    }
}
