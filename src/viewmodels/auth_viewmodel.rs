// ============================================================================
// AUTH VIEWMODEL - Registro, login y logout
// ============================================================================
// Devuelve valores; las views deciden qué mensaje mostrar y qué sección abrir.
// ============================================================================

use crate::error::{ApiError, ValidationError};
use crate::models::Credentials;
use crate::services::{ApiClient, SessionService};
use crate::state::AuthState;
use crate::utils::messages;

/// Usuario (recortado) y contraseña obligatorios; contraseña con mínimo de caracteres
pub fn validate_registration(
    username: &str,
    password: &str,
    min_password_length: usize,
) -> Result<Credentials, ValidationError> {
    let credentials = validate_login(username, password)?;
    if credentials.password.chars().count() < min_password_length {
        return Err(ValidationError::PasswordTooShort { min: min_password_length });
    }
    Ok(credentials)
}

/// Usuario (recortado) y contraseña obligatorios
pub fn validate_login(username: &str, password: &str) -> Result<Credentials, ValidationError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(Credentials::new(username, password))
}

pub fn register_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Network(msg) => messages::connection_error(msg),
        other => messages::register_error(&other.detail()),
    }
}

/// Cualquier respuesta no-2xx se presenta como credenciales inválidas
pub fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Network(msg) => messages::connection_error(msg),
        _ => messages::LOGIN_INVALID.to_string(),
    }
}

pub struct AuthViewModel {
    api_client: ApiClient,
    session_service: SessionService,
    auth: AuthState,
}

impl AuthViewModel {
    pub fn new(auth: AuthState) -> Self {
        Self {
            api_client: ApiClient::new(),
            session_service: SessionService::new(),
            auth,
        }
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.api_client.register(credentials).await
    }

    /// Login + persistencia del token
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let token = self.api_client.login(credentials).await?;

        if let Err(e) = self.session_service.save_token(&token) {
            // La sesión sigue válida en memoria aunque no sobreviva a una recarga
            log::error!("❌ [AUTH] {}", e);
        }
        self.auth.set_token(Some(token));
        log::info!("✅ [AUTH] Login correcto para {}", credentials.username);
        Ok(())
    }

    /// Limpia token en memoria y en localStorage
    pub fn logout(&self) {
        log::info!("👋 [AUTH] Logout");
        self.auth.logout();
        if let Err(e) = self.session_service.clear_token() {
            log::error!("❌ [AUTH] {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_requires_both_fields() {
        assert_eq!(validate_registration("   ", "secret1", 6), Err(ValidationError::MissingFields));
        assert_eq!(validate_registration("ana", "", 6), Err(ValidationError::MissingFields));
    }

    #[test]
    fn registration_enforces_password_length() {
        assert_eq!(
            validate_registration("ana", "12345", 6),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
        let creds = validate_registration("  ana ", "123456", 6).unwrap();
        assert_eq!(creds.username, "ana");
        assert_eq!(creds.password, "123456");
    }

    #[test]
    fn password_length_counts_characters() {
        assert!(validate_registration("ana", "çãõéíú", 6).is_ok());
    }

    #[test]
    fn login_keeps_password_untrimmed() {
        let creds = validate_login(" joao ", " pw ").unwrap();
        assert_eq!(creds.username, "joao");
        assert_eq!(creds.password, " pw ");
        assert_eq!(validate_login("joao", ""), Err(ValidationError::MissingFields));
    }

    #[test]
    fn login_errors_hide_server_details() {
        let http = ApiError::Http { status: 403, body: "bad password".into() };
        assert_eq!(login_error_message(&http), messages::LOGIN_INVALID);
        assert_eq!(login_error_message(&ApiError::Unauthorized), messages::LOGIN_INVALID);
        assert_eq!(
            login_error_message(&ApiError::Network("Failed to fetch".into())),
            "Erro de conexão: Failed to fetch"
        );
    }

    #[test]
    fn register_errors_show_server_body() {
        let http = ApiError::Http { status: 400, body: "Usuário já existe".into() };
        assert_eq!(register_error_message(&http), "Erro ao criar conta: Usuário já existe");
    }
}
