use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub enable_logging: bool,
    pub min_password_length: usize,
    pub ui_config: UIConfig,
}

/// Tiempos de la interfaz (milisegundos)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    pub success_message_ms: u32,
    pub register_redirect_ms: u32,
    pub login_redirect_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            enable_logging: true,
            min_password_length: 6,
            ui_config: UIConfig::default(),
        }
    }
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            success_message_ms: 5000,
            register_redirect_ms: 2000,
            login_redirect_ms: 1500,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(normalize_base_url)
                .unwrap_or(defaults.api_base_url),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            min_password_length: option_env!("MIN_PASSWORD_LENGTH")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_password_length),
            ui_config: UIConfig {
                success_message_ms: option_env!("SUCCESS_MESSAGE_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.ui_config.success_message_ms),
                register_redirect_ms: option_env!("REGISTER_REDIRECT_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.ui_config.register_redirect_ms),
                login_redirect_ms: option_env!("LOGIN_REDIRECT_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.ui_config.login_redirect_ms),
            },
        }
    }

    /// URL base de la API (sin barra final)
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
