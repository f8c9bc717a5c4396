// ============================================================================
// ERRORES - Tipos de error del cliente
// ============================================================================
// Los mensajes de ValidationError son los que ve el usuario final.
// ============================================================================

use thiserror::Error;

/// Errores de comunicación con el backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),
    #[error("Token expirado ou inválido")]
    Unauthorized,
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Resposta inválida do servidor: {0}")]
    Parse(String),
    #[error("Erro serializando requisição: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Texto a mostrar tras "Erro ao ...: "
    pub fn detail(&self) -> String {
        match self {
            ApiError::Http { body, status } if body.trim().is_empty() => format!("HTTP {}", status),
            ApiError::Http { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}

/// Errores de validación de formularios
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, preencha todos os campos.")]
    MissingFields,
    #[error("Por favor, preencha todos os campos obrigatórios.")]
    MissingRequiredFields,
    #[error("A senha deve ter pelo menos {min} caracteres.")]
    PasswordTooShort { min: usize },
    #[error("As dimensões devem ser maiores que zero.")]
    DimensionsNotPositive,
}

/// Errores de localStorage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Não foi possível acessar o localStorage")]
    Unavailable,
    #[error("Erro gravando no localStorage")]
    Write,
    #[error("Erro removendo do localStorage")]
    Remove,
}
