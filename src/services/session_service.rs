use crate::error::StorageError;
use crate::utils::{load_string, remove_from_storage, save_string, TOKEN_STORAGE_KEY};

/// Persistencia del token JWT en localStorage
///
/// El token nunca se muestra ni se escribe en los logs.
pub struct SessionService;

impl SessionService {
    pub fn new() -> Self {
        Self
    }

    pub fn load_token(&self) -> Option<String> {
        load_string(TOKEN_STORAGE_KEY).filter(|t| !t.trim().is_empty())
    }

    pub fn save_token(&self, token: &str) -> Result<(), StorageError> {
        save_string(TOKEN_STORAGE_KEY, token)?;
        log::info!("💾 [SESSION] Token guardado");
        Ok(())
    }

    pub fn clear_token(&self) -> Result<(), StorageError> {
        remove_from_storage(TOKEN_STORAGE_KEY)?;
        log::info!("🗑️ [SESSION] Token eliminado");
        Ok(())
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}
