use web_sys::{window, Storage};
use crate::error::StorageError;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Guardar un string tal cual (sin serializar)
pub fn save_string(key: &str, value: &str) -> Result<(), StorageError> {
    let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
    storage.set_item(key, value)
        .map_err(|_| StorageError::Write)
}

pub fn load_string(key: &str) -> Option<String> {
    let storage = get_local_storage()?;
    storage.get_item(key).ok()?
}

pub fn remove_from_storage(key: &str) -> Result<(), StorageError> {
    let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
    storage.remove_item(key)
        .map_err(|_| StorageError::Remove)
}
