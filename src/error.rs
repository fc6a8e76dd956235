// ============================================================================
// ERRORES - Errores tipados de la capa de storage
// ============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("sessionStorage no disponible")]
    Unavailable,

    #[error("error leyendo la clave '{key}'")]
    Read { key: String },

    #[error("error guardando la clave '{key}'")]
    Write { key: String },

    #[error("error eliminando la clave '{key}'")]
    Remove { key: String },

    #[error("error serializando datos: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("error deserializando datos: {0}")]
    Deserialize(#[source] serde_json::Error),
}

impl StorageError {
    /// Los datos existen pero no tienen la forma esperada
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StorageError::Deserialize(_))
    }
}

/// Motivo por el que un envío de pedido no arranca
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please add at least one SKU with a valid amount.")]
    NothingToSubmit,

    #[error("order submission already in progress")]
    AlreadySubmitting,
}
