// ============================================================================
// ERRORS - Un solo tipo de error para toda la app
// ============================================================================
// `Display` devuelve exactamente el mensaje que ve el usuario
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// El backend respondió con campo `error`; se muestra tal cual.
    #[error("{0}")]
    Rejected(String),

    /// Respuesta fallida sin campo `error`. Lleva el texto por defecto.
    #[error("{0}")]
    Unexpected(String),

    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Decode(String),

    #[error("{0}")]
    Storage(String),
}

impl AppError {
    /// Mensaje del backend si lo hay; si no, el texto por defecto del endpoint.
    pub fn from_response(error: Option<String>, fallback: &str) -> Self {
        match error {
            Some(message) if !message.is_empty() => AppError::Rejected(message),
            _ => AppError::Unexpected(fallback.to_string()),
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, AppError::Rejected(_) | AppError::Unexpected(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
