/// Mensaje de estado bajo un formulario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Success(String),
    Error(String),
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        StatusMessage::Success(text.into())
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage::Error(text.into())
    }

    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Success(text) | StatusMessage::Error(text) => text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, StatusMessage::Success(_))
    }
}
