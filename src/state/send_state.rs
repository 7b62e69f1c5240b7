// ============================================================================
// SEND STATE - Formulario de envío + desconexión
// ============================================================================

use super::redirect::Redirect;
use super::status::StatusMessage;
use crate::errors::AppError;

pub const SCHEDULED_MESSAGE: &str = "Scheduled ✅";
pub const DISCONNECTED_MESSAGE: &str = "Disconnected ✅";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SendState {
    pub query: String,
    pub sending: bool,
    pub logging_out: bool,
    pub logged_out: bool,
    pub status: Option<StatusMessage>,
}

impl SendState {
    pub fn on_input(&mut self, value: &str) {
        self.query = value.to_string();
    }

    pub fn trimmed_query(&self) -> &str {
        self.query.trim()
    }

    pub fn can_submit(&self) -> bool {
        !self.sending && !self.trimmed_query().is_empty()
    }

    /// Marca el formulario ocupado y devuelve la query recortada.
    pub fn begin_send(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.sending = true;
        self.status = None;
        Some(self.trimmed_query().to_string())
    }

    /// Si va bien se limpia el input; si falla se conserva para corregirlo.
    pub fn finish_send(&mut self, result: Result<(), AppError>) {
        self.sending = false;
        match result {
            Ok(()) => {
                self.query.clear();
                self.status = Some(StatusMessage::success(SCHEDULED_MESSAGE));
            }
            Err(e) => self.status = Some(StatusMessage::error(e.to_string())),
        }
    }

    pub fn can_logout(&self, linked: bool) -> bool {
        linked && !self.logging_out && !self.logged_out
    }

    pub fn begin_logout(&mut self, linked: bool) -> bool {
        if !self.can_logout(linked) {
            return false;
        }
        self.logging_out = true;
        self.status = None;
        true
    }

    /// Tras un logout confirmado se vuelve a `/` con retardo; un fallo se queda aquí.
    pub fn finish_logout(&mut self, result: Result<(), AppError>) -> Option<Redirect> {
        self.logging_out = false;
        match result {
            Ok(()) => {
                self.logged_out = true;
                self.status = Some(StatusMessage::success(DISCONNECTED_MESSAGE));
                Some(Redirect::after_logout())
            }
            Err(e) => {
                self.status = Some(StatusMessage::error(e.to_string()));
                None
            }
        }
    }
}
