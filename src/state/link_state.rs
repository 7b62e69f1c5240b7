// ============================================================================
// LINK STATE - Máquina de estados del formulario de vinculación
// ============================================================================
// Editing -> Submitting -> { LinkedRedirecting | Failed }
// Failed sigue siendo editable; no hay reintento automático.
// ============================================================================

use super::redirect::Redirect;
use super::status::StatusMessage;
use crate::errors::AppError;
use crate::utils::constants::CODE_LENGTH;

pub const LINKED_MESSAGE: &str = "Linked! Redirecting...";
pub const INVALID_CODE_HINT: &str = "Code must be exactly 8 digits.";

/// Deja sólo dígitos ASCII, en orden, hasta [`CODE_LENGTH`].
pub fn sanitize_code(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(CODE_LENGTH)
        .collect()
}

pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.chars().all(|c| c.is_ascii_digit())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkPhase {
    #[default]
    Editing,
    Submitting,
    LinkedRedirecting,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinkState {
    pub code: String,
    pub phase: LinkPhase,
    pub status: Option<StatusMessage>,
}

impl LinkState {
    /// Cada tecla pasa por el saneador. Editar tras un fallo vuelve a `Editing`.
    pub fn on_input(&mut self, raw: &str) {
        if !self.is_editable() {
            return;
        }
        self.code = sanitize_code(raw);
        if self.phase == LinkPhase::Failed {
            self.phase = LinkPhase::Editing;
        }
    }

    pub fn is_valid(&self) -> bool {
        is_valid_code(&self.code)
    }

    /// Aviso bajo el input mientras el código está incompleto.
    pub fn hint(&self) -> Option<&'static str> {
        (!self.code.is_empty() && !self.is_valid()).then_some(INVALID_CODE_HINT)
    }

    /// El input se deshabilita mientras hay un envío o una redirección en curso.
    pub fn is_editable(&self) -> bool {
        matches!(self.phase, LinkPhase::Editing | LinkPhase::Failed)
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == LinkPhase::Submitting
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid() && self.is_editable()
    }

    /// Pasa a `Submitting` y devuelve el código a enviar, o `None` si ahora
    /// no se puede enviar.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.phase = LinkPhase::Submitting;
        self.status = None;
        Some(self.code.clone())
    }

    /// Aplica la respuesta del backend. Sólo un link aceptado pide navegación.
    pub fn finish_submit(&mut self, result: Result<String, AppError>) -> Option<Redirect> {
        match result {
            Ok(_) => {
                self.phase = LinkPhase::LinkedRedirecting;
                self.status = Some(StatusMessage::success(LINKED_MESSAGE));
                Some(Redirect::after_link())
            }
            Err(e) => {
                self.phase = LinkPhase::Failed;
                self.status = Some(StatusMessage::error(e.to_string()));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG;
    use crate::routes::Route;

    const SAMPLES: &[&str] = &[
        "",
        "12345678",
        "1234 5678",
        "12a34b56c78d90",
        "٣٤٥",
        "abc",
        "123456789012",
        "-1.5e10",
        "🎵9🎵8🎵7",
    ];

    #[test]
    fn sanitizer_output_is_short_digits_only_and_ordered() {
        for s in SAMPLES {
            let out = sanitize_code(s);
            assert!(out.len() <= CODE_LENGTH, "{:?}", s);
            assert!(out.chars().all(|c| c.is_ascii_digit()), "{:?}", s);

            let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
            assert!(digits.starts_with(&out), "{:?}", s);
        }
    }

    #[test]
    fn sanitizer_examples() {
        assert_eq!(sanitize_code("1234 5678"), "12345678");
        assert_eq!(sanitize_code("123456789012"), "12345678");
        assert_eq!(sanitize_code("🎵9🎵8🎵7"), "987");
        // Dígitos no ASCII no valen
        assert_eq!(sanitize_code("٣٤٥"), "");
    }

    #[test]
    fn validity_iff_eight_sanitized_digits() {
        for s in SAMPLES {
            let out = sanitize_code(s);
            assert_eq!(is_valid_code(&out), out.len() == 8, "{:?}", s);
        }
        assert!(!is_valid_code("1234567a"));
    }

    #[test]
    fn partial_code_shows_hint_and_blocks_submit() {
        let mut state = LinkState::default();
        assert_eq!(state.hint(), None);

        state.on_input("1234");
        assert_eq!(state.hint(), Some(INVALID_CODE_HINT));
        assert!(!state.can_submit());
        assert_eq!(state.begin_submit(), None);
        assert_eq!(state.phase, LinkPhase::Editing);
    }

    #[test]
    fn success_path() {
        let mut state = LinkState::default();
        state.on_input("12-34-56-78");
        assert_eq!(state.begin_submit().as_deref(), Some("12345678"));
        assert!(state.is_submitting());
        assert!(!state.is_editable());
        // Sin doble envío mientras está en vuelo
        assert_eq!(state.begin_submit(), None);

        let redirect = state.finish_submit(Ok("12345678".into()));
        assert_eq!(redirect.map(|r| r.to), Some(Route::Send));
        assert_eq!(state.phase, LinkPhase::LinkedRedirecting);
        assert_eq!(state.status, Some(StatusMessage::success(LINKED_MESSAGE)));

        // El input queda congelado durante la redirección
        state.on_input("0");
        assert_eq!(state.code, "12345678");
    }

    #[test]
    fn failure_returns_to_editable() {
        let mut state = LinkState::default();
        state.on_input("87654321");
        state.begin_submit();
        let redirect = state.finish_submit(Err(AppError::Rejected("bad code".into())));
        assert_eq!(redirect, None);

        assert_eq!(state.phase, LinkPhase::Failed);
        assert_eq!(state.status.as_ref().map(|s| s.text()), Some("bad code"));
        assert!(state.can_submit());
        assert!(state.is_editable());

        state.on_input("8765432");
        assert_eq!(state.phase, LinkPhase::Editing);
    }

    #[test]
    fn link_redirect_uses_configured_delay() {
        let mut state = LinkState::default();
        state.on_input("12345678");
        state.begin_submit();
        let redirect = state.finish_submit(Ok("12345678".into()));
        assert_eq!(
            redirect,
            Some(Redirect {
                to: Route::Send,
                delay_ms: CONFIG.link_redirect_delay_ms,
            })
        );
    }
}
