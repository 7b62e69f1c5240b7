use crate::config::CONFIG;
use crate::routes::Route;

/// Navegación diferida que una máquina de estados pide tras un resultado.
/// El hook la programa con un `Timeout`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: Route,
    pub delay_ms: u32,
}

impl Redirect {
    /// Tras vincular: al flujo autenticado.
    pub fn after_link() -> Self {
        Self {
            to: Route::Send,
            delay_ms: CONFIG.link_redirect_delay_ms,
        }
    }

    /// Tras desconectar: vuelta a la página de vinculación.
    pub fn after_logout() -> Self {
        Self {
            to: Route::Link,
            delay_ms: CONFIG.logout_redirect_delay_ms,
        }
    }
}
