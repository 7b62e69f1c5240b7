// ============================================================================
// SESSION VIEWMODEL - LÓGICA DE LOS FLUJOS (link, charts, send, logout)
// ============================================================================
// Devuelve valores; los hooks actualizan el estado y re-renderizan.
// No toca el DOM ni navega.
// ============================================================================

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::errors::{AppError, AppResult};
use crate::models::ChartItem;
use crate::services::{ApiClient, MusicApi};
use crate::state::{ChartsState, FetchTicket};
use crate::stores::SessionHandle;

pub const NOT_LINKED_MESSAGE: &str = "No linked session";
pub const TRACK_SEND_FALLBACK: &str = "Failed to schedule download";

#[derive(Clone)]
pub struct SessionViewModel<A: MusicApi = ApiClient> {
    api: A,
    session: SessionHandle,
    charts_limit: u32,
}

impl SessionViewModel<ApiClient> {
    pub fn browser(session: SessionHandle) -> Self {
        Self::new(ApiClient::new(), session)
    }
}

impl<A: MusicApi> SessionViewModel<A> {
    pub fn new(api: A, session: SessionHandle) -> Self {
        Self {
            api,
            session,
            charts_limit: CONFIG.charts_limit,
        }
    }

    fn require_code(&self) -> AppResult<String> {
        self.session
            .code()
            .ok_or_else(|| AppError::Unexpected(NOT_LINKED_MESSAGE.to_string()))
    }

    /// Vincula la sesión. Sólo se persiste un código aceptado, y es el que
    /// devolvió el backend.
    pub async fn link(&self, code: &str) -> AppResult<String> {
        let linked = self.api.link(code).await?;
        self.session.set(&linked)?;
        log::info!("✅ Sesión vinculada");
        Ok(linked)
    }

    /// Lanza el fetch de `ticket` y lo aplica si sigue vigente.
    /// Devuelve si el estado cambió.
    pub async fn load_charts(&self, state: &RefCell<ChartsState>, ticket: FetchTicket) -> bool {
        let result = self.api.charts(ticket.period, self.charts_limit).await;
        state.borrow_mut().apply_fetch(ticket, result)
    }

    pub async fn send_query(&self, query: &str) -> AppResult<()> {
        let code = self.require_code()?;
        self.api.send(query, &code).await
    }

    /// Logout confirmado: la sesión local sólo se borra cuando el backend
    /// lo acepta.
    pub async fn logout(&self) -> AppResult<()> {
        let code = self.require_code()?;
        self.api.logout(&code).await?;
        self.session.clear()?;
        log::info!("👋 Sesión cerrada");
        Ok(())
    }
}

impl<A: MusicApi + Clone + 'static> SessionViewModel<A> {
    /// Toma el único slot de envío en el acto y devuelve el future de la
    /// petición, o `None` si ya hay otro envío pendiente (sin petición).
    /// El slot se libera acabe como acabe.
    pub fn send_track(
        &self,
        state: &Rc<RefCell<ChartsState>>,
        item: &ChartItem,
    ) -> Option<impl Future<Output = AppResult<()>> + 'static> {
        let ticket = state.borrow_mut().begin_send(item)?;
        let vm = self.clone();
        let state = Rc::clone(state);
        Some(async move {
            let result = vm.send_query(&ticket.query).await.map_err(|e| match e {
                AppError::Unexpected(_) => AppError::Unexpected(TRACK_SEND_FALLBACK.to_string()),
                other => other,
            });
            state.borrow_mut().finish_send(&ticket);
            result
        })
    }
}
