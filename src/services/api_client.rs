// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP y traduce respuestas
// ============================================================================

use std::rc::Rc;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::errors::{AppError, AppResult};
use crate::models::api::{STATUS_LINKED, STATUS_LOGGED_OUT, STATUS_SCHEDULED};
use crate::models::{
    ChartItem, ChartsResponse, LinkRequest, LogoutRequest, Period, SendRequest, StatusResponse,
};
use crate::utils::constants::{CHARTS_PATH, LINK_PATH, LOGOUT_PATH, SEND_PATH};

pub const LINK_FALLBACK: &str = "Link failed";
pub const CHARTS_FALLBACK: &str = "Failed to load charts";
pub const SEND_FALLBACK: &str = "Send failed";
pub const LOGOUT_FALLBACK: &str = "Logout failed";

/// Las cuatro operaciones del backend. [`ApiClient`] las implementa sobre
/// HTTP; los tests usan un doble en memoria.
#[allow(async_fn_in_trait)]
pub trait MusicApi {
    /// Devuelve el código aceptado por el backend, que es el que manda.
    async fn link(&self, code: &str) -> AppResult<String>;
    async fn charts(&self, period: Period, limit: u32) -> AppResult<Vec<ChartItem>>;
    async fn send(&self, query: &str, code: &str) -> AppResult<()>;
    async fn logout(&self, code: &str) -> AppResult<()>;
}

impl<T: MusicApi> MusicApi for Rc<T> {
    async fn link(&self, code: &str) -> AppResult<String> {
        (**self).link(code).await
    }

    async fn charts(&self, period: Period, limit: u32) -> AppResult<Vec<ChartItem>> {
        (**self).charts(period, limit).await
    }

    async fn send(&self, query: &str, code: &str) -> AppResult<()> {
        (**self).send(query, code).await
    }

    async fn logout(&self, code: &str) -> AppResult<()> {
        (**self).logout(code).await
    }
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.backend_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<B: serde::Serialize>(&self, path: &str, body: &B) -> AppResult<Response> {
        Request::post(&self.url(path))
            .json(body)
            .map_err(|e| AppError::Decode(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Network error: {}", e)))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Decode(format!("Parse error: {}", e)))
}

impl MusicApi for ApiClient {
    async fn link(&self, code: &str) -> AppResult<String> {
        log::info!("🔗 Vinculando sesión...");
        let request = LinkRequest {
            code: code.to_string(),
        };
        let response = self.post(LINK_PATH, &request).await?;
        let ok = response.ok();
        let body = read_json::<StatusResponse>(response).await;
        let result = interpret_link(ok, body, code);
        log_outcome("link", &result);
        result
    }

    async fn charts(&self, period: Period, limit: u32) -> AppResult<Vec<ChartItem>> {
        log::info!("📊 Cargando charts (period={}, limit={})", period, limit);
        let limit = limit.to_string();
        let response = Request::get(&self.url(CHARTS_PATH))
            .query([("period", period.as_str()), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Network error: {}", e)))?;
        let ok = response.ok();
        let body = read_json::<ChartsResponse>(response).await;
        let result = interpret_charts(ok, body);
        match &result {
            Ok(items) => log::info!("✅ Charts {}: {} items", period, items.len()),
            Err(e) => log::warn!("⚠️ Charts {} failed: {}", period, e),
        }
        result
    }

    async fn send(&self, query: &str, code: &str) -> AppResult<()> {
        log::info!("📤 Enviando query al bot...");
        let request = SendRequest {
            query: query.to_string(),
            code: code.to_string(),
        };
        let response = self.post(SEND_PATH, &request).await?;
        let ok = response.ok();
        let body = response.json::<StatusResponse>().await.ok();
        let result = interpret_status(ok, body, STATUS_SCHEDULED, SEND_FALLBACK);
        log_outcome("send", &result);
        result
    }

    async fn logout(&self, code: &str) -> AppResult<()> {
        log::info!("👋 Cerrando sesión remota...");
        let request = LogoutRequest {
            code: code.to_string(),
        };
        let response = self.post(LOGOUT_PATH, &request).await?;
        let ok = response.ok();
        let body = response.json::<StatusResponse>().await.ok();
        let result = interpret_status(ok, body, STATUS_LOGGED_OUT, LOGOUT_FALLBACK);
        log_outcome("logout", &result);
        result
    }
}

fn log_outcome<T>(operation: &str, result: &AppResult<T>) {
    match result {
        Ok(_) => log::info!("✅ {} ok", operation),
        Err(e) if e.is_rejection() => log::warn!("⚠️ {} rejected: {}", operation, e),
        Err(e) => log::error!("❌ {} error: {}", operation, e),
    }
}

/// `/api/link`: HTTP ok y `status == "linked"`. Si el backend no devuelve
/// código, se usa el enviado.
pub fn interpret_link(
    ok: bool,
    body: AppResult<StatusResponse>,
    submitted: &str,
) -> AppResult<String> {
    let body = body?;
    if ok && body.has_status(STATUS_LINKED) {
        let code = body
            .code
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| submitted.to_string());
        Ok(code)
    } else {
        Err(AppError::from_response(body.error, LINK_FALLBACK))
    }
}

pub fn interpret_charts(ok: bool, body: AppResult<ChartsResponse>) -> AppResult<Vec<ChartItem>> {
    let body = body?;
    match body.items {
        Some(items) if ok => Ok(items),
        _ => Err(AppError::from_response(body.error, CHARTS_FALLBACK)),
    }
}

/// `/api/send` y `/api/logout`. Un body ilegible cuenta como vacío.
pub fn interpret_status(
    ok: bool,
    body: Option<StatusResponse>,
    expected: &str,
    fallback: &str,
) -> AppResult<()> {
    let body = body.unwrap_or_default();
    if ok && body.has_status(expected) {
        Ok(())
    } else {
        Err(AppError::from_response(body.error, fallback))
    }
}
