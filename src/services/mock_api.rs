//! Doble en memoria de [`MusicApi`] para los tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use futures::channel::oneshot;

use super::api_client::MusicApi;
use crate::errors::{AppError, AppResult};
use crate::models::{ChartItem, Period};

#[derive(Default)]
pub struct MockApi {
    pub link_result: RefCell<Option<AppResult<String>>>,
    pub charts_results: RefCell<HashMap<Period, AppResult<Vec<ChartItem>>>>,
    pub send_result: RefCell<Option<AppResult<()>>>,
    pub logout_result: RefCell<Option<AppResult<()>>>,
    /// Si está puesto, el siguiente `send` espera a que dispare el sender.
    pub send_gate: RefCell<Option<oneshot::Receiver<()>>>,

    pub link_calls: RefCell<Vec<String>>,
    pub charts_calls: RefCell<Vec<(Period, u32)>>,
    pub send_calls: RefCell<Vec<(String, String)>>,
    pub logout_calls: Cell<usize>,
}

impl MockApi {
    pub fn linking(code: &str) -> Self {
        let api = Self::default();
        *api.link_result.borrow_mut() = Some(Ok(code.to_string()));
        api
    }

    pub fn rejecting_link(message: &str) -> Self {
        let api = Self::default();
        *api.link_result.borrow_mut() = Some(Err(AppError::Rejected(message.to_string())));
        api
    }

    pub fn with_charts(self, period: Period, result: AppResult<Vec<ChartItem>>) -> Self {
        self.charts_results.borrow_mut().insert(period, result);
        self
    }

    pub fn with_send(self, result: AppResult<()>) -> Self {
        *self.send_result.borrow_mut() = Some(result);
        self
    }

    pub fn with_logout(self, result: AppResult<()>) -> Self {
        *self.logout_result.borrow_mut() = Some(result);
        self
    }

    /// Retiene el siguiente send hasta que dispare el sender devuelto.
    pub fn gate_send(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.send_gate.borrow_mut() = Some(rx);
        tx
    }
}

fn unscripted<T>(operation: &str) -> AppResult<T> {
    Err(AppError::Network(format!("{} not scripted", operation)))
}

impl MusicApi for MockApi {
    async fn link(&self, code: &str) -> AppResult<String> {
        self.link_calls.borrow_mut().push(code.to_string());
        self.link_result
            .borrow()
            .clone()
            .unwrap_or_else(|| unscripted("link"))
    }

    async fn charts(&self, period: Period, limit: u32) -> AppResult<Vec<ChartItem>> {
        self.charts_calls.borrow_mut().push((period, limit));
        self.charts_results
            .borrow()
            .get(&period)
            .cloned()
            .unwrap_or_else(|| unscripted("charts"))
    }

    async fn send(&self, query: &str, code: &str) -> AppResult<()> {
        self.send_calls
            .borrow_mut()
            .push((query.to_string(), code.to_string()));
        let gate = self.send_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.send_result
            .borrow()
            .clone()
            .unwrap_or_else(|| unscripted("send"))
    }

    async fn logout(&self, _code: &str) -> AppResult<()> {
        self.logout_calls.set(self.logout_calls.get() + 1);
        self.logout_result
            .borrow()
            .clone()
            .unwrap_or_else(|| unscripted("logout"))
    }
}
