use serde::{Deserialize, Serialize};

use super::chart::ChartItem;

pub const STATUS_LINKED: &str = "linked";
pub const STATUS_SCHEDULED: &str = "scheduled";
pub const STATUS_LOGGED_OUT: &str = "logged_out";

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LinkRequest {
    pub code: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SendRequest {
    pub query: String,
    pub code: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LogoutRequest {
    pub code: String,
}

/// Respuesta común de `/api/link`, `/api/send` y `/api/logout`
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: Option<String>,
    /// Sólo `/api/link` devuelve el código (el que manda).
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl StatusResponse {
    pub fn has_status(&self, expected: &str) -> bool {
        self.status.as_deref() == Some(expected)
    }
}

#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
pub struct ChartsResponse {
    #[serde(default)]
    pub items: Option<Vec<ChartItem>>,
    #[serde(default)]
    pub error: Option<String>,
}
