pub mod api;
pub mod chart;

pub use api::{ChartsResponse, LinkRequest, LogoutRequest, SendRequest, StatusResponse};
pub use chart::{partition_ranked, ChartItem, ItemId, Period};
