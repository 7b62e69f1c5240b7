pub mod api_client;
#[cfg(test)]
pub mod mock_api;

pub use api_client::{ApiClient, MusicApi};
