// ============================================================================
// WEBMUSIC CLIENT - FRONTEND YEW (RUST PURO)
// ============================================================================
// Arquitectura:
// - Components: Funciones que renderizan (sin lógica)
// - Hooks: Glue entre componentes y estado
// - ViewModels: Flujos async (link, charts, send, logout)
// - State: Máquinas de estado puras, testeables sin navegador
// - Services: SOLO comunicación API
// - Stores: Código de vinculación persistido
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod components;
pub mod config;
pub mod errors;
pub mod hooks;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;

use crate::components::App;
use crate::config::CONFIG;

/// Punto de entrada del binario: panic hook, logging y montaje de la app.
pub fn start() {
    console_error_panic_hook::set_once();

    if CONFIG.enable_logging {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.level()));
    }
    log::info!(
        "🚀 WebMusic client starting ({}, backend: {})",
        CONFIG.environment,
        if CONFIG.backend_url.is_empty() { "same origin" } else { CONFIG.backend_url.as_str() }
    );

    yew::Renderer::<App>::new().render();
}
