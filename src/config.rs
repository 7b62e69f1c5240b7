use crate::utils::constants::{
    DEFAULT_CHARTS_LIMIT, DEFAULT_LINK_REDIRECT_DELAY_MS, DEFAULT_LOGOUT_REDIRECT_DELAY_MS,
    DEFAULT_TELEGRAM_BOT_URL,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefijo de cada llamada `/api/...`. Vacío = mismo origen.
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub charts_limit: u32,
    pub link_redirect_delay_ms: u32,
    pub logout_redirect_delay_ms: u32,
    pub telegram_bot_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            charts_limit: DEFAULT_CHARTS_LIMIT,
            link_redirect_delay_ms: DEFAULT_LINK_REDIRECT_DELAY_MS,
            logout_redirect_delay_ms: DEFAULT_LOGOUT_REDIRECT_DELAY_MS,
            telegram_bot_url: DEFAULT_TELEGRAM_BOT_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "BACKEND_URL" => option_env!("BACKEND_URL"),
            "ENVIRONMENT" => option_env!("ENVIRONMENT"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "LOG_LEVEL" => option_env!("LOG_LEVEL"),
            "CHARTS_LIMIT" => option_env!("CHARTS_LIMIT"),
            "LINK_REDIRECT_DELAY_MS" => option_env!("LINK_REDIRECT_DELAY_MS"),
            "LOGOUT_REDIRECT_DELAY_MS" => option_env!("LOGOUT_REDIRECT_DELAY_MS"),
            "TELEGRAM_BOT_URL" => option_env!("TELEGRAM_BOT_URL"),
            _ => None,
        })
    }

    /// Construye la config desde cualquier lookup; valores inválidos usan el default.
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: lookup("BACKEND_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            environment: lookup("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: lookup("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: lookup("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            charts_limit: lookup("CHARTS_LIMIT")
                .and_then(|v| v.parse().ok())
                .filter(|limit| *limit > 0)
                .unwrap_or(defaults.charts_limit),
            link_redirect_delay_ms: lookup("LINK_REDIRECT_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.link_redirect_delay_ms),
            logout_redirect_delay_ms: lookup("LOGOUT_REDIRECT_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.logout_redirect_delay_ms),
            telegram_bot_url: lookup("TELEGRAM_BOT_URL")
                .map(str::to_string)
                .unwrap_or(defaults.telegram_bot_url),
        }
    }

    /// URL completa para un path de API como `/api/link`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }

    /// Nivel de log configurado (por defecto `info`)
    pub fn level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&'static str, &'static str)]) -> AppConfig {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        AppConfig::from_lookup(|key| map.get(key).copied())
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.charts_limit, 20);
        assert_eq!(config.endpoint("/api/link"), "/api/link");
    }

    #[test]
    fn backend_url_is_prefixed_without_double_slash() {
        let config = config_from(&[("BACKEND_URL", "https://music.example.org/")]);
        assert_eq!(
            config.endpoint("/api/charts"),
            "https://music.example.org/api/charts"
        );
    }

    #[test]
    fn garbage_values_fall_back() {
        let config = config_from(&[
            ("ENABLE_LOGGING", "maybe"),
            ("CHARTS_LIMIT", "0"),
            ("LINK_REDIRECT_DELAY_MS", "soon"),
        ]);
        assert!(config.enable_logging);
        assert_eq!(config.charts_limit, 20);
        assert_eq!(config.link_redirect_delay_ms, 600);
    }

    #[test]
    fn log_level_parsing() {
        let config = config_from(&[("LOG_LEVEL", "WARN"), ("ENVIRONMENT", "production")]);
        assert_eq!(config.level(), log::Level::Warn);
        assert_eq!(config.environment, "production");
    }
}
