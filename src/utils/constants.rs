/// Clave de localStorage con el código vinculado (compartida con builds anteriores)
pub const STORAGE_KEY_LINKED_CODE: &str = "linked_code";

/// Longitud del código que entrega el bot de Telegram.
pub const CODE_LENGTH: usize = 8;

pub const LINK_PATH: &str = "/api/link";
pub const CHARTS_PATH: &str = "/api/charts";
pub const SEND_PATH: &str = "/api/send";
pub const LOGOUT_PATH: &str = "/api/logout";

pub const DEFAULT_CHARTS_LIMIT: u32 = 20;
pub const DEFAULT_LINK_REDIRECT_DELAY_MS: u32 = 600;
pub const DEFAULT_LOGOUT_REDIRECT_DELAY_MS: u32 = 800;
pub const DEFAULT_TELEGRAM_BOT_URL: &str = "https://telegram.me/i_am_web_music_bot";

/// Entradas del ranking que se muestran como tarjetas.
pub const TOP_SECTION_LEN: usize = 3;

pub const AUTH_BACKGROUND: &str = "/assets/auth_bg_r.jpg";
pub const AUTH_LOGO: &str = "/assets/auth_logo1.png";
pub const MAIN_BACKGROUND: &str = "/assets/index_bg.png";
pub const NAV_LOGO: &str = "/assets/nav_logo.png";
