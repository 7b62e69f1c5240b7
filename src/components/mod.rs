pub mod app;
pub mod charts_page;
pub mod guards;
pub mod layouts;
pub mod link_page;
pub mod send_page;
pub mod telegram_button;

pub use app::App;
pub use charts_page::ChartsPage;
pub use guards::{RedirectIfLinked, RequireSession};
pub use layouts::{AuthLayout, MainLayout};
pub use link_page::LinkPage;
pub use send_page::SendPage;
pub use telegram_button::TelegramButton;
