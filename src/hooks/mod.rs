pub mod session_context;
pub mod use_charts_flow;
pub mod use_link_flow;
pub mod use_logout;
pub mod use_mounted;
pub mod use_send_flow;

pub use session_context::{use_session, SessionContextProvider};
pub use use_charts_flow::{use_charts_flow, UseChartsFlowHandle};
pub use use_link_flow::{use_link_flow, UseLinkFlowHandle};
pub use use_logout::use_logout;
pub use use_mounted::{schedule_redirect, use_mounted, Mounted};
pub use use_send_flow::{use_send_flow, UseSendFlowHandle};
