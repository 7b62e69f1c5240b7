pub mod charts_state;
pub mod link_state;
pub mod redirect;
pub mod send_state;
pub mod status;

pub use charts_state::{ChartsState, ChartsView, FetchTicket, SendTicket};
pub use link_state::{is_valid_code, sanitize_code, LinkPhase, LinkState};
pub use redirect::Redirect;
pub use send_state::SendState;
pub use status::StatusMessage;
