use web_sys::window;

/// `alert` bloqueante del navegador; sin window no hace nada.
pub fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}
