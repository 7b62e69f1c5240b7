use yew::prelude::*;

use crate::config::CONFIG;

const TELEGRAM_ICON: &str = "M120 0C53.7 0 0 53.7 0 120s53.7 120 120 120 120-53.7 120-120S186.3 0 120 0Zm58 83.5-17.6 83.2c-1.3 5.8-4.8 7.2-9.7 4.5l-27-19.9-13 12.5c-1.4 1.4-2.5 2.5-5.1 2.5l1.8-28.3 51.5-46.5c2.2-1.9-.5-3-3.4-1.1l-63.6 40.1-27.4-8.6c-6-1.9-6.1-6-1.3-8.9l107.2-49.2c4.9-2.2 9.2 1.1 7.6 8.9Z";

#[function_component(TelegramButton)]
pub fn telegram_button() -> Html {
    html! {
        <a
            href={CONFIG.telegram_bot_url.clone()}
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Open Telegram bot"
            class="floating-telegram-btn"
        >
            <svg viewBox="0 0 240 240" class="icon" fill="currentColor" aria-hidden="true">
                <path d={TELEGRAM_ICON} />
            </svg>
            <span class="label">{"Telegram Bot"}</span>
        </a>
    }
}
