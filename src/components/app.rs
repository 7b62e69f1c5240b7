use yew::prelude::*;
use yew_router::prelude::*;

use super::telegram_button::TelegramButton;
use crate::hooks::SessionContextProvider;
use crate::routes::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionContextProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
                <TelegramButton />
            </BrowserRouter>
        </SessionContextProvider>
    }
}
