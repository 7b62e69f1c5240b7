use yew::prelude::*;
use yew_router::prelude::*;

use super::session_context::use_session;
use crate::routes::Route;
use crate::utils::dialog::alert;
use crate::viewmodels::SessionViewModel;

/// Logout del header. Misma política confirmada que la página de envío: la
/// sesión sólo se borra cuando el backend lo confirma; luego a `/`.
#[hook]
pub fn use_logout() -> Callback<()> {
    let session = use_session();
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let in_flight = use_mut_ref(|| false);

    Callback::from(move |_| {
        if !session.is_linked() || *in_flight.borrow() {
            return;
        }
        *in_flight.borrow_mut() = true;

        let vm = SessionViewModel::browser(session.clone());
        let navigator = navigator.clone();
        let at_home = route == Some(Route::Link);
        let in_flight = in_flight.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = vm.logout().await;
            *in_flight.borrow_mut() = false;
            match result {
                Ok(()) => {
                    if let Some(navigator) = navigator.filter(|_| !at_home) {
                        navigator.push(&Route::Link);
                    }
                }
                Err(e) => alert(&e.to_string()),
            }
        });
    })
}
