// ============================================================================
// USE SEND FLOW - Enviar búsqueda/URL al bot + desconexión
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use super::session_context::use_session;
use super::use_mounted::{schedule_redirect, use_mounted};
use crate::state::SendState;
use crate::viewmodels::SessionViewModel;

pub struct UseSendFlowHandle {
    pub state: SendState,
    pub code: Option<String>,
    pub on_input: Callback<String>,
    pub submit: Callback<()>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_send_flow() -> UseSendFlowHandle {
    let session = use_session();
    let navigator = use_navigator();
    let state = use_mut_ref(SendState::default);
    let redirect_slot = use_mut_ref(|| None::<Timeout>);
    let mounted = use_mounted();
    let trigger = use_force_update();
    let vm = SessionViewModel::browser(session.clone());

    let on_input = {
        let state = state.clone();
        let trigger = trigger.clone();
        Callback::from(move |value: String| {
            state.borrow_mut().on_input(&value);
            trigger.force_update();
        })
    };

    let submit = {
        let vm = vm.clone();
        let state = state.clone();
        let trigger = trigger.clone();
        let mounted = mounted.clone();
        Callback::from(move |_| {
            let Some(query) = state.borrow_mut().begin_send() else {
                return;
            };
            trigger.force_update();

            let vm = vm.clone();
            let state = state.clone();
            let trigger = trigger.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = vm.send_query(&query).await;
                mounted.when_mounted(|| {
                    state.borrow_mut().finish_send(result);
                    trigger.force_update();
                });
            });
        })
    };

    let logout = {
        let session = session.clone();
        let state = state.clone();
        let trigger = trigger.clone();
        Callback::from(move |_| {
            if !state.borrow_mut().begin_logout(session.is_linked()) {
                return;
            }
            trigger.force_update();

            let vm = vm.clone();
            let state = state.clone();
            let trigger = trigger.clone();
            let redirect_slot = redirect_slot.clone();
            let mounted = mounted.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = vm.logout().await;
                let redirect = mounted
                    .when_mounted(|| {
                        let redirect = state.borrow_mut().finish_logout(result);
                        trigger.force_update();
                        redirect
                    })
                    .flatten();
                if let Some(redirect) = redirect {
                    schedule_redirect(&redirect_slot, navigator, redirect);
                }
            });
        })
    };

    let snapshot = state.borrow().clone();
    UseSendFlowHandle {
        state: snapshot,
        code: session.code(),
        on_input,
        submit,
        logout,
    }
}
