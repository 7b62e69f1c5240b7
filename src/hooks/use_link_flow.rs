// ============================================================================
// USE LINK FLOW - Formulario de código de 8 dígitos
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use super::session_context::use_session;
use super::use_mounted::{schedule_redirect, use_mounted};
use crate::state::LinkState;
use crate::viewmodels::SessionViewModel;

pub struct UseLinkFlowHandle {
    pub state: LinkState,
    pub on_input: Callback<String>,
    pub submit: Callback<()>,
}

#[hook]
pub fn use_link_flow() -> UseLinkFlowHandle {
    let session = use_session();
    let navigator = use_navigator();
    let state = use_mut_ref(LinkState::default);
    let redirect_slot = use_mut_ref(|| None::<Timeout>);
    let mounted = use_mounted();
    let trigger = use_force_update();

    let on_input = {
        let state = state.clone();
        let trigger = trigger.clone();
        Callback::from(move |raw: String| {
            state.borrow_mut().on_input(&raw);
            trigger.force_update();
        })
    };

    let submit = {
        let state = state.clone();
        let trigger = trigger.clone();
        Callback::from(move |_| {
            let Some(code) = state.borrow_mut().begin_submit() else {
                return;
            };
            trigger.force_update();

            let vm = SessionViewModel::browser(session.clone());
            let state = state.clone();
            let trigger = trigger.clone();
            let redirect_slot = redirect_slot.clone();
            let mounted = mounted.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = vm.link(&code).await;
                let redirect = mounted
                    .when_mounted(|| {
                        let redirect = state.borrow_mut().finish_submit(result);
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
    UseLinkFlowHandle {
        state: snapshot,
        on_input,
        submit,
    }
}
