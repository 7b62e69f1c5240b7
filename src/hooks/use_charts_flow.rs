// ============================================================================
// USE CHARTS FLOW - Top downloads por periodo
// ============================================================================
// Fetch al montar y en cada cambio de periodo. Las respuestas obsoletas se
// descartan por generación (ver ChartsState).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use super::session_context::use_session;
use super::use_mounted::use_mounted;
use crate::models::{ChartItem, Period};
use crate::state::{ChartsState, FetchTicket};
use crate::utils::dialog::alert;
use crate::viewmodels::SessionViewModel;

pub struct UseChartsFlowHandle {
    pub state: ChartsState,
    pub select_period: Callback<Period>,
    pub send_track: Callback<ChartItem>,
}

fn spawn_fetch(
    vm: SessionViewModel,
    state: Rc<RefCell<ChartsState>>,
    ticket: FetchTicket,
    trigger: UseForceUpdateHandle,
) {
    wasm_bindgen_futures::spawn_local(async move {
        if vm.load_charts(&state, ticket).await {
            trigger.force_update();
        }
    });
}

#[hook]
pub fn use_charts_flow() -> UseChartsFlowHandle {
    let session = use_session();
    let state = use_mut_ref(ChartsState::default);
    let mounted = use_mounted();
    let trigger = use_force_update();
    let vm = SessionViewModel::browser(session);

    // Fetch inicial; al desmontar se invalida lo que siga en vuelo
    {
        let vm = vm.clone();
        let state = state.clone();
        let trigger = trigger.clone();
        use_effect_with((), move |_| {
            let ticket = state.borrow_mut().begin_fetch();
            spawn_fetch(vm, state.clone(), ticket, trigger);
            move || state.borrow_mut().invalidate()
        });
    }

    let select_period = {
        let vm = vm.clone();
        let state = state.clone();
        let trigger = trigger.clone();
        Callback::from(move |period: Period| {
            let Some(ticket) = state.borrow_mut().select_period(period) else {
                return;
            };
            log::info!("📅 Periodo seleccionado: {}", period);
            trigger.force_update();
            spawn_fetch(vm.clone(), state.clone(), ticket, trigger.clone());
        })
    };

    let send_track = {
        let state = state.clone();
        let trigger = trigger.clone();
        Callback::from(move |item: ChartItem| {
            let Some(request) = vm.send_track(&state, &item) else {
                log::debug!("⏳ Envío en curso, ignorando click");
                return;
            };
            trigger.force_update();

            let trigger = trigger.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = request.await {
                    alert(&e.to_string());
                }
                if mounted.get() {
                    trigger.force_update();
                }
            });
        })
    };

    let snapshot = state.borrow().clone();
    UseChartsFlowHandle {
        state: snapshot,
        select_period,
        send_track,
    }
}
