use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::state::Redirect;

/// `true` entre el montaje y el desmontaje del componente.
#[derive(Clone, Default)]
pub struct Mounted(Rc<Cell<bool>>);

impl Mounted {
    pub fn set(&self, mounted: bool) {
        self.0.set(mounted);
    }

    pub fn get(&self) -> bool {
        self.0.get()
    }

    /// Ejecuta `f` sólo si el componente sigue montado.
    pub fn when_mounted<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        self.get().then(f)
    }
}

#[hook]
pub fn use_mounted() -> Mounted {
    let mounted = use_memo((), |_| Mounted::default());
    {
        let mounted = (*mounted).clone();
        use_effect_with((), move |_| {
            mounted.set(true);
            move || mounted.set(false)
        });
    }
    (*mounted).clone()
}

/// Programa la navegación pedida por la máquina de estados. El `Timeout` se
/// guarda en el slot del hook: si el componente se desmonta, se cancela.
pub fn schedule_redirect(
    slot: &Rc<RefCell<Option<Timeout>>>,
    navigator: Option<Navigator>,
    redirect: Redirect,
) {
    let Some(navigator) = navigator else {
        return;
    };
    let Redirect { to, delay_ms } = redirect;
    *slot.borrow_mut() = Some(Timeout::new(delay_ms, move || navigator.push(&to)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::routes::Route;
    use crate::state::{LinkPhase, LinkState, SendState};

    #[test]
    fn link_result_after_teardown_is_dropped() {
        let mounted = Mounted::default();
        mounted.set(true);

        let mut state = LinkState::default();
        state.on_input("12345678");
        state.begin_submit();

        mounted.set(false);
        let redirect = mounted
            .when_mounted(|| state.finish_submit(Ok("12345678".into())))
            .flatten();

        assert_eq!(redirect, None);
        assert_eq!(state.phase, LinkPhase::Submitting);
        assert_eq!(state.status, None);
    }

    #[test]
    fn link_result_while_mounted_requests_send_page() {
        let mounted = Mounted::default();
        mounted.set(true);

        let mut state = LinkState::default();
        state.on_input("12345678");
        state.begin_submit();

        let redirect = mounted
            .when_mounted(|| state.finish_submit(Ok("12345678".into())))
            .flatten();
        assert_eq!(redirect.map(|r| r.to), Some(Route::Send));
    }

    #[test]
    fn logout_result_after_teardown_is_dropped() {
        let mounted = Mounted::default();
        mounted.set(true);

        let mut state = SendState::default();
        state.begin_logout(true);

        mounted.set(false);
        let redirect = mounted.when_mounted(|| state.finish_logout(Ok(()))).flatten();

        assert_eq!(redirect, None);
        assert!(state.logging_out);
        assert!(!state.logged_out);
    }

    #[test]
    fn failed_logout_while_mounted_stays_put() {
        let mounted = Mounted::default();
        mounted.set(true);

        let mut state = SendState::default();
        state.begin_logout(true);
        let redirect = mounted
            .when_mounted(|| state.finish_logout(Err(AppError::Network("offline".into()))))
            .flatten();

        assert_eq!(redirect, None);
        assert!(state.can_logout(true));
    }
}
