// ============================================================================
// GUARDS - Redirecciones de autorización centralizadas
// ============================================================================
// Se evalúan al montar. Cada ruta protegida lleva su propia key, así que
// cambiar de ruta monta un guard nuevo que relee la sesión. Dentro de una
// misma ruta la página (p.ej. "Disconnected ✅") decide cuándo navegar.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session;
use crate::routes::{Gate, Route};

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub children: Children,
}

#[hook]
fn use_gate(gate: Gate) -> Option<Route> {
    let session = use_session();
    let redirect = use_state(|| gate.redirect_for(session.is_linked()));
    (*redirect).clone()
}

/// Renderiza los hijos sólo si había código de sesión al montar; si no, `/`.
#[function_component(RequireSession)]
pub fn require_session(props: &GuardProps) -> Html {
    match use_gate(Gate::RequireSession) {
        Some(to) => {
            log::info!("🔒 Sin sesión vinculada, redirigiendo a /");
            html! { <Redirect<Route> {to} /> }
        }
        None => html! { <>{props.children.clone()}</> },
    }
}

/// Guard de la página de entrada: un navegador ya vinculado va directo a
/// `/send` sin lanzar ningún link.
#[function_component(RedirectIfLinked)]
pub fn redirect_if_linked(props: &GuardProps) -> Html {
    match use_gate(Gate::EntryPage) {
        Some(to) => html! { <Redirect<Route> {to} /> },
        None => html! { <>{props.children.clone()}</> },
    }
}
