// ============================================================================
// SESSION CONTEXT - Compartir el SessionHandle entre componentes
// ============================================================================
// Usa Context API de Yew; todas las páginas leen/escriben el mismo store
// ============================================================================

use yew::prelude::*;

use crate::stores::SessionHandle;

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    /// Por defecto, el store de `localStorage`.
    #[prop_or_default]
    pub session: Option<SessionHandle>,
    pub children: Children,
}

/// Provider component que envuelve la app y proporciona la sesión
#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let session = {
        let injected = props.session.clone();
        use_memo((), move |_| injected.unwrap_or_else(SessionHandle::browser))
    };

    html! {
        <ContextProvider<SessionHandle> context={(*session).clone()}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}

/// Sesión del contexto, o el store del navegador fuera de un provider.
#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().unwrap_or_else(SessionHandle::browser)
}
