use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ChartsPage, LinkPage, RedirectIfLinked, RequireSession, SendPage};

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Link,
    #[at("/send")]
    Send,
    #[at("/main")]
    Charts,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Clave del guard de cada ruta. Dos rutas protegidas nunca comparten
/// instancia, así que navegar entre ellas vuelve a consultar la sesión.
pub fn guard_key(route: &Route) -> String {
    route.to_path()
}

/// Las rutas autenticadas pasan por [`RequireSession`]; la de entrada por
/// [`RedirectIfLinked`].
pub fn switch(route: Route) -> Html {
    let key = guard_key(&route);
    match route {
        Route::Link => html! {
            <RedirectIfLinked key={key}>
                <LinkPage />
            </RedirectIfLinked>
        },
        Route::Send => html! {
            <RequireSession key={key}>
                <SendPage />
            </RequireSession>
        },
        Route::Charts => html! {
            <RequireSession key={key}>
                <ChartsPage />
            </RequireSession>
        },
        Route::NotFound => html! { <Redirect<Route> to={Route::Link} /> },
    }
}

/// Adónde manda un guard al visitante, decidido con la sesión al montar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Páginas autenticadas: `/send`, `/main`.
    RequireSession,
    /// Página de vinculación: un navegador ya vinculado la salta.
    EntryPage,
}

impl Gate {
    pub fn redirect_for(self, linked: bool) -> Option<Route> {
        match (self, linked) {
            (Gate::RequireSession, false) => Some(Route::Link),
            (Gate::EntryPage, true) => Some(Route::Send),
            _ => None,
        }
    }
}
