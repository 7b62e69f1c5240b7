// ============================================================================
// LAYOUTS - Envoltorios decorativos de las páginas
// ============================================================================

use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_logout, use_session};
use crate::routes::Route;
use crate::utils::constants::{AUTH_BACKGROUND, AUTH_LOGO, MAIN_BACKGROUND, NAV_LOGO};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(AuthLayout)]
pub fn auth_layout(props: &LayoutProps) -> Html {
    let background = format!(
        "background-image: linear-gradient(rgba(0,0,0,0.5), rgba(0,0,0,0.5)), url({})",
        AUTH_BACKGROUND
    );

    html! {
        <div class="auth-layout" style={background}>
            <div class="auth-logo-mobile">
                <img src={AUTH_LOGO} alt="Logo" />
            </div>
            <div class="auth-content">
                {props.children.clone()}
            </div>
            <div class="auth-logo-desktop">
                <img src={AUTH_LOGO} alt="Logo" />
            </div>
        </div>
    }
}

/// Marco de las páginas autenticadas: header con Send/Logout y footer.
#[function_component(MainLayout)]
pub fn main_layout(props: &LayoutProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let logout = use_logout();
    let linked = session.is_linked();

    let on_logo = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(if linked { &Route::Charts } else { &Route::Link });
            }
        })
    };
    let on_logout = logout.reform(|_: MouseEvent| ());
    let year = chrono::Utc::now().year();

    html! {
        <div class="main-layout" style={format!("background-image: url({})", MAIN_BACKGROUND)}>
            <div class="main-layout-glow" />
            <div class="main-layout-shade" />
            <header class="main-header">
                <div class="main-header-bar">
                    <button class="brand" onclick={on_logo}>
                        <img src={NAV_LOGO} alt="Logo" />
                        <span>{"I AM WEB MUSIC"}</span>
                    </button>
                    <nav class="main-nav">
                        if linked {
                            <>
                            <Link<Route> to={Route::Send} classes={classes!("nav-link")}>
                                <svg viewBox="0 0 24 24" class="icon" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                                    <path d="M22 2L11 13" /><path d="M22 2l-7 20-4-9-9-4 20-7z" />
                                </svg>
                                <span>{"Send"}</span>
                            </Link<Route>>
                            <button class="nav-logout" onclick={on_logout}>
                                <svg viewBox="0 0 24 24" class="icon" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                                    <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" />
                                    <polyline points="16 17 21 12 16 7" /><line x1="21" y1="12" x2="7" y2="12" />
                                </svg>
                                <span>{"Logout"}</span>
                            </button>
                            </>
                        }
                    </nav>
                </div>
            </header>
            <main class="main-content">
                {props.children.clone()}
            </main>
            <footer class="main-footer">
                {format!("© {} WebMusic. Unofficial client.", year)}
            </footer>
        </div>
    }
}
