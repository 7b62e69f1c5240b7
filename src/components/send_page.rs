use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::layouts::MainLayout;
use crate::hooks::use_send_flow;
use crate::routes::Route;

#[function_component(SendPage)]
pub fn send_page() -> Html {
    let flow = use_send_flow();
    let navigator = use_navigator();
    let state = &flow.state;

    let on_input = {
        let on_input = flow.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    let on_submit = {
        let submit = flow.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let on_link_page = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Link);
        }
    });
    let on_logout = flow.logout.reform(|_: MouseEvent| ());

    let linked = flow.code.is_some();

    html! {
        <MainLayout>
            <section class="send-card">
                <h1>{"Send Song"}</h1>
                <p class="linked-code">
                    {format!("Linked code: {}", flow.code.clone().unwrap_or_default())}
                </p>
                <form class="send-form" onsubmit={on_submit}>
                    <input
                        type="text"
                        placeholder="Search or paste URL"
                        value={state.query.clone()}
                        oninput={on_input}
                    />
                    <button type="submit" class="btn-primary" disabled={!state.can_submit()}>
                        { if state.sending { "Sending…" } else { "Send" } }
                    </button>
                </form>
                <div class="send-actions">
                    <button class="btn-secondary" onclick={on_link_page}>{"Link Page"}</button>
                    <button class="btn-danger" onclick={on_logout} disabled={!state.can_logout(linked)}>
                        { if state.logging_out { "Disconnecting…" } else { "Disconnect" } }
                    </button>
                </div>
                if let Some(status) = &state.status {
                    <p class={classes!("status", if status.is_success() { "success" } else { "error" })}>
                        {status.text().to_string()}
                    </p>
                }
            </section>
        </MainLayout>
    }
}
