use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::layouts::AuthLayout;
use crate::hooks::use_link_flow;
use crate::state::sanitize_code;
use crate::utils::constants::CODE_LENGTH;

#[function_component(LinkPage)]
pub fn link_page() -> Html {
    let flow = use_link_flow();
    let state = &flow.state;

    let on_input = {
        let on_input = flow.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            // Sincroniza el DOM aunque el valor saneado no haya cambiado
            let sanitized = sanitize_code(&input.value());
            input.set_value(&sanitized);
            on_input.emit(sanitized);
        })
    };

    let on_submit = {
        let submit = flow.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let button_label = if state.is_submitting() { "Linking..." } else { "Link" };

    html! {
        <AuthLayout>
            <div class="link-card">
                <h1>{"Link Session"}</h1>
                <p>{"Enter the 8-digit code the Telegram bot shows you."}</p>
                <form class="link-form" novalidate=true onsubmit={on_submit}>
                    <input
                        type="text"
                        inputmode="numeric"
                        maxlength={CODE_LENGTH.to_string()}
                        placeholder="12345678"
                        class="code-input"
                        value={state.code.clone()}
                        disabled={!state.is_editable()}
                        oninput={on_input}
                    />
                    if let Some(hint) = state.hint() {
                        <span class="form-hint error">{hint}</span>
                    }
                    <button type="submit" class="btn-primary" disabled={!state.can_submit()}>
                        {button_label}
                    </button>
                </form>
                if let Some(status) = &state.status {
                    <p class={classes!("status", if status.is_success() { "success" } else { "error" })}>
                        {status.text().to_string()}
                    </p>
                }
            </div>
        </AuthLayout>
    }
}
