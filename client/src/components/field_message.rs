//! Inline validation message under a form control.

use leptos::prelude::*;

#[component]
pub fn FieldMessage(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="form-field__message" role="alert">
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
