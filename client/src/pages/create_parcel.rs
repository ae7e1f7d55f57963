//! Creation view: the parcel submission form at `/`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation happens locally through `ParcelForm::validate`; only a valid
//! form reaches the service. One POST per submit, no retry.

use leptos::prelude::*;

use crate::components::field_message::FieldMessage;
use crate::net::types::ParcelType;
use crate::state::form::{FormErrors, ParcelForm, SubmitStatus};

#[cfg(feature = "hydrate")]
const DEFAULT_ACK_MESSAGE: &str = "Parcel submitted.";

#[component]
pub fn CreateParcelPage() -> impl IntoView {
    let form = RwSignal::new(ParcelForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let status = RwSignal::new(SubmitStatus::default());
    let parcel_types = RwSignal::new(ParcelType::ALL.to_vec());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_parcel_types().await {
            Ok(records) => {
                let _ = parcel_types.try_set(crate::state::form::offered_parcel_types(&records));
            }
            Err(e) => log::warn!("parcel types unavailable, offering defaults: {e}"),
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_pending() {
            return;
        }
        let request = match form.get_untracked().validate() {
            Ok(request) => request,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FormErrors::default());
        status.set(SubmitStatus::Submitting);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_parcel(&request).await {
                Ok(ack) => {
                    log::info!("parcel submitted: {:?}", ack.message);
                    let _ = form.try_set(ParcelForm::default());
                    let message = ack.message.unwrap_or_else(|| DEFAULT_ACK_MESSAGE.to_owned());
                    let _ = status.try_set(SubmitStatus::Succeeded(message));
                }
                Err(e) => {
                    log::error!("create parcel failed: {e}");
                    let _ = status.try_set(SubmitStatus::Failed(e.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <div class="create-page">
            <form class="parcel-form" on:submit=on_submit>
                <div class="form-field">
                    <input
                        class="form-field__input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.name = value);
                        }
                    />
                    <FieldMessage message=Signal::derive(move || errors.get().name)/>
                </div>
                <div class="form-field">
                    <input
                        class="form-field__input"
                        type="text"
                        placeholder="Weight"
                        prop:value=move || form.with(|f| f.weight.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.weight = value);
                        }
                    />
                    <FieldMessage message=Signal::derive(move || errors.get().weight)/>
                </div>
                <div class="form-field">
                    <input
                        class="form-field__input"
                        type="number"
                        step="0.01"
                        placeholder="Content Value"
                        prop:value=move || form.with(|f| f.content_value.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.content_value = value);
                        }
                    />
                    <FieldMessage message=Signal::derive(move || errors.get().content_value)/>
                </div>
                <div class="form-field">
                    <select
                        class="form-field__select"
                        prop:value=move || form.with(|f| f.parcel_type.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.parcel_type = value);
                        }
                    >
                        <option value="" disabled=true>"Select Parcel Type"</option>
                        {move || {
                            parcel_types
                                .get()
                                .into_iter()
                                .map(|kind| {
                                    view! { <option value=kind.as_str()>{kind.as_str()}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                    <FieldMessage message=Signal::derive(move || errors.get().parcel_type)/>
                </div>
                <button
                    class="btn btn--primary parcel-form__submit"
                    type="submit"
                    disabled=move || status.get().is_pending()
                >
                    "Submit"
                </button>
                <Show when=move || status.get().message().is_some()>
                    <p
                        class="parcel-form__status"
                        class:parcel-form__status--error=move || {
                            matches!(status.get(), SubmitStatus::Failed(_))
                        }
                    >
                        {move || status.get().message().unwrap_or_default()}
                    </p>
                </Show>
            </form>
        </div>
    }
}
