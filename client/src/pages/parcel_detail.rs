//! Detail view for a single parcel at `/parcels/{id}`.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::detail::{DetailState, DetailStatus, detail_fields};
use crate::util::route::parcel_id_from_path;

#[component]
pub fn ParcelDetailPage() -> impl IntoView {
    let location = use_location();
    let detail = RwSignal::new(DetailState::default());

    // Re-runs whenever the route path changes; older fetches become stale.
    Effect::new(move || {
        let parcel_id = parcel_id_from_path(&location.pathname.get());
        let Some(Some(seq)) = detail.try_update(|s| s.begin(parcel_id.clone())) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let id = parcel_id.unwrap_or_default();
            let result = crate::net::api::fetch_parcel(&id).await;
            if let Err(e) = &result {
                log::error!("parcel {id} unavailable: {e}");
            }
            let _ = detail.try_update(|s| s.resolve(seq, result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (seq, parcel_id);
    });

    view! {
        <div class="detail-page">
            {move || match detail.with(|s| s.status.clone()) {
                DetailStatus::Loading => {
                    view! { <div class="detail-page__status">"Loading..."</div> }.into_any()
                }
                DetailStatus::NotFound => {
                    view! { <div class="detail-page__status">"Parcel not found."</div> }.into_any()
                }
                DetailStatus::Found(parcel) => {
                    view! {
                        <h1 class="detail-page__title">"Parcel Details"</h1>
                        <div class="detail-card">
                            {detail_fields(&parcel)
                                .into_iter()
                                .map(|(label, value)| {
                                    view! {
                                        <p class="detail-card__field">
                                            <strong>{label}": "</strong>
                                            {value}
                                        </p>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
