//! Listing view: the caller's parcels at `/my-parcels`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches on mount and again whenever the page index changes. Results are
//! applied through `ListingState::finish_load`, which drops stale responses.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::parcel_table::{Pager, ParcelTable};
use crate::state::listing::ListingState;
use crate::util::route::parcel_detail_path;

#[component]
pub fn MyParcelsPage() -> impl IntoView {
    let listing = RwSignal::new(ListingState {
        loading: true,
        ..ListingState::default()
    });
    let page_index = Memo::new(move |_| listing.with(|s| s.table.page_index()));
    let navigate = use_navigate();

    Effect::new(move || {
        page_index.track();
        let Some(seq) = listing.try_update(ListingState::begin_load) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let query = crate::net::api::ParcelListQuery::default();
            let result = crate::net::api::fetch_my_parcels(&query).await;
            if let Err(e) = &result {
                log::error!("error during data loading: {e}");
            }
            let _ = listing.try_update(|s| s.finish_load(seq, result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = seq;
    });

    let selected_id = RwSignal::new(None::<String>);
    Effect::new(move || {
        if let Some(parcel_id) = selected_id.get() {
            selected_id.set(None);
            navigate(&parcel_detail_path(&parcel_id), NavigateOptions::default());
        }
    });

    view! {
        <div class="listing-page">
            <Show when=move || listing.with(|s| s.error.is_some())>
                <p class="listing-page__error">
                    {move || listing.with(|s| s.error.clone().unwrap_or_default())}
                </p>
            </Show>
            <Show
                when=move || !listing.with(|s| s.loading)
                fallback=move || view! { <div class="listing-page__loading">"Loading..."</div> }
            >
                <ParcelTable listing=listing selected_id=selected_id/>
            </Show>
            <Pager listing=listing/>
        </div>
    }
}
