//! Sortable, filterable parcel table with pagination controls.
//!
//! DESIGN
//! ======
//! Reads and writes the page's `ListingState` directly; all table logic lives
//! in `state::table` so this component only renders and forwards clicks.

use leptos::prelude::*;

use crate::net::types::Parcel;
use crate::state::listing::ListingState;
use crate::state::table::ParcelColumn;

/// Parcel table body with a name filter and sortable headers.
///
/// Clicking a row writes its parcel id into `selected_id`; the page decides
/// where to navigate.
#[component]
pub fn ParcelTable(
    listing: RwSignal<ListingState>,
    selected_id: RwSignal<Option<String>>,
) -> impl IntoView {
    let page_rows = move || {
        listing.with(|s| {
            s.table
                .page_rows()
                .into_iter()
                .cloned()
                .collect::<Vec<Parcel>>()
        })
    };

    view! {
        <div class="parcel-table">
            <input
                class="parcel-table__filter"
                type="text"
                placeholder="Filter by name..."
                prop:value=move || listing.with(|s| s.table.name_filter().to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    listing.update(|s| s.table.set_name_filter(value));
                }
            />
            <table>
                <thead>
                    <tr>
                        {ParcelColumn::ALL
                            .into_iter()
                            .map(|column| view! { <SortableHeader column=column listing=listing/> })
                            .collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        page_rows()
                            .into_iter()
                            .map(|parcel| {
                                let id = parcel.id.clone();
                                view! {
                                    <tr
                                        class="parcel-table__row"
                                        on:click=move |_| selected_id.set(Some(id.clone()))
                                    >
                                        {ParcelColumn::ALL
                                            .into_iter()
                                            .map(|column| view! { <td>{column.cell(&parcel)}</td> })
                                            .collect::<Vec<_>>()}
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <Show when=move || listing.with(|s| s.table.page_rows().is_empty())>
                <p class="parcel-table__empty">"No parcels."</p>
            </Show>
        </div>
    }
}

#[component]
fn SortableHeader(column: ParcelColumn, listing: RwSignal<ListingState>) -> impl IntoView {
    let arrow = move || {
        listing.with(|s| {
            s.table
                .sort_direction(column)
                .map(|direction| direction.arrow())
                .unwrap_or_default()
        })
    };
    view! {
        <th
            class="parcel-table__header"
            on:click=move |_| listing.update(|s| s.table.toggle_sort(column))
        >
            {column.header()}
            " "
            <span class="parcel-table__sort" aria-hidden="true">{arrow}</span>
        </th>
    }
}

/// First/previous/next/last controls and the page label.
#[component]
pub fn Pager(listing: RwSignal<ListingState>) -> impl IntoView {
    let can_previous = move || listing.with(|s| s.table.can_previous_page());
    let can_next = move || listing.with(|s| s.table.can_next_page());

    view! {
        <div class="pager">
            <div class="pager__buttons">
                <button
                    class="btn pager__first"
                    title="First page"
                    disabled=move || !can_previous()
                    on:click=move |_| listing.update(|s| s.table.first_page())
                >
                    "«"
                </button>
                <button
                    class="btn pager__previous"
                    title="Previous page"
                    disabled=move || !can_previous()
                    on:click=move |_| listing.update(|s| s.table.previous_page())
                >
                    "‹"
                </button>
                <button
                    class="btn pager__next"
                    title="Next page"
                    disabled=move || !can_next()
                    on:click=move |_| listing.update(|s| s.table.next_page())
                >
                    "›"
                </button>
                <button
                    class="btn pager__last"
                    title="Last page"
                    disabled=move || !can_next()
                    on:click=move |_| listing.update(|s| s.table.last_page())
                >
                    "»"
                </button>
            </div>
            <span class="pager__label">{move || listing.with(|s| s.table.page_label())}</span>
        </div>
    }
}
