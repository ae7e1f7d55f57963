//! Top navigation bar shared by every route.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::route::{CREATE_ROUTE, MY_PARCELS_ROUTE};

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href=CREATE_ROUTE attr:class="navbar__brand">
                <h1>"Global Parcels"</h1>
            </A>
            <ul class="navbar__menu">
                <li>
                    <A href=CREATE_ROUTE attr:class="navbar__link">"Create Parcel"</A>
                </li>
                <li>
                    <A href=MY_PARCELS_ROUTE attr:class="navbar__link">"My Parcels"</A>
                </li>
            </ul>
        </nav>
    }
}
