//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    create_parcel::CreateParcelPage, my_parcels::MyParcelsPage, parcel_detail::ParcelDetailPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Views hold their own state, so no shared contexts are provided beyond the
/// meta context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/parcels.css"/>
        <Title text="Global Parcels"/>

        <Router>
            <Navbar/>
            <main class="layout">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=CreateParcelPage/>
                    <Route path=StaticSegment("my-parcels") view=MyParcelsPage/>
                    <Route
                        path=(StaticSegment("parcels"), ParamSegment("id"))
                        view=ParcelDetailPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
