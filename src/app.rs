//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navigation::NavBar;
use crate::components::toast_stack::ToastStack;
use crate::pages::{
    admin::AdminPage, analytics::AnalyticsPage, etl::EtlPage, home::HomePage,
    locate_to_map::LocateToMapPage, login::LoginPage, map_search::MapSearchPage,
    observations::ObservationsPage, register::RegisterPage, settings::SettingsPage,
};
use crate::state::session::Session;
use crate::state::toasts::Toasts;

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
/// Provides the session and toast contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    let toasts = RwSignal::new(Toasts::default());

    provide_context(session);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/fieldfare.css"/>
        <Title text="Fieldfare"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("bird-observations") view=ObservationsPage/>
                <Route path=StaticSegment("map-search") view=MapSearchPage/>
                <Route path=StaticSegment("locate-to-map") view=LocateToMapPage/>
                <Route path=StaticSegment("analytics") view=AnalyticsPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
                <Route path=StaticSegment("etl") view=EtlPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
            </Routes>
            <ToastStack/>
        </Router>
    }
}
