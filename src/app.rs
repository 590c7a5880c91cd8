//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::sidebar::Sidebar;
use crate::components::toast_stack::{ToastStack, Toasts};
use crate::pages::members::MembersPage;

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
/// Provides the toast context and composes the sidebar alongside the
/// routed page content.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = Toasts::new();
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/dashboard-client.css"/>
        <Title text="Dashboard"/>

        <Router>
            <div class="app-shell">
                <Sidebar/>
                <main class="app-shell__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=MembersPage/>
                        <Route
                            path=(
                                StaticSegment("org"),
                                StaticSegment("members"),
                                StaticSegment("invite"),
                            )
                            view=MembersPage
                        />
                    </Routes>
                </main>
            </div>
            <ToastStack/>
        </Router>
    }
}
