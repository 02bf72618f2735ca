//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{ClientConfig, META_DISPATCH_MODE};
use crate::pages::{home::HomePage, room::RoomPage};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is echoed into a meta tag so the hydrated client picks the same
/// dispatch mode the server rendered with.
pub fn shell(options: LeptosOptions, config: ClientConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name={META_DISPATCH_MODE} content={config.dispatch.as_str()}/>
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
/// Provides the client configuration and sets up routing: `/` is the landing
/// page and every single-segment path is a chat room.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ClientConfig>().unwrap_or_else(ClientConfig::from_document);
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/meowww.css"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=ParamSegment("room") view=RoomPage/>
            </Routes>
        </Router>
    }
}
