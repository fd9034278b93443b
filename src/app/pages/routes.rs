use dioxus::prelude::*;

use crate::app::layouts::{Footer, Navbar};
use crate::app::pages::Home;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Landing site initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // Written by build.rs before compilation
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            Navbar {}

            main { class: "c-layout__main",
                Outlet::<Route> {}
            }

            Footer {}
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!(path = %path, "Unknown route");

    rsx! {
        section { class: "c-section c-section--not-found",
            h1 { class: "c-section__title", "Page not found" }
            p { class: "c-section__text", "/{path}" }
            Link { to: Route::Home {}, class: "c-section__link", "Back to home" }
        }
    }
}
