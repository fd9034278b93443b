use dioxus::prelude::*;

use crate::config::{section_id, site};

/// One anchored section per navigation label, plus the privacy notice the
/// footer links to.
#[component]
pub fn Home() -> Element {
    let config = site();

    rsx! {
        for item in config.nav_items.iter() {
            section {
                key: "{item}",
                id: section_id(item),
                class: "c-section",
                h2 { class: "c-section__title", "{item}" }
            }
        }

        section {
            id: "{config.privacy_anchor}",
            class: "c-section c-section--privacy",
            h2 { class: "c-section__title", "Privacy Policy" }
            p { class: "c-section__text",
                "This site keeps no state between visits. Audio and menu preferences reset on reload."
            }
        }
    }
}
