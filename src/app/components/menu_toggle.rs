use dioxus::prelude::*;

/// Hamburger control; the three bars morph into an X while open
#[component]
pub fn MenuToggle(open: bool, ontoggle: EventHandler<MouseEvent>) -> Element {
    let toggle_class = if open {
        "c-menu-toggle c-menu-toggle--open"
    } else {
        "c-menu-toggle"
    };
    let label = if open { "Close menu" } else { "Open menu" };

    rsx! {
        button {
            class: "{toggle_class}",
            aria_label: "{label}",
            aria_expanded: "{open}",
            onclick: move |evt| ontoggle.call(evt),

            span { class: "c-menu-toggle__bar" }
            span { class: "c-menu-toggle__bar" }
            span { class: "c-menu-toggle__bar" }
        }
    }
}
