use dioxus::prelude::*;

use crate::app::components::{AudioIndicator, Button, MenuToggle};
use crate::config::{nav_anchor, site};
use crate::domain::models::MenuState;
use crate::shared::hooks::use_nav_state;
use crate::shared::logging::log_menu_toggle;

/// Id of the animated container, targeted by the tween
pub const NAV_CONTAINER_ID: &str = "nav-container";

/// Menu state after any navigation link, desktop row or mobile panel, is
/// followed. The panel is only hidden by CSS above the breakpoint, so the
/// desktop links have to close it too.
fn menu_after_link(current: MenuState) -> MenuState {
    let next = current.on_link_activated();
    if next != current {
        log_menu_toggle(next);
    }
    next
}

/// Fixed navigation bar: hides while scrolling down, comes back when
/// scrolling up, floats anywhere below the top of the page.
#[component]
pub fn Navbar() -> Element {
    let config = site();
    let nav = use_nav_state(NAV_CONTAINER_ID, config.nav_animation());
    let mut menu = use_signal(MenuState::default);

    let container_class = nav.read().container_class();
    let menu_open = menu().is_open();
    let close_menu = move |_: MouseEvent| menu.set(menu_after_link(menu()));

    rsx! {
        div {
            id: NAV_CONTAINER_ID,
            class: "{container_class}",

            header { class: "c-nav__header",
                nav { class: "c-nav__bar",
                    // Left: brand mark + call to action
                    div { class: "c-nav__brand",
                        img {
                            class: "c-nav__logo",
                            src: "{config.logo_path}",
                            alt: "{config.brand} logo",
                        }
                        Button {
                            id: "product-button",
                            title: "Products",
                            right_icon: "➚",
                            class: "c-nav__cta",
                        }
                    }

                    // Right: links (desktop), audio, menu control (mobile)
                    div { class: "c-nav__actions",
                        div { class: "c-nav__links",
                            for item in config.nav_items.iter() {
                                a {
                                    key: "{item}",
                                    class: "nav-hover-btn",
                                    href: nav_anchor(item),
                                    onclick: close_menu,
                                    "{item}"
                                }
                            }
                        }

                        AudioIndicator { src: config.audio_path.clone() }

                        MenuToggle {
                            open: menu_open,
                            ontoggle: move |_| {
                                let next = menu().toggle();
                                log_menu_toggle(next);
                                menu.set(next);
                            },
                        }
                    }
                }

                if menu_open {
                    div { class: "c-nav__mobile-menu",
                        for item in config.nav_items.iter() {
                            a {
                                key: "{item}",
                                class: "c-nav__mobile-link",
                                href: nav_anchor(item),
                                onclick: close_menu,
                                "{item}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_closes_open_menu() {
        assert_eq!(menu_after_link(MenuState::Open), MenuState::Closed);
    }

    #[test]
    fn test_link_keeps_closed_menu_closed() {
        assert_eq!(menu_after_link(MenuState::Closed), MenuState::Closed);
    }

    #[test]
    fn test_every_nav_item_resolves_to_section_anchor() {
        for item in site().nav_items.iter() {
            assert_eq!(nav_anchor(item), format!("#{}", item.to_lowercase()));
        }
    }
}
