use chrono::{Datelike, Local};
use dioxus::prelude::*;

use crate::config::site;

fn copyright_line(year: i32) -> String {
    format!("© {} All rights reserved.", year)
}

fn social_icon(name: &str) -> &'static str {
    match name {
        "Discord" => "💬",
        "GitHub" => "🐙",
        "LinkedIn" => "💼",
        _ => "🔗",
    }
}

#[component]
pub fn Footer() -> Element {
    let config = site();
    let copyright = copyright_line(Local::now().year());

    rsx! {
        footer { class: "c-footer",
            div { class: "c-footer__inner",
                p { class: "c-footer__copyright", "{copyright}" }

                div { class: "c-footer__social",
                    for link in config.social_links.iter() {
                        a {
                            key: "{link.name}",
                            class: "c-footer__social-link",
                            href: "{link.href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "{link.name}",
                            {social_icon(&link.name)}
                        }
                    }
                }

                a {
                    class: "c-footer__privacy",
                    href: config.privacy_href(),
                    "Privacy Policy"
                }
            }
        }
    }
}
