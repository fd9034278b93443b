use dioxus::prelude::*;

fn button_class(extra: &str) -> String {
    if extra.is_empty() {
        "c-button".to_string()
    } else {
        format!("c-button {}", extra)
    }
}

/// Pill call-to-action button with a trailing icon
#[component]
pub fn Button(
    title: &'static str,
    #[props(default = "")]
    id: &'static str,
    #[props(default = "")]
    right_icon: &'static str,
    /// Extra classes for layout (e.g. hiding below the breakpoint)
    #[props(default = "")]
    class: &'static str,
) -> Element {
    let button_class = button_class(class);

    rsx! {
        button {
            id: if !id.is_empty() { id },
            class: "{button_class}",
            span { class: "c-button__title", "{title}" }
            if !right_icon.is_empty() {
                span { class: "c-button__icon", "{right_icon}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class() {
        assert_eq!(button_class(""), "c-button");
        assert_eq!(button_class("c-nav__cta"), "c-button c-nav__cta");
    }
}
