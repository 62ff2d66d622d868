use dioxus::prelude::*;

/// "2 / 5 - Library" for the location at `index` of `len`.
pub fn position_label(index: usize, len: usize, title: &str) -> String {
    format!("{} / {} - {}", index + 1, len, title)
}

#[component]
pub fn NavControls(
    label: Option<String>,
    disabled: bool,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "nav-controls",
            button {
                "aria-label": "Previous location",
                disabled: disabled,
                onclick: move |_| on_previous.call(()),
                "\u{2190} Previous"
            }
            span { class: "nav-label",
                if let Some(text) = &label {
                    "{text}"
                } else {
                    "No locations"
                }
            }
            button {
                "aria-label": "Next location",
                disabled: disabled,
                onclick: move |_| on_next.call(()),
                "Next \u{2192}"
            }
        }
    }
}
