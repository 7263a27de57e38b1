use dioxus::prelude::*;

#[component]
pub fn ProBadge(hide: bool, #[props(default)] class: String) -> Element {
    if hide {
        return rsx! {};
    }

    rsx! {
        span {
            class: "pro-badge {class}",
            title: "Available on paid plans",
            "PRO"
        }
    }
}
