use dioxus::prelude::*;

use crate::bem::bem;

/// Header row of a panel; `action` sits on the right-hand side
#[component]
pub fn PanelHeader(action: Element) -> Element {
    let header_class = bem("panel", "header");

    rsx! {
        div {
            class: "{header_class}",
            div { class: "panel__header__action", {action} }
        }
    }
}
