use dioxus::prelude::*;

use crate::bem::{bem, bem_modifier};
use crate::editor::{trace_title, TraceContext};

/// One collapsible trace panel.
///
/// Binds the trace to everything rendered inside it: descendants read
/// `use_context::<Signal<TraceContext>>()` to get the trace and emit updates
/// for it.
#[component]
pub fn TraceFold(context: TraceContext, children: Element) -> Element {
    let mut folded = use_signal(|| false);
    let mut provided = use_context_provider(|| Signal::new(context.clone()));

    // Props change without remounting; keep the provided trace current
    use_effect(use_reactive((&context,), move |(context,)| {
        if *provided.peek() != context {
            provided.set(context);
        }
    }));

    let title = trace_title(&context.trace, context.trace_index);
    let top_class = if folded() {
        bem_modifier("fold", "top", "folded")
    } else {
        bem("fold", "top")
    };
    let delete_context = context.clone();

    rsx! {
        div {
            class: "fold",
            div {
                class: "{top_class}",
                onclick: move |_| folded.toggle(),
                span { class: "fold__caret", if folded() { "▸" } else { "▾" } }
                span { class: "fold__title", "{title}" }
                button {
                    class: "fold__delete",
                    title: "Delete trace",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        delete_context.delete_trace();
                    },
                    "×"
                }
            }
            if !folded() {
                div { class: "fold__content", {children} }
            }
        }
    }
}
