use dioxus::prelude::*;
use editor_types::EditorAction;

use super::fold::TraceFold;
use super::panel::PanelHeader;
use crate::bem::bem;
use crate::editor::{PlotContext, TraceContext};

/// One fold to render, in figure order.
///
/// Folds are keyed by position: deleting or reordering traces hands a fold's
/// local state (folded or not) to whichever trace lands at its index.
#[derive(Clone, PartialEq)]
pub struct TracePanel {
    pub key: String,
    pub context: TraceContext,
}

pub fn trace_panels(context: &PlotContext) -> Vec<TracePanel> {
    context
        .data
        .iter()
        .enumerate()
        .map(|(trace_index, trace)| TracePanel {
            key: trace_index.to_string(),
            context: TraceContext {
                trace_index,
                trace: trace.clone(),
                on_update: context.on_update,
            },
        })
        .collect()
}

/// Ask the editor for a new trace; nothing happens without an editor callback
pub fn add_trace<F>(on_update: Option<F>)
where
    F: FnOnce(EditorAction),
{
    if let Some(on_update) = on_update {
        on_update(EditorAction::AddTrace);
    }
}

/// Panel listing one fold per trace, with an optional "+ Trace" action.
/// `children` is rendered inside every fold.
#[component]
pub fn TraceAccordion(
    context: PlotContext,
    #[props(default)] can_add: bool,
    children: Element,
) -> Element {
    let content_class = bem("panel", "content");
    let on_update = context.on_update;
    let panels = trace_panels(&context);

    rsx! {
        div {
            class: "{content_class}",
            if can_add {
                PanelHeader {
                    action: rsx! {
                        button {
                            class: "panel__add-button",
                            onclick: move |_| add_trace(on_update.map(|cb| move |action: EditorAction| cb.call(action))),
                            "+ Trace"
                        }
                    }
                }
            }
            for panel in panels {
                TraceFold {
                    key: "{panel.key}",
                    context: panel.context,
                    {children.clone()}
                }
            }
        }
    }
}
