use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use editor_types::{CurrentUser, EditorAction, WorkspaceAction};
use serde_json::json;

use plot_editor_ui::{apply_editor_action, PlotContext, TraceAccordion, TraceColorField, EDITOR_STYLES};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

/// Free (no feature set) -> pro -> free
fn next_feature_set(current: Option<&str>) -> Option<String> {
    match current {
        None => Some("pro".to_string()),
        Some(_) => None,
    }
}

#[component]
fn App() -> Element {
    let mut data = use_signal(|| {
        vec![json!({
            "type": "scatter",
            "mode": "markers",
            "name": "revenue",
            "marker": { "color": "#1F77B4" }
        })]
    });
    let mut feature_set = use_signal(|| None::<String>);
    let mut upgrade_prompt = use_signal(|| None::<String>);

    let on_update = use_callback(move |action: EditorAction| {
        apply_editor_action(&mut data.write(), action);
    });
    let dispatch = use_callback(move |action: WorkspaceAction| match action {
        WorkspaceAction::OpenUpgradeModal { feature_name } => {
            info!("Upgrade prompt for {}", feature_name);
            upgrade_prompt.set(Some(feature_name));
        }
    });

    let current_user = Some(CurrentUser {
        username: "demo".to_string(),
        feature_set_id: feature_set(),
    });
    let plan_label = feature_set().unwrap_or_else(|| "free".to_string());
    let prompt = upgrade_prompt();
    let prompt_text = prompt
        .as_deref()
        .map(|feature| format!("Your plan does not include these {feature}."))
        .unwrap_or_default();
    let context = PlotContext::new(data(), on_update);

    rsx! {
        style { {EDITOR_STYLES} }
        div {
            class: "editor",
            div {
                class: "editor-toolbar",
                span { "Plan: {plan_label}" }
                button {
                    onclick: move |_| {
                        let next = next_feature_set(feature_set.peek().as_deref());
                        feature_set.set(next);
                    },
                    "Switch plan"
                }
            }
            if prompt.is_some() {
                div {
                    class: "upgrade-notice",
                    span { "{prompt_text}" }
                    button { onclick: move |_| upgrade_prompt.set(None), "Dismiss" }
                }
            }
            TraceAccordion {
                context,
                can_add: true,
                TraceColorField { current_user: current_user.clone(), dispatch }
                TraceColorField {
                    label: "Line".to_string(),
                    attr: "line.color".to_string(),
                    current_user: current_user.clone(),
                    dispatch,
                }
            }
        }
    }
}
