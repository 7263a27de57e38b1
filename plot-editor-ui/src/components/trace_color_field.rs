use dioxus::prelude::*;
use editor_types::{CurrentUser, WorkspaceAction};
use serde_json::{Map, Value};

use super::color_picker::ColorPicker;
use crate::editor::TraceContext;

pub const DEFAULT_TRACE_COLOR: &str = "#1F77B4";

/// Color of `attr` on the trace, or the first default colorway entry
pub fn field_color(context: &TraceContext, attr: &str) -> String {
    context
        .attr(attr)
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_TRACE_COLOR)
        .to_string()
}

pub fn attr_update(attr: &str, value: String) -> Value {
    let mut update = Map::new();
    update.insert(attr.to_string(), Value::String(value));
    Value::Object(update)
}

/// Color field for the trace of the enclosing fold
#[component]
pub fn TraceColorField(
    #[props(default = "Color".to_string())] label: String,
    #[props(default = "marker.color".to_string())] attr: String,
    #[props(!optional)] current_user: Option<CurrentUser>,
    dispatch: Callback<WorkspaceAction>,
) -> Element {
    let trace = use_context::<Signal<TraceContext>>();
    let context = trace.read().clone();
    let selected_color = field_color(&context, &attr);

    rsx! {
        div {
            class: "field",
            div { class: "field__title", "{label}" }
            div {
                class: "field__widget",
                ColorPicker {
                    selected_color,
                    on_color_change: move |rgb: String| context.update_trace(attr_update(&attr, rgb)),
                    dispatch,
                    current_user,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context(trace: Value) -> TraceContext {
        TraceContext {
            trace_index: 0,
            trace,
            on_update: None,
        }
    }

    #[test]
    fn reads_color_from_dotted_attr() {
        let ctx = context(json!({ "marker": { "color": "rgb(1, 2, 3)" } }));
        assert_eq!(field_color(&ctx, "marker.color"), "rgb(1, 2, 3)");
    }

    #[test]
    fn missing_or_array_color_uses_default() {
        assert_eq!(field_color(&context(json!({})), "marker.color"), DEFAULT_TRACE_COLOR);

        let per_point = context(json!({ "marker": { "color": ["red", "blue"] } }));
        assert_eq!(field_color(&per_point, "marker.color"), DEFAULT_TRACE_COLOR);
    }

    #[test]
    fn update_is_keyed_by_attr_path() {
        assert_eq!(
            attr_update("line.color", "rgb(0, 0, 0)".to_string()),
            json!({ "line.color": "rgb(0, 0, 0)" })
        );
    }
}
