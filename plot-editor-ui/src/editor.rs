//! Figure state shared by the panels, and the reducer the host applies.

use dioxus::prelude::Callback;
use dioxus_logger::tracing::{debug, warn};
use editor_types::EditorAction;
use serde_json::{json, Map, Value};

/// What a panel needs from the editor that hosts it
#[derive(Clone, PartialEq, Default)]
pub struct PlotContext {
    /// Trace list, in figure order
    pub data: Vec<Value>,
    pub on_update: Option<Callback<EditorAction>>,
}

impl PlotContext {
    pub fn new(data: Vec<Value>, on_update: Callback<EditorAction>) -> Self {
        Self {
            data,
            on_update: Some(on_update),
        }
    }

    pub fn emit(&self, action: EditorAction) {
        emit(self.on_update.as_ref(), action);
    }
}

/// Per-trace view of the figure, provided to a fold's children
#[derive(Clone, PartialEq)]
pub struct TraceContext {
    pub trace_index: usize,
    pub trace: Value,
    pub on_update: Option<Callback<EditorAction>>,
}

impl TraceContext {
    /// Read a dotted attribute (`"marker.color"`) from this trace
    pub fn attr(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.trace, |node, key| node.get(key))
    }

    /// `update` maps dotted attribute paths to new values
    pub fn update_trace(&self, update: Value) {
        emit(
            self.on_update.as_ref(),
            EditorAction::UpdateTraces {
                update,
                trace_indexes: vec![self.trace_index],
            },
        );
    }

    pub fn delete_trace(&self) {
        emit(
            self.on_update.as_ref(),
            EditorAction::DeleteTrace {
                trace_index: self.trace_index,
            },
        );
    }
}

fn emit(on_update: Option<&Callback<EditorAction>>, action: EditorAction) {
    if let Some(on_update) = on_update {
        on_update.call(action);
    }
}

/// Fold title: the trace's `name`, else its position
pub fn trace_title(trace: &Value, trace_index: usize) -> String {
    trace
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Trace {trace_index}"))
}

/// Applies `action` to the trace list in place.
pub fn apply_editor_action(data: &mut Vec<Value>, action: EditorAction) {
    debug!("Applying editor action {}", action.kind());
    match action {
        EditorAction::AddTrace => {
            let name = format!("trace {}", data.len());
            data.push(json!({
                "type": "scatter",
                "mode": "markers",
                "name": name,
            }));
        }
        EditorAction::UpdateTraces {
            update,
            trace_indexes,
        } => {
            let Some(update) = update.as_object() else {
                warn!("Ignoring trace update that is not an object: {}", update);
                return;
            };
            for index in trace_indexes {
                let Some(trace) = data.get_mut(index) else {
                    warn!("Ignoring update for missing trace {}", index);
                    continue;
                };
                for (path, value) in update {
                    set_path(trace, path, value.clone());
                }
            }
        }
        EditorAction::DeleteTrace { trace_index } => {
            if trace_index < data.len() {
                data.remove(trace_index);
            } else {
                warn!("Ignoring delete for missing trace {}", trace_index);
            }
        }
    }
}

fn set_path(target: &mut Value, path: &str, value: Value) {
    let mut node = target;
    let mut keys = path.split('.').peekable();
    while let Some(key) = keys.next() {
        if !node.is_object() {
            *node = Value::Object(Map::new());
        }
        let Value::Object(map) = node else {
            return;
        };
        if keys.peek().is_none() {
            map.insert(key.to_string(), value);
            return;
        }
        node = map
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
}
