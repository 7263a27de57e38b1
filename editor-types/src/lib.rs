//! Shared types between the plot editor frontend and its host workspace
//!
//! These types are used by both:
//! - Dioxus components (WASM)
//! - Any backend that persists figures or user entitlements
//!
//! Serializable with serde for JSON, exported to TypeScript with ts-rs

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Editor Actions
// ============================================================================

/// Actions a panel asks the hosting editor to apply to the figure.
///
/// Panels never mutate the trace list themselves; they hand one of these to
/// the editor's `on_update` callback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../../plot-editor-ui/src/types/generated.ts")]
pub enum EditorAction {
    /// Append a new trace to the figure
    AddTrace,

    /// Apply an update to the listed traces.
    /// `update` maps dotted attribute paths (`"marker.color"`) to values.
    UpdateTraces {
        #[ts(type = "Record<string, unknown>")]
        update: serde_json::Value,
        trace_indexes: Vec<usize>,
    },

    /// Remove a single trace
    DeleteTrace { trace_index: usize },
}

impl EditorAction {
    /// Wire tag of the action, matching the serialized `type` field
    pub fn kind(&self) -> &'static str {
        match self {
            EditorAction::AddTrace => ACTION_ADD_TRACE,
            EditorAction::UpdateTraces { .. } => ACTION_UPDATE_TRACES,
            EditorAction::DeleteTrace { .. } => ACTION_DELETE_TRACE,
        }
    }
}

// ============================================================================
// Workspace Actions
// ============================================================================

/// Actions dispatched to the surrounding workspace (outside the figure)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../../plot-editor-ui/src/types/generated.ts")]
pub enum WorkspaceAction {
    /// A tier-gated feature was used by a user whose tier does not include it
    OpenUpgradeModal { feature_name: String },
}

// ============================================================================
// Users
// ============================================================================

/// The signed-in user, as far as the editor cares
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[ts(export, export_to = "../../plot-editor-ui/src/types/generated.ts")]
pub struct CurrentUser {
    pub username: String,

    /// Entitlement tier; `None` means the default tier applies
    pub feature_set_id: Option<String>,
}

impl CurrentUser {
    pub fn new(username: impl Into<String>, feature_set_id: Option<&str>) -> Self {
        Self {
            username: username.into(),
            feature_set_id: feature_set_id.map(str::to_string),
        }
    }

    pub fn feature_set_id(&self) -> Option<&str> {
        self.feature_set_id.as_deref()
    }
}

// ============================================================================
// Constants
// ============================================================================

pub const ACTION_ADD_TRACE: &str = "ADD_TRACE";
pub const ACTION_UPDATE_TRACES: &str = "UPDATE_TRACES";
pub const ACTION_DELETE_TRACE: &str = "DELETE_TRACE";

// ============================================================================
// Tests
// ============================================================================
