pub mod color_picker;
pub mod fold;
pub mod panel;
pub mod pro_badge;
pub mod styles;
pub mod tiered_color_picker;
pub mod trace_accordion;
pub mod trace_color_field;

pub use color_picker::{ColorPicker, ColorPickerState, Visibility};
pub use fold::TraceFold;
pub use panel::PanelHeader;
pub use pro_badge::ProBadge;
pub use styles::EDITOR_STYLES;
pub use tiered_color_picker::{PresetSwatch, TieredColorPicker};
pub use trace_accordion::TraceAccordion;
pub use trace_color_field::TraceColorField;
