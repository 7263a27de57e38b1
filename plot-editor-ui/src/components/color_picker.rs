use dioxus::prelude::*;
use editor_types::{CurrentUser, WorkspaceAction};

use super::pro_badge::ProBadge;
use super::tiered_color_picker::{preset_swatches, TieredColorPicker};
use crate::color::{ColorBuffer, ColorEvent};
use crate::features::{is_color_accessible, FeatureTable, TIER_COLORS};
use crate::tiered::tiered_decorator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Collapsed,
    Expanded,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Collapsed => Visibility::Expanded,
            Visibility::Expanded => Visibility::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Visibility::Expanded
    }
}

/// Local state of one picker
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPickerState {
    pub selected: ColorBuffer,
    pub visibility: Visibility,
}

impl ColorPickerState {
    pub fn new(selected_color: &str) -> Self {
        Self {
            selected: ColorBuffer::from_input(selected_color),
            visibility: Visibility::Collapsed,
        }
    }

    pub fn toggle_visible(&mut self) {
        self.visibility = self.visibility.toggled();
    }

    pub fn collapse(&mut self) {
        self.visibility = Visibility::Collapsed;
    }

    /// Adopt the `selected_color` prop if it names a different color.
    /// Returns whether the selection changed.
    pub fn sync_from_prop(&mut self, selected_color: &str) -> bool {
        match derive_selected_color(&self.selected, selected_color) {
            Some(next) => {
                self.selected = next;
                true
            }
            None => false,
        }
    }

    pub fn swatch_style(&self) -> String {
        format!("background-color: {};", self.selected.to_rgb_string())
    }

    pub fn color_text(&self) -> String {
        self.selected.to_hex_string()
    }
}

/// The prop wins only when it differs from the held color by RGB string;
/// edits made inside the picker stand until the prop changes.
pub fn derive_selected_color(current: &ColorBuffer, selected_color: &str) -> Option<ColorBuffer> {
    let incoming = ColorBuffer::from_input(selected_color);
    (incoming.to_rgb_string() != current.to_rgb_string()).then_some(incoming)
}

pub fn to_color_buffer(event: ColorEvent) -> ColorBuffer {
    ColorBuffer::from(event)
}

pub fn is_accessible(
    table: &FeatureTable,
    current_user: Option<&CurrentUser>,
    color: &ColorBuffer,
) -> bool {
    is_color_accessible(table, current_user, color)
}

/// Store an accepted color and return the RGB string to hand upward.
///
/// Only call this through `tiered_decorator`: it assumes the tier check has
/// already passed.
pub fn on_selected_color_change(state: &mut ColorPickerState, color: ColorBuffer) -> String {
    state.selected = color;
    color.to_rgb_string()
}

/// Run one completed picker event through the tier gate.
///
/// An accessible color is stored in `state` and its RGB string handed to
/// `on_color_change`; anything else leaves `state` alone and dispatches the
/// upgrade prompt.
pub fn complete_selection(
    state: &mut ColorPickerState,
    table: &FeatureTable,
    current_user: Option<&CurrentUser>,
    event: ColorEvent,
    mut on_color_change: impl FnMut(String),
    dispatch: impl FnMut(WorkspaceAction),
) {
    let mut gated = tiered_decorator(
        |color: ColorBuffer| on_color_change(on_selected_color_change(state, color)),
        |color: &ColorBuffer| is_accessible(table, current_user, color),
        TIER_COLORS.feature_name,
        dispatch,
        to_color_buffer,
    );
    gated(event);
}

#[component]
pub fn ColorPicker(
    selected_color: String,
    on_color_change: Callback<String>,
    dispatch: Callback<WorkspaceAction>,
    #[props(!optional)] current_user: Option<CurrentUser>,
    #[props(default = FeatureTable::bundled().clone())] feature_table: FeatureTable,
) -> Element {
    let mut picker = use_signal(|| ColorPickerState::new(&selected_color));

    use_effect(use_reactive((&selected_color,), move |(selected_color,)| {
        let next = derive_selected_color(&picker.peek().selected, &selected_color);
        if let Some(next) = next {
            picker.write().selected = next;
        }
    }));

    let state = picker.read().clone();
    let accessible = is_accessible(&feature_table, current_user.as_ref(), &state.selected);
    let presets = preset_swatches(&feature_table, current_user.as_ref());
    let swatch_style = state.swatch_style();
    let color_text = state.color_text();
    let picker_color = state.selected.to_rgb_string();

    let on_change_complete = move |event: ColorEvent| {
        let mut next = picker.peek().clone();
        let mut accepted = None;
        complete_selection(
            &mut next,
            &feature_table,
            current_user.as_ref(),
            event,
            |rgb| accepted = Some(rgb),
            |action| dispatch.call(action),
        );
        // Release the picker before handing the color upward
        if let Some(rgb) = accepted {
            picker.set(next);
            on_color_change.call(rgb);
        }
    };

    rsx! {
        div {
            class: "colorpicker-container js-colorpicker-container",
            div {
                class: "colorpicker",
                div {
                    class: "colorpicker-swatch +cursor-clickable js-colorpicker-swatch",
                    style: "{swatch_style}",
                    onclick: move |_| picker.write().toggle_visible(),
                }
            }
            div {
                class: "colorpicker-selected-color +hover-grey",
                onclick: move |_| picker.write().toggle_visible(),
                "{color_text}"
            }
            ProBadge { hide: accessible, class: "--inline-margin".to_string() }
            if state.visibility.is_expanded() {
                div {
                    class: "color-picker__popover js-color-picker-popover",
                    div {
                        class: "color-picker__cover",
                        onclick: move |_| picker.write().collapse(),
                    }
                    TieredColorPicker {
                        color: picker_color,
                        presets,
                        on_change_complete,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r##"
default_feature_set = "basic"

[feature_sets.basic.colors]
palette = ["#ff0000", "#00ff00"]

[feature_sets.gold.colors]
unlimited = true
"##;

    fn table() -> FeatureTable {
        FeatureTable::from_toml_str(DOC).expect("valid table")
    }

    fn select(
        state: &mut ColorPickerState,
        table: &FeatureTable,
        user: Option<&CurrentUser>,
        event: ColorEvent,
    ) -> (Vec<String>, Vec<WorkspaceAction>) {
        let mut changes = Vec::new();
        let mut dispatched = Vec::new();
        complete_selection(
            state,
            table,
            user,
            event,
            |rgb| changes.push(rgb),
            |action| dispatched.push(action),
        );
        (changes, dispatched)
    }

    #[test]
    fn starts_collapsed_and_toggles() {
        let mut state = ColorPickerState::new("#ff0000");
        assert_eq!(state.visibility, Visibility::Collapsed);

        state.toggle_visible();
        assert_eq!(state.visibility, Visibility::Expanded);

        state.toggle_visible();
        assert_eq!(state.visibility, Visibility::Collapsed);
    }

    #[test]
    fn cover_click_collapses() {
        let mut state = ColorPickerState::new("#ff0000");
        state.toggle_visible();
        state.collapse();
        assert_eq!(state.visibility, Visibility::Collapsed);

        state.collapse();
        assert_eq!(state.visibility, Visibility::Collapsed);
    }

    #[test]
    fn equivalent_prop_keeps_state() {
        let mut state = ColorPickerState::new("#ff0000");
        assert!(derive_selected_color(&state.selected, "rgb(255, 0, 0)").is_none());
        assert!(!state.sync_from_prop("red"));
        assert_eq!(state.selected, ColorBuffer::rgb(255, 0, 0));
    }

    #[test]
    fn different_prop_replaces_state() {
        let mut state = ColorPickerState::new("#ff0000");
        assert!(state.sync_from_prop("#0000ff"));
        assert_eq!(state.color_text(), "#0000FF");

        // Alpha shows up in the rgb string, so it counts as a change
        assert!(state.sync_from_prop("rgba(0, 0, 255, 0.5)"));
    }

    #[test]
    fn renders_initial_color() {
        let state = ColorPickerState::new("#ff0000");
        assert_eq!(state.swatch_style(), "background-color: rgb(255, 0, 0);");
        assert_eq!(state.color_text(), "#FF0000");
    }

    #[test]
    fn accessible_selection_propagates_once() {
        let table = table();
        let mut state = ColorPickerState::new("#ff0000");

        let (changes, dispatched) = select(
            &mut state,
            &table,
            None,
            ColorEvent::Hex("#00ff00".to_string()),
        );

        assert_eq!(changes, vec!["rgb(0, 255, 0)".to_string()]);
        assert!(dispatched.is_empty());
        assert_eq!(state.swatch_style(), "background-color: rgb(0, 255, 0);");
        assert_eq!(state.color_text(), "#00FF00");
    }

    #[test]
    fn inaccessible_selection_is_blocked() {
        let table = table();
        let mut state = ColorPickerState::new("#ff0000");

        let (changes, dispatched) =
            select(&mut state, &table, None, ColorEvent::rgb(0, 0, 255));

        assert!(changes.is_empty());
        assert_eq!(
            dispatched,
            vec![WorkspaceAction::OpenUpgradeModal {
                feature_name: "colors".to_string()
            }]
        );
        assert_eq!(state.color_text(), "#FF0000");
    }

    #[test]
    fn paid_tier_accepts_any_color() {
        let table = table();
        let user = CurrentUser::new("gil", Some("gold"));
        let mut state = ColorPickerState::new("#ff0000");

        let (changes, _) =
            select(&mut state, &table, Some(&user), ColorEvent::rgb(0, 0, 255));
        assert_eq!(changes, vec!["rgb(0, 0, 255)".to_string()]);
    }

    #[test]
    fn badge_follows_selected_color_access() {
        let table = table();
        let blocked = ColorPickerState::new("#0000ff");
        let allowed = ColorPickerState::new("#00ff00");

        assert!(!is_accessible(&table, None, &blocked.selected));
        assert!(is_accessible(&table, None, &allowed.selected));
    }

    #[test]
    fn rgb_and_hex_events_normalize_alike() {
        assert_eq!(
            to_color_buffer(ColorEvent::rgb(0, 255, 0)).to_rgb_string(),
            to_color_buffer(ColorEvent::Hex("#00FF00".to_string())).to_rgb_string()
        );
    }

    fn picker(selected_color: &'static str) -> Element {
        rsx! {
            ColorPicker {
                selected_color: selected_color.to_string(),
                on_color_change: move |_: String| {},
                dispatch: move |_: WorkspaceAction| {},
                current_user: None,
                feature_table: table(),
            }
        }
    }

    fn render(selected_color: &'static str) -> String {
        let mut dom = VirtualDom::new_with_props(picker, selected_color);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_swatch_and_hex_readout() {
        let html = render("#ff0000");
        assert!(html.contains(r#"style="background-color: rgb(255, 0, 0);""#));
        assert!(html.contains("#FF0000"));
        assert!(html.contains("colorpicker-selected-color"));
    }

    #[test]
    fn popover_is_not_mounted_while_collapsed() {
        let html = render("#ff0000");
        assert!(!html.contains("color-picker__popover"));
        assert!(!html.contains("tiered-color-picker"));
    }

    #[test]
    fn badge_shows_only_for_colors_outside_the_tier() {
        assert!(!render("#ff0000").contains("pro-badge"));

        let blocked = render("#0000ff");
        assert!(blocked.contains("pro-badge"));
        assert!(blocked.contains("PRO"));
    }
}
