use dioxus::prelude::*;
use editor_types::CurrentUser;

use crate::color::{ColorBuffer, ColorEvent};
use crate::features::{is_color_accessible, FeatureTable};

/// Swatches offered in the detailed picker, free colors first
pub const PRESET_COLORS: &[&str] = &[
    "#1F77B4", "#FF7F0E", "#2CA02C", "#D62728", "#9467BD", "#8C564B", "#E377C2", "#7F7F7F",
    "#BCBD22", "#17BECF", "#000000", "#FFFFFF", "#FF0000", "#00FF00", "#0000FF", "#FFD700",
];

#[derive(Debug, Clone, PartialEq)]
pub struct PresetSwatch {
    pub color: ColorBuffer,
    /// Outside the user's tier. Still clickable, so the tier gate can offer
    /// the upgrade.
    pub locked: bool,
}

pub fn preset_swatches(table: &FeatureTable, current_user: Option<&CurrentUser>) -> Vec<PresetSwatch> {
    PRESET_COLORS
        .iter()
        .map(|hex| {
            let color = ColorBuffer::from_input(hex);
            PresetSwatch {
                color,
                locked: !is_color_accessible(table, current_user, &color),
            }
        })
        .collect()
}

/// Detailed picker: preset swatches, a native color input and RGB fields.
/// Every emitted event is a completed selection.
#[component]
pub fn TieredColorPicker(
    color: String,
    presets: Vec<PresetSwatch>,
    on_change_complete: Callback<ColorEvent>,
) -> Element {
    let current = ColorBuffer::from_input(&color);
    // <input type="color"> only accepts lower-case #rrggbb
    let native_value = current.to_hex_string().to_ascii_lowercase();
    let alpha = current.alpha();
    let keyed_presets: Vec<(String, PresetSwatch)> = presets
        .into_iter()
        .map(|preset| (preset.color.to_hex_string(), preset))
        .collect();

    rsx! {
        div {
            class: "tiered-color-picker",
            div {
                class: "tiered-color-picker__presets",
                for (key, preset) in keyed_presets {
                    PresetButton {
                        key: "{key}",
                        preset,
                        on_change_complete,
                    }
                }
            }
            div {
                class: "tiered-color-picker__fields",
                input {
                    class: "tiered-color-picker__native",
                    r#type: "color",
                    value: "{native_value}",
                    onchange: move |evt| on_change_complete.call(ColorEvent::Hex(evt.value())),
                }
                ChannelInput {
                    label: "R",
                    value: current.r,
                    on_commit: move |r: u8| {
                        on_change_complete.call(ColorEvent::Rgb { r, g: current.g, b: current.b, a: alpha })
                    },
                }
                ChannelInput {
                    label: "G",
                    value: current.g,
                    on_commit: move |g: u8| {
                        on_change_complete.call(ColorEvent::Rgb { r: current.r, g, b: current.b, a: alpha })
                    },
                }
                ChannelInput {
                    label: "B",
                    value: current.b,
                    on_commit: move |b: u8| {
                        on_change_complete.call(ColorEvent::Rgb { r: current.r, g: current.g, b, a: alpha })
                    },
                }
            }
        }
    }
}

#[component]
fn PresetButton(preset: PresetSwatch, on_change_complete: Callback<ColorEvent>) -> Element {
    let hex = preset.color.to_hex_string();
    let rgb = preset.color.to_rgb_string();
    let class = if preset.locked {
        "tiered-color-picker__preset tiered-color-picker__preset--locked"
    } else {
        "tiered-color-picker__preset"
    };
    let picked = hex.clone();

    rsx! {
        button {
            class: "{class}",
            style: "background-color: {rgb};",
            title: "{hex}",
            onclick: move |_| on_change_complete.call(ColorEvent::Hex(picked.clone())),
            if preset.locked {
                span { class: "tiered-color-picker__lock", "🔒" }
            }
        }
    }
}

#[component]
fn ChannelInput(label: &'static str, value: u8, on_commit: Callback<u8>) -> Element {
    rsx! {
        label {
            class: "tiered-color-picker__channel",
            span { "{label}" }
            input {
                r#type: "number",
                min: "0",
                max: "255",
                value: "{value}",
                onchange: move |evt| {
                    if let Some(channel) = parse_channel(&evt.value()) {
                        on_commit.call(channel);
                    }
                },
            }
        }
    }
}

/// Channel text from a number field; out-of-range values are rejected
pub fn parse_channel(text: &str) -> Option<u8> {
    text.trim().parse::<u8>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_lock_colors_outside_tier() {
        let table = FeatureTable::from_toml_str(
            r##"
[feature_sets.basic.colors]
palette = ["#000000"]
"##,
        )
        .expect("valid table");
        let user = CurrentUser::new("bo", Some("basic"));

        let swatches = preset_swatches(&table, Some(&user));
        assert_eq!(swatches.len(), PRESET_COLORS.len());

        let black = swatches
            .iter()
            .find(|s| s.color == ColorBuffer::rgb(0, 0, 0))
            .expect("black preset");
        assert!(!black.locked);
        assert_eq!(swatches.iter().filter(|s| !s.locked).count(), 1);
    }

    #[test]
    fn unrestricted_table_unlocks_everything() {
        let swatches = preset_swatches(&FeatureTable::default(), None);
        assert!(swatches.iter().all(|s| !s.locked));
    }

    #[test]
    fn channel_text_must_fit_a_byte() {
        assert_eq!(parse_channel(" 128 "), Some(128));
        assert_eq!(parse_channel("256"), None);
        assert_eq!(parse_channel("-1"), None);
        assert_eq!(parse_channel(""), None);
    }
}
