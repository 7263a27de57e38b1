//! Feature tiers: which colors a user's feature set may use.
//!
//! The table is a TOML document loaded through `config`. Lookups never fail:
//! an absent user falls back to the default set, an unknown set id falls back
//! to the default set, and a feature the set does not mention is unlimited.

use std::collections::BTreeMap;

use config::{Config, File, FileFormat};
use dioxus_logger::tracing::{debug, error};
use editor_types::CurrentUser;
use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::color::ColorBuffer;

const BUNDLED_FEATURE_SETS: &str = include_str!("../assets/feature_sets.toml");

static BUNDLED: Lazy<FeatureTable> = Lazy::new(|| {
    FeatureTable::from_toml_str(BUNDLED_FEATURE_SETS).unwrap_or_else(|e| {
        error!("Bundled feature table is unreadable, tiers disabled: {}", e);
        FeatureTable::default()
    })
});

#[derive(Debug, Error)]
pub enum FeatureTableError {
    #[error("invalid feature table: {0}")]
    Config(#[from] config::ConfigError),
}

/// What a feature set allows for one feature
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "FeatureSpec")]
pub enum FeatureValue {
    Unlimited,
    /// Only these colors (any parseable color text)
    Palette(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct FeatureSpec {
    #[serde(default)]
    unlimited: bool,
    #[serde(default)]
    palette: Vec<String>,
}

impl From<FeatureSpec> for FeatureValue {
    fn from(spec: FeatureSpec) -> Self {
        if spec.unlimited {
            FeatureValue::Unlimited
        } else {
            FeatureValue::Palette(spec.palette)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FeatureTable {
    #[serde(default)]
    pub default_feature_set: Option<String>,
    #[serde(default)]
    pub feature_sets: BTreeMap<String, BTreeMap<String, FeatureValue>>,
}

impl FeatureTable {
    /// Table shipped with the editor (`assets/feature_sets.toml`)
    pub fn bundled() -> &'static FeatureTable {
        &BUNDLED
    }

    pub fn from_toml_str(document: &str) -> Result<Self, FeatureTableError> {
        let table = Config::builder()
            .add_source(File::from_str(document, FileFormat::Toml))
            .build()?
            .try_deserialize::<FeatureTable>()?;
        Ok(table)
    }

    /// Allowed value of `feature_name` for a feature set.
    ///
    /// Set ids are matched case-insensitively since `config` lowercases keys.
    pub fn feature_value(&self, feature_set_id: Option<&str>, feature_name: &str) -> FeatureValue {
        let requested = feature_set_id.map(str::to_ascii_lowercase);
        let set = requested
            .as_deref()
            .and_then(|id| self.feature_sets.get(id))
            .or_else(|| {
                if requested.is_some() {
                    debug!("Unknown feature set {:?}, using default", feature_set_id);
                }
                self.default_feature_set
                    .as_deref()
                    .and_then(|id| self.feature_sets.get(&id.to_ascii_lowercase()))
            });

        set.and_then(|features| features.get(&feature_name.to_ascii_lowercase()))
            .cloned()
            .unwrap_or(FeatureValue::Unlimited)
    }
}

// ============================================================================
// Color tier rules
// ============================================================================

/// One rule a restricted tier applies to a chosen color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorValidation {
    /// Color must be one of the palette entries (alpha ignored)
    InPalette,
    /// Transparency is a paid feature
    Opaque,
}

impl ColorValidation {
    fn passes(self, color: &ColorBuffer, palette: &[String]) -> bool {
        match self {
            ColorValidation::InPalette => palette
                .iter()
                .filter_map(|entry| ColorBuffer::parse(entry).ok())
                .any(|allowed| {
                    (allowed.r, allowed.g, allowed.b) == (color.r, color.g, color.b)
                }),
            ColorValidation::Opaque => color.is_opaque(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierColors {
    pub feature_name: &'static str,
    pub validations: &'static [ColorValidation],
}

pub const TIER_COLORS: TierColors = TierColors {
    feature_name: "colors",
    validations: &[ColorValidation::InPalette, ColorValidation::Opaque],
};

/// True when `color` breaks any of `validations` under `allowed`
pub fn has_inaccessible_feature(
    color: &ColorBuffer,
    allowed: &FeatureValue,
    validations: &[ColorValidation],
) -> bool {
    match allowed {
        FeatureValue::Unlimited => false,
        FeatureValue::Palette(palette) => validations.iter().any(|v| !v.passes(color, palette)),
    }
}

/// Whether `user` may pick `color` under `table`
pub fn is_color_accessible(
    table: &FeatureTable,
    user: Option<&CurrentUser>,
    color: &ColorBuffer,
) -> bool {
    let feature_set = user.and_then(CurrentUser::feature_set_id);
    let TierColors {
        feature_name,
        validations,
    } = TIER_COLORS;

    let allowed = table.feature_value(feature_set, feature_name);

    !has_inaccessible_feature(color, &allowed, validations)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r##"
default_feature_set = "basic"

[feature_sets.basic.colors]
palette = ["#ff0000", "rgb(0, 255, 0)"]

[feature_sets.gold.colors]
unlimited = true
"##;

    fn table() -> FeatureTable {
        FeatureTable::from_toml_str(DOC).expect("valid table")
    }

    #[test]
    fn parses_palette_and_unlimited_sets() {
        let table = table();
        assert_eq!(table.default_feature_set.as_deref(), Some("basic"));
        assert_eq!(
            table.feature_value(Some("gold"), "colors"),
            FeatureValue::Unlimited
        );
        assert_eq!(
            table.feature_value(Some("basic"), "colors"),
            FeatureValue::Palette(vec!["#ff0000".to_string(), "rgb(0, 255, 0)".to_string()])
        );
    }

    #[test]
    fn missing_or_unknown_set_uses_default() {
        let table = table();
        let default = table.feature_value(Some("basic"), "colors");
        assert_eq!(table.feature_value(None, "colors"), default);
        assert_eq!(table.feature_value(Some("platinum"), "colors"), default);
        assert_eq!(table.feature_value(Some("BASIC"), "colors"), default);
    }

    #[test]
    fn unmentioned_feature_is_unlimited() {
        assert_eq!(
            table().feature_value(Some("basic"), "fonts"),
            FeatureValue::Unlimited
        );
        assert_eq!(
            FeatureTable::default().feature_value(None, "colors"),
            FeatureValue::Unlimited
        );
    }

    #[test]
    fn palette_rules_flag_outside_colors_and_transparency() {
        let allowed = FeatureValue::Palette(vec!["#ff0000".to_string()]);
        let validations = TIER_COLORS.validations;

        let red = ColorBuffer::rgb(255, 0, 0);
        let blue = ColorBuffer::rgb(0, 0, 255);
        let faded_red = ColorBuffer::rgba(255, 0, 0, 0.5);

        assert!(!has_inaccessible_feature(&red, &allowed, validations));
        assert!(has_inaccessible_feature(&blue, &allowed, validations));
        assert!(has_inaccessible_feature(&faded_red, &allowed, validations));
        assert!(!has_inaccessible_feature(
            &faded_red,
            &allowed,
            &[ColorValidation::InPalette]
        ));
        assert!(!has_inaccessible_feature(&blue, &FeatureValue::Unlimited, validations));
    }

    #[test]
    fn absent_user_gets_default_tier() {
        let table = table();
        assert!(is_color_accessible(&table, None, &ColorBuffer::rgb(0, 255, 0)));
        assert!(!is_color_accessible(&table, None, &ColorBuffer::rgb(0, 0, 255)));
    }

    #[test]
    fn paid_user_may_use_any_color() {
        let table = table();
        let user = CurrentUser::new("gil", Some("gold"));
        assert!(is_color_accessible(&table, Some(&user), &ColorBuffer::rgb(0, 0, 255)));

        let unset = CurrentUser::new("ina", None);
        assert!(!is_color_accessible(&table, Some(&unset), &ColorBuffer::rgb(0, 0, 255)));
    }

    #[test]
    fn bundled_table_restricts_default_tier() {
        let table = FeatureTable::bundled();
        assert_eq!(table.default_feature_set.as_deref(), Some("free"));
        assert!(is_color_accessible(table, None, &ColorBuffer::rgb(0x1F, 0x77, 0xB4)));
        assert!(!is_color_accessible(table, None, &ColorBuffer::rgb(0, 255, 0)));

        let pro = CurrentUser::new("pat", Some("pro"));
        assert!(is_color_accessible(table, Some(&pro), &ColorBuffer::rgb(0, 255, 0)));
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(FeatureTable::from_toml_str("feature_sets = 3").is_err());
    }
}
