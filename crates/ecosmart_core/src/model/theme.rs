//! Theme preference model.
//!
//! # Invariants
//! - Only the literal stored value `"dark"` selects dark mode.
//! - `as_str()` output round-trips through `from_stored()`.

use serde::{Deserialize, Serialize};

/// Glyph shown on the toggle while dark mode is active.
pub const SUN_GLYPH: &str = "\u{2600}\u{FE0F}";
/// Glyph shown on the toggle while light mode is active.
pub const MOON_GLYPH: &str = "\u{1F319}";

/// Persisted display mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interprets a raw stored value. Absent or unknown values are light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Glyph the toggle control displays for this mode.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Dark => SUN_GLYPH,
            Self::Light => MOON_GLYPH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Theme, MOON_GLYPH, SUN_GLYPH};

    #[test]
    fn only_literal_dark_selects_dark() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn storage_value_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
        }
    }

    #[test]
    fn glyph_follows_mode() {
        assert_eq!(Theme::Dark.toggle_glyph(), SUN_GLYPH);
        assert_eq!(Theme::Light.toggle_glyph(), MOON_GLYPH);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
