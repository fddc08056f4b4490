//! Theme data models

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Storage key holding the theme mode
pub const THEME_KEY: &str = "theme";
/// Storage key holding the accent color
pub const ACCENT_COLOR_KEY: &str = "primary-color";
/// Class put on the root element while the dark theme is active
pub const DARK_CLASS: &str = "dark";
/// Style properties receiving the accent color
pub const ACCENT_STYLE_PROPERTIES: [&str; 2] = ["--primary", "--ring"];
/// Accent color used when none was persisted, as an "H S% L%" triple
pub const DEFAULT_ACCENT_COLOR: &str = "346.8 77.2% 49.8%";

/// Light or dark UI mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown theme mode: {0}")]
pub struct UnknownThemeMode(pub String);

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(UnknownThemeMode(s.to_string())),
        }
    }
}

/// Current theme values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    pub theme: ThemeMode,
    /// CSS color as an "H S% L%" triple, without the `hsl()` wrapper
    pub accent_color: String,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
        }
    }
}

/// Named accent colors offered by the preview
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Sequence)]
pub enum AccentPreset {
    #[default]
    Rose,
    Blue,
    Green,
    Orange,
    Violet,
    Yellow,
    Zinc,
}

impl AccentPreset {
    /// HSL triple of the preset
    pub fn hsl(self) -> &'static str {
        match self {
            AccentPreset::Rose => DEFAULT_ACCENT_COLOR,
            AccentPreset::Blue => "221.2 83.2% 53.3%",
            AccentPreset::Green => "142.1 76.2% 36.3%",
            AccentPreset::Orange => "24.6 95% 53.1%",
            AccentPreset::Violet => "262.1 83.3% 57.8%",
            AccentPreset::Yellow => "47.9 95.8% 53.1%",
            AccentPreset::Zinc => "240 5.9% 10%",
        }
    }

    /// Preset whose triple is exactly `color`, if any
    pub fn from_hsl(color: &str) -> Option<Self> {
        enum_iterator::all::<AccentPreset>().find(|preset| preset.hsl() == color)
    }
}

impl Display for AccentPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            AccentPreset::Rose => "Rose",
            AccentPreset::Blue => "Blue",
            AccentPreset::Green => "Green",
            AccentPreset::Orange => "Orange",
            AccentPreset::Violet => "Violet",
            AccentPreset::Yellow => "Yellow",
            AccentPreset::Zinc => "Zinc",
        };
        write!(f, "{}", str)
    }
}
