//! The closed set of dashboard themes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    White,
    Dark,
    Pink,
    Contrasty,
}

impl ThemeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::White => "white",
            ThemeName::Dark => "dark",
            ThemeName::Pink => "pink",
            ThemeName::Contrasty => "contrasty",
        }
    }

    pub const fn all() -> &'static [ThemeName] {
        &[ThemeName::White, ThemeName::Dark, ThemeName::Pink, ThemeName::Contrasty]
    }

    /// Human-facing name shown in pickers.
    pub fn label(&self) -> &'static str {
        match self {
            ThemeName::White => "Light",
            ThemeName::Dark => "Dark",
            ThemeName::Pink => "Pink",
            ThemeName::Contrasty => "High Contrast",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ThemeName::White => "☀️",
            ThemeName::Dark => "🌙",
            ThemeName::Pink => "🌸",
            ThemeName::Contrasty => "◐",
        }
    }

    /// Primary color used for preview swatches.
    pub fn preview(&self) -> &'static str {
        match self {
            ThemeName::White => "#ffffff",
            ThemeName::Dark => "#1a1a2e",
            ThemeName::Pink => "#ff6b9d",
            ThemeName::Contrasty => "#000000",
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ThemeName {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "white" => Ok(ThemeName::White),
            "dark" => Ok(ThemeName::Dark),
            "pink" => Ok(ThemeName::Pink),
            "contrasty" => Ok(ThemeName::Contrasty),
            _ => Err(anyhow::anyhow!(
                "Unknown theme '{value}'. Available themes: white, dark, pink, contrasty."
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_name_roundtrips_through_its_string_form() {
        for theme in ThemeName::all() {
            let parsed = ThemeName::try_from(theme.as_str()).expect("roundtrip should succeed");
            assert_eq!(*theme, parsed);
        }
    }

    #[test]
    fn unknown_theme_errors() {
        let err = ThemeName::try_from("sepia").unwrap_err();
        assert!(err.to_string().contains("Unknown theme"));
    }

    #[test]
    fn default_theme_is_white() {
        assert_eq!(ThemeName::default(), ThemeName::White);
    }

    #[test]
    fn every_theme_has_metadata() {
        for theme in ThemeName::all() {
            assert!(!theme.label().is_empty());
            assert!(!theme.icon().is_empty());
            assert!(theme.preview().starts_with('#'));
        }
    }
}
