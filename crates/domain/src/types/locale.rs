//! UI locale and theme

use serde::{Deserialize, Serialize};

use crate::impl_keyword_conversions;

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ru,
    En,
}

impl_keyword_conversions!(Locale {
    Ru => "ru",
    En => "en",
});

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Ru, Locale::En];

    /// The other locale of the pair; drives the language toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ru => Self::En,
            Self::En => Self::Ru,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::Ru
    }
}

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl_keyword_conversions!(Theme {
    Dark => "dark",
    Light => "light",
});

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Class applied to `<body>`.
    pub fn body_class(self) -> &'static str {
        match self {
            Self::Dark => "dark-theme",
            Self::Light => "light-theme",
        }
    }

    /// Material Symbols icon shown on the toggle (the theme it switches to).
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "light_mode",
            Self::Light => "dark_mode",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_parses_and_toggles() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(Locale::Ru.toggled(), Locale::En);
        assert_eq!(Locale::En.toggled().toggled(), Locale::En);
    }

    #[test]
    fn theme_classes() {
        assert_eq!(Theme::Dark.body_class(), "dark-theme");
        assert_eq!(Theme::Light.toggle_icon(), "dark_mode");
        assert_eq!(Theme::default().toggled(), Theme::Light);
    }
}
