use std::str::FromStr;

use crate::error::Error;

/// The two desktop appearances this tool knows how to apply globally.
///
/// Terminal profile names are free-form strings and pass through
/// untouched; only the look-and-feel step needs this closed set, so
/// parsing happens there rather than at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Plasma look-and-feel package applied for this theme.
    pub fn package(self) -> &'static str {
        match self {
            Theme::Light => "org.kde.breeze.desktop",
            Theme::Dark => "org.kde.breezedark.desktop",
        }
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "Light" => Ok(Theme::Light),
            "Dark" => Ok(Theme::Dark),
            other => Err(Error::UnsupportedTheme(other.to_owned())),
        }
    }
}
