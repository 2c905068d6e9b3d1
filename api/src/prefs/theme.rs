use serde::Deserialize;
use serde::Serialize;

/// The user's light/dark preference. Persisted as `"dark"` or `"light"`.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The single client-local storage key holding the preference.
    pub const STORAGE_KEY: &'static str = "theme";

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Value written to storage and to the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Text shown on the toggle button.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dark => "🌙 Dark",
            Self::Light => "☀️ Light",
        }
    }

    /// Maps the platform's "prefers dark" signal; unknown means dark.
    pub fn from_ambient(prefers_dark: Option<bool>) -> Self {
        match prefers_dark {
            Some(false) => Self::Light,
            _ => Self::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_stored_values() {
        assert_eq!(Theme::from_str("dark"), Ok(Theme::Dark));
        assert_eq!(Theme::from_str("LIGHT"), Ok(Theme::Light));
        assert!(Theme::from_str("sepia").is_err());
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn storage_strings_match_serde() {
        assert_eq!(Theme::Light.as_str(), "light");
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }

    #[test]
    fn ambient_signal_defaults_to_dark() {
        assert_eq!(Theme::from_ambient(None), Theme::Dark);
        assert_eq!(Theme::from_ambient(Some(true)), Theme::Dark);
        assert_eq!(Theme::from_ambient(Some(false)), Theme::Light);
    }
}
