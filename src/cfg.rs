use std::str::FromStr;

use prosper_core::gateways::AutocompleteOptions;

const DEFAULT_LOG_LEVEL: log::Level = log::Level::Debug;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub google_maps_api_key: Option<String>,
    pub log_level: log::Level,
    pub autocomplete: AutocompleteOptions,
}

impl Cfg {
    /// The values are captured by the build script.
    pub fn from_env_or_default() -> Self {
        Self::from_values(
            option_env!("GOOGLE_MAPS_API_KEY"),
            option_env!("PROSPER_LOG_LEVEL"),
        )
    }

    fn from_values(api_key: Option<&str>, log_level: Option<&str>) -> Self {
        let mut cfg = Self::default();
        cfg.google_maps_api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(ToString::to_string);
        if let Some(level) = log_level {
            cfg.log_level = log::Level::from_str(level.trim()).unwrap_or(DEFAULT_LOG_LEVEL);
        }
        cfg
    }
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            google_maps_api_key: None,
            log_level: DEFAULT_LOG_LEVEL,
            autocomplete: AutocompleteOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_api_key() {
        assert!(Cfg::from_values(None, None).google_maps_api_key.is_none());
        assert!(Cfg::from_values(Some(" "), None)
            .google_maps_api_key
            .is_none());
        assert_eq!(
            Cfg::from_values(Some(" abc "), None).google_maps_api_key,
            Some("abc".to_string())
        );
    }

    #[test]
    fn log_level() {
        assert_eq!(Cfg::from_values(None, None).log_level, log::Level::Debug);
        assert_eq!(
            Cfg::from_values(None, Some("warn")).log_level,
            log::Level::Warn
        );
        assert_eq!(
            Cfg::from_values(None, Some("verbose")).log_level,
            log::Level::Debug
        );
    }

    #[test]
    fn restrict_autocomplete_to_us_addresses() {
        let cfg = Cfg::default();
        assert_eq!(cfg.autocomplete.types, vec!["address"]);
        assert_eq!(cfg.autocomplete.country.as_deref(), Some("us"));
    }
}
