use std::env;
use std::fmt;

use thiserror::Error;

/// Environment variable holding the bearer token expected by the cron endpoint.
pub const CRON_SECRET_VAR: &str = "CRON_SECRET";

/// Environment variable holding the site base URL. Trailing slashes are tolerated.
pub const SITE_URL_VAR: &str = "NEXT_PUBLIC_SITE_URL";

/// Required configuration for a trigger run.
///
/// Both values come from the process environment with no defaults; a run
/// without them is a configuration error, not a degraded run.
#[derive(Clone, PartialEq, Eq)]
pub struct TriggerConfig {
    cron_secret: String,
    site_url: String,
}

impl TriggerConfig {
    /// Loads configuration from the process environment, hydrating a `.env`
    /// file first if one is present. A missing `.env` file is not an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary lookup.
    ///
    /// Unset, empty, and whitespace-only values all count as missing, so an
    /// accidentally blank `CRON_SECRET=` line fails loudly instead of sending
    /// an empty bearer token.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            cron_secret: required_var(&lookup, CRON_SECRET_VAR)?,
            site_url: required_var(&lookup, SITE_URL_VAR)?,
        })
    }

    #[must_use]
    pub fn cron_secret(&self) -> &str {
        &self.cron_secret
    }

    #[must_use]
    pub fn site_url(&self) -> &str {
        &self.site_url
    }
}

// The secret must not reach logs through `{:?}`.
impl fmt::Debug for TriggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerConfig")
            .field("cron_secret", &"<redacted>")
            .field("site_url", &self.site_url)
            .finish()
    }
}

fn required_var<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingVar { key })
}

/// Errors emitted while reading the process environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable `{key}`")]
    MissingVar { key: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_string())
        }
    }

    #[test]
    fn test_from_lookup_reads_both_values() {
        let config = TriggerConfig::from_lookup(lookup_from(&[
            (CRON_SECRET_VAR, "abc123"),
            (SITE_URL_VAR, "https://example.com"),
        ]))
        .unwrap();

        assert_eq!(config.cron_secret(), "abc123");
        assert_eq!(config.site_url(), "https://example.com");
    }

    #[test]
    fn test_missing_secret_is_a_config_error() {
        let result =
            TriggerConfig::from_lookup(lookup_from(&[(SITE_URL_VAR, "https://example.com")]));

        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingVar {
                key: CRON_SECRET_VAR
            }
        );
    }

    #[test]
    fn test_missing_site_url_is_a_config_error() {
        let result = TriggerConfig::from_lookup(lookup_from(&[(CRON_SECRET_VAR, "abc123")]));

        assert_eq!(result.unwrap_err(), ConfigError::MissingVar { key: SITE_URL_VAR });
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let result = TriggerConfig::from_lookup(lookup_from(&[
            (CRON_SECRET_VAR, ""),
            (SITE_URL_VAR, "https://example.com"),
        ]));

        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingVar {
                key: CRON_SECRET_VAR
            }
        );
    }

    #[test]
    fn test_whitespace_only_value_counts_as_missing() {
        let result = TriggerConfig::from_lookup(lookup_from(&[
            (CRON_SECRET_VAR, "abc123"),
            (SITE_URL_VAR, "   "),
        ]));

        assert_eq!(result.unwrap_err(), ConfigError::MissingVar { key: SITE_URL_VAR });
    }

    #[test]
    fn test_values_are_trimmed() {
        let config = TriggerConfig::from_lookup(lookup_from(&[
            (CRON_SECRET_VAR, " abc123 "),
            (SITE_URL_VAR, "https://example.com/\n"),
        ]))
        .unwrap();

        assert_eq!(config.cron_secret(), "abc123");
        assert_eq!(config.site_url(), "https://example.com/");
    }

    #[test]
    fn test_debug_redacts_the_secret() {
        let config = TriggerConfig::from_lookup(lookup_from(&[
            (CRON_SECRET_VAR, "abc123"),
            (SITE_URL_VAR, "https://example.com"),
        ]))
        .unwrap();

        let debug = format!("{config:?}");
        assert!(!debug.contains("abc123"));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("https://example.com"));
    }

    #[test]
    fn test_missing_var_display_names_the_variable() {
        let error = ConfigError::MissingVar {
            key: CRON_SECRET_VAR,
        };
        let display = format!("{error}");
        assert!(display.contains("CRON_SECRET"));
        assert!(display.contains("missing required environment variable"));
    }
}
