#[cfg(test)]
use std::collections::HashMap;
use std::str::FromStr;

/// Startup configuration errors. Any of these stops the process before the listener binds.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} environment variable is not set")]
    MissingRequired { name: &'static str },
    #[error("{name} environment variable is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            name,
            reason: reason.into(),
        }
    }
}

/// Where configuration values are read from.
pub trait EnvSource {
    fn get(&self, name: &str) -> Option<String>;
}

/// The real process environment (after `.env` has been loaded).
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

#[cfg(test)]
impl EnvSource for HashMap<&str, &str> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).map(|v| v.to_string())
    }
}

/// Reads a setting that has no default.
///
/// Unset and empty values count as missing. Any other value, whitespace included, is
/// returned exactly as found.
pub fn require(env: &impl EnvSource, name: &'static str) -> Result<String, ConfigError> {
    match env.get(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingRequired { name }),
    }
}

/// Reads a setting, falling back to `default` when it is unset or blank.
pub fn optional(env: &impl EnvSource, name: &str, default: &str) -> String {
    env.get(name)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Like [`optional`], parsing the value when present.
pub fn parse_optional<T>(
    env: &impl EnvSource,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env.get(name).filter(|value| !value.trim().is_empty()) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid(name, e.to_string())),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "LANGCHAIN_API_KEY";

    #[test]
    fn should_fail_when_required_value_unset() {
        let env: HashMap<&str, &str> = HashMap::new();

        let result = require(&env, KEY);

        assert_eq!(result, Err(ConfigError::MissingRequired { name: KEY }));
    }

    #[test]
    fn should_treat_only_empty_value_as_missing() {
        let env = HashMap::from([(KEY, "")]);
        assert_eq!(
            require(&env, KEY),
            Err(ConfigError::MissingRequired { name: KEY })
        );

        for whitespace in ["   ", "\t\n"] {
            let env = HashMap::from([(KEY, whitespace)]);
            assert_eq!(require(&env, KEY), Ok(whitespace.to_string()));
        }
    }

    #[test]
    fn should_name_the_missing_variable_in_message() {
        let env: HashMap<&str, &str> = HashMap::new();

        let message = require(&env, KEY).unwrap_err().to_string();

        assert_eq!(message, "LANGCHAIN_API_KEY environment variable is not set");
    }

    #[test]
    fn should_return_value_exactly_as_set() {
        let env = HashMap::from([(KEY, " ls__key-with-spaces ")]);

        let value = require(&env, KEY).unwrap();

        assert_eq!(value, " ls__key-with-spaces ");
    }

    #[test]
    fn should_resolve_same_value_on_repeated_reads() {
        let env = HashMap::from([(KEY, "ls__abc")]);

        let first = require(&env, KEY).unwrap();
        let second = require(&env, KEY).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn should_fall_back_to_default_for_optional_values() {
        let env = HashMap::from([("BLANK", "")]);

        assert_eq!(optional(&env, "UNSET", "fallback"), "fallback");
        assert_eq!(optional(&env, "BLANK", "fallback"), "fallback");
    }

    #[test]
    fn should_parse_optional_values() {
        let env = HashMap::from([("PORT", " 9000 "), ("BAD_PORT", "http")]);

        assert_eq!(parse_optional(&env, "PORT", 8080u16), Ok(9000));
        assert_eq!(parse_optional(&env, "UNSET_PORT", 8080u16), Ok(8080));
        assert!(matches!(
            parse_optional(&env, "BAD_PORT", 8080u16),
            Err(ConfigError::Invalid { name: "BAD_PORT", .. })
        ));
    }
}
