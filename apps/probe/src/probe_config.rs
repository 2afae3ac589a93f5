use std::env;

use userlink_core::{AppError, AppResult};

const DEFAULT_BASE_URL: &str = "https://reqres.in/api/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProbeConfig {
    pub(crate) base_url: String,
    pub(crate) timeout_secs: u64,
    pub(crate) user_id: i64,
    pub(crate) page: i64,
}

impl ProbeConfig {
    pub(crate) fn load() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let base_url = lookup("USER_API_BASE_URL")
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let timeout_secs = parse_or(&lookup, "USER_API_TIMEOUT_SECS", 15_u64)?;
        let user_id = parse_or(&lookup, "USER_API_PROBE_USER_ID", 2_i64)?;
        let page = parse_or(&lookup, "USER_API_PROBE_PAGE", 2_i64)?;

        if timeout_secs == 0 {
            return Err(AppError::Configuration(
                "USER_API_TIMEOUT_SECS must be greater than zero".to_owned(),
            ));
        }

        Ok(Self {
            base_url,
            timeout_secs,
            user_id,
            page,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> AppResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(value) => value.trim().parse::<T>().map_err(|error| {
            AppError::Configuration(format!("invalid {name} value '{value}': {error}"))
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use userlink_core::AppError;

    use super::ProbeConfig;

    fn load_from(pairs: &[(&str, &str)]) -> Result<ProbeConfig, AppError> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        ProbeConfig::from_lookup(|name| values.get(name).cloned())
    }

    #[test]
    fn defaults_target_public_api() {
        assert_eq!(
            load_from(&[]),
            Ok(ProbeConfig {
                base_url: "https://reqres.in/api/".to_owned(),
                timeout_secs: 15,
                user_id: 2,
                page: 2,
            })
        );
    }

    #[test]
    fn overrides_are_parsed() {
        let config = load_from(&[
            ("USER_API_BASE_URL", " http://127.0.0.1:8080/api "),
            ("USER_API_TIMEOUT_SECS", "3"),
            ("USER_API_PROBE_USER_ID", "9999"),
            ("USER_API_PROBE_PAGE", "4"),
        ]);

        assert_eq!(
            config,
            Ok(ProbeConfig {
                base_url: "http://127.0.0.1:8080/api".to_owned(),
                timeout_secs: 3,
                user_id: 9999,
                page: 4,
            })
        );
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = load_from(&[("USER_API_TIMEOUT_SECS", "0")]);

        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn malformed_number_is_rejected() {
        let result = load_from(&[("USER_API_PROBE_PAGE", "two")]);

        assert!(matches!(
            result,
            Err(AppError::Configuration(message)) if message.contains("USER_API_PROBE_PAGE")
        ));
    }
}
