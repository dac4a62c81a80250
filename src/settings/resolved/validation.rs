use tikseek::ResultKind;
use tikseek::api::endpoint_for;
use tikseek::image::{ImageProbe, UrlProbe};
use tikseek::tui::theme;

use super::{ConfigError, ConfigSources, MAX_DEBOUNCE_MS, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.timeout_ms == 0 {
		return Err(invalid(
			sources,
			"api.timeout_ms",
			config.timeout_ms.to_string(),
			"must be greater than zero",
		));
	}

	if config.debounce_ms > MAX_DEBOUNCE_MS {
		return Err(invalid(
			sources,
			"search.debounce_ms",
			config.debounce_ms.to_string(),
			format!("must not exceed {MAX_DEBOUNCE_MS} ms"),
		));
	}

	if let Err(err) = endpoint_for(&config.api_url) {
		return Err(invalid(
			sources,
			"api.base_url",
			config.api_url.as_str(),
			err.to_string(),
		));
	}

	if ResultKind::from_name(&config.result_kind).is_none() {
		return Err(invalid(
			sources,
			"api.result_kind",
			config.result_kind.as_str(),
			"expected `less` or `more`",
		));
	}

	if theme::by_name(&config.theme).is_none() {
		return Err(invalid(
			sources,
			"ui.theme",
			config.theme.as_str(),
			format!("unknown theme; available: {}", theme::names().join(", ")),
		));
	}

	if let Err(err) = UrlProbe.check(&config.fallback_avatar) {
		return Err(invalid(
			sources,
			"ui.fallback_avatar",
			config.fallback_avatar.as_str(),
			err.to_string(),
		));
	}

	Ok(())
}

fn invalid(
	sources: &ConfigSources,
	key: &'static str,
	value: impl Into<String>,
	reason: impl Into<String>,
) -> ConfigError {
	ConfigError::invalid(key, value, sources.source_for(key), reason)
}

#[cfg(test)]
mod tests {
	use tikseek::UiLabels;

	use super::super::{DEFAULT_API_URL, SettingSource};
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			api_url: DEFAULT_API_URL.to_string(),
			timeout_ms: 5_000,
			result_kind: "less".into(),
			debounce_ms: 500,
			initial_query: String::new(),
			fixture: None,
			theme: "dark".into(),
			fallback_avatar: "builtin:no-image".into(),
			labels: UiLabels::default(),
		}
	}

	#[test]
	fn defaults_pass_validation() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let config = ResolvedConfig {
			timeout_ms: 0,
			..config()
		};
		let sources = ConfigSources {
			api_timeout_ms: Some(SettingSource::CliFlag("--timeout-ms")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "api.timeout_ms");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_long_debounce() {
		let config = ResolvedConfig {
			debounce_ms: 10_001,
			..config()
		};
		let sources = ConfigSources {
			search_debounce_ms: Some(SettingSource::Environment("TIKSEEK__SEARCH__DEBOUNCE_MS")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "search.debounce_ms");
		let message = err.to_string();
		assert!(message.contains("environment variable"));
		assert!(message.contains("10000 ms"));
	}

	#[test]
	fn debounce_at_the_limit_is_accepted() {
		let config = ResolvedConfig {
			debounce_ms: MAX_DEBOUNCE_MS,
			..config()
		};
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_relative_base_url() {
		let config = ResolvedConfig {
			api_url: "search/api".into(),
			..config()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "api.base_url");
		assert_eq!(err.origin, SettingSource::ConfigKey("api.base_url"));
	}

	#[test]
	fn validation_rejects_unknown_result_kind() {
		let config = ResolvedConfig {
			result_kind: "everything".into(),
			..config()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "api.result_kind");
	}

	#[test]
	fn validation_lists_themes_when_unknown() {
		let config = ResolvedConfig {
			theme: "neon".into(),
			..config()
		};

		let message = validate(&config, &ConfigSources::default())
			.unwrap_err()
			.to_string();
		assert!(message.contains("available: dark, light"), "{message}");
	}

	#[test]
	fn validation_rejects_unloadable_fallback_avatar() {
		let config = ResolvedConfig {
			fallback_avatar: "ftp://example.com/a.png".into(),
			..config()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "ui.fallback_avatar");
	}
}
