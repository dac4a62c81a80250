use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod api;
mod search;
mod ui;

use api::ApiSection;
use search::SearchSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	search: SearchSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.api.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			api_base_url: detect_source(
				cli.api_url.is_some(),
				self.api.base_url.is_some(),
				"TIKSEEK__API__BASE_URL",
				"--api-url",
				"api.base_url",
			),
			api_timeout_ms: detect_source(
				cli.timeout_ms.is_some(),
				self.api.timeout_ms.is_some(),
				"TIKSEEK__API__TIMEOUT_MS",
				"--timeout-ms",
				"api.timeout_ms",
			),
			api_result_kind: detect_source(
				cli.result_kind.is_some(),
				self.api.result_kind.is_some(),
				"TIKSEEK__API__RESULT_KIND",
				"--result-kind",
				"api.result_kind",
			),
			search_debounce_ms: detect_source(
				cli.debounce_ms.is_some(),
				self.search.debounce_ms.is_some(),
				"TIKSEEK__SEARCH__DEBOUNCE_MS",
				"--debounce-ms",
				"search.debounce_ms",
			),
			ui_theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"TIKSEEK__UI__THEME",
				"--theme",
				"ui.theme",
			),
			ui_fallback_avatar: detect_source(
				false,
				self.ui.fallback_avatar.is_some(),
				"TIKSEEK__UI__FALLBACK_AVATAR",
				"",
				"ui.fallback_avatar",
			),
		};

		let api = self.api.finalize();
		let search = self.search.finalize();
		let ui = self.ui.finalize();

		let config = ResolvedConfig {
			api_url: api.base_url,
			timeout_ms: api.timeout_ms,
			result_kind: api.result_kind,
			debounce_ms: search.debounce_ms,
			initial_query: search.initial_query,
			fixture: search.fixture,
			theme: ui.theme,
			fallback_avatar: ui.fallback_avatar,
			labels: ui.labels,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
