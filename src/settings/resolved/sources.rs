use std::fmt;

/// Where a configuration value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Origin of each validated setting; `None` means the default was used.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) api_base_url: Option<SettingSource>,
	pub(crate) api_timeout_ms: Option<SettingSource>,
	pub(crate) api_result_kind: Option<SettingSource>,
	pub(crate) search_debounce_ms: Option<SettingSource>,
	pub(crate) ui_theme: Option<SettingSource>,
	pub(crate) ui_fallback_avatar: Option<SettingSource>,
}

impl ConfigSources {
	/// Source recorded for `key`, falling back to the key itself.
	pub(crate) fn source_for(&self, key: &'static str) -> SettingSource {
		let recorded = match key {
			"api.base_url" => &self.api_base_url,
			"api.timeout_ms" => &self.api_timeout_ms,
			"api.result_kind" => &self.api_result_kind,
			"search.debounce_ms" => &self.search_debounce_ms,
			"ui.theme" => &self.ui_theme,
			"ui.fallback_avatar" => &self.ui_fallback_avatar,
			_ => &None,
		};
		recorded.clone().unwrap_or(SettingSource::ConfigKey(key))
	}
}
