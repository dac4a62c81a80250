use std::path::PathBuf;
use std::time::Duration;

use tikseek::tui::theme;
use tikseek::{ResultKind, Theme, UiLabels};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

pub(crate) const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub(crate) const DEFAULT_TIMEOUT_MS: u64 = 5_000;
pub(crate) const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub(crate) const MAX_DEBOUNCE_MS: u64 = 10_000;
pub(crate) const DEFAULT_THEME: &str = "dark";

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub api_url: String,
	pub timeout_ms: u64,
	pub result_kind: String,
	pub debounce_ms: u64,
	pub initial_query: String,
	pub fixture: Option<PathBuf>,
	pub theme: String,
	pub fallback_avatar: String,
	pub labels: UiLabels,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	pub fn timeout(&self) -> Duration {
		Duration::from_millis(self.timeout_ms)
	}

	pub fn debounce(&self) -> Duration {
		Duration::from_millis(self.debounce_ms)
	}

	/// Result kind sent to the service. Validation guarantees the name parses.
	pub fn kind(&self) -> ResultKind {
		ResultKind::from_name(&self.result_kind).unwrap_or_default()
	}

	/// Colors for the configured theme name.
	pub fn resolved_theme(&self) -> Theme {
		theme::by_name(&self.theme).unwrap_or_default()
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::render_summary(self));
	}
}
