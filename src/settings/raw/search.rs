use std::path::PathBuf;

use serde::Deserialize;

use super::super::resolved::DEFAULT_DEBOUNCE_MS;
use crate::cli::CliArgs;

/// `[search]` section: input behavior and the optional offline fixture.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) debounce_ms: Option<u64>,
	pub(super) initial_query: Option<String>,
	pub(super) fixture: Option<PathBuf>,
}

pub(super) struct SearchResolution {
	pub(super) debounce_ms: u64,
	pub(super) initial_query: String,
	pub(super) fixture: Option<PathBuf>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(debounce) = cli.debounce_ms {
			self.debounce_ms = Some(debounce);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(path) = cli.fixture.clone() {
			self.fixture = Some(path);
		}
	}

	pub(super) fn finalize(self) -> SearchResolution {
		SearchResolution {
			debounce_ms: self.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS),
			initial_query: self.initial_query.unwrap_or_default(),
			fixture: self.fixture.filter(|path| !path.as_os_str().is_empty()),
		}
	}
}
