use serde::Deserialize;

use super::super::resolved::{DEFAULT_API_URL, DEFAULT_TIMEOUT_MS};
use crate::cli::CliArgs;

/// `[api]` section: where and how to reach the search service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ApiSection {
	pub(super) base_url: Option<String>,
	pub(super) timeout_ms: Option<u64>,
	pub(super) result_kind: Option<String>,
}

pub(super) struct ApiResolution {
	pub(super) base_url: String,
	pub(super) timeout_ms: u64,
	pub(super) result_kind: String,
}

impl ApiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.api_url.clone() {
			self.base_url = Some(url);
		}
		if let Some(timeout) = cli.timeout_ms {
			self.timeout_ms = Some(timeout);
		}
		if let Some(kind) = cli.result_kind {
			self.result_kind = Some(kind.as_str().to_string());
		}
	}

	pub(super) fn finalize(self) -> ApiResolution {
		ApiResolution {
			base_url: self
				.base_url
				.map(|url| url.trim().to_string())
				.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
			timeout_ms: self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS),
			result_kind: self
				.result_kind
				.unwrap_or_else(|| tikseek::ResultKind::default().as_str().to_string()),
		}
	}
}
