use serde::Deserialize;
use tikseek::UiLabels;
use tikseek::image::DEFAULT_FALLBACK;

use super::super::resolved::DEFAULT_THEME;
use crate::cli::CliArgs;

/// `[ui]` section: theme, avatar fallback and page labels.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) fallback_avatar: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) popover_title: Option<String>,
	pub(super) sidebar_label: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) theme: String,
	pub(super) fallback_avatar: String,
	pub(super) labels: UiLabels,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let mut labels = UiLabels::default();
		if let Some(placeholder) = self.placeholder {
			labels.placeholder = placeholder;
		}
		if let Some(title) = non_blank(self.popover_title) {
			labels.popover_title = title;
		}
		if let Some(label) = non_blank(self.sidebar_label) {
			labels.sidebar_label = label;
		}

		UiResolution {
			theme: non_blank(self.theme).unwrap_or_else(|| DEFAULT_THEME.to_string()),
			fallback_avatar: self
				.fallback_avatar
				.unwrap_or_else(|| DEFAULT_FALLBACK.to_string()),
			labels,
		}
	}
}

fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|text| text.trim().to_string())
		.filter(|text| !text.is_empty())
}
