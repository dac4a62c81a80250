use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn render_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	match &config.fixture {
		Some(path) => {
			let _ = writeln!(out, "  Search source: fixture {}", path.display());
		}
		None => {
			let _ = writeln!(out, "  Search source: {}", config.api_url);
			let _ = writeln!(out, "  Request timeout: {} ms", config.timeout_ms);
			let _ = writeln!(out, "  Result kind: {}", config.result_kind);
		}
	}
	let _ = writeln!(out, "  Debounce: {} ms", config.debounce_ms);
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	let _ = writeln!(out, "  UI theme: {}", config.theme);
	let _ = writeln!(out, "  Fallback avatar: {}", config.fallback_avatar);
	let _ = writeln!(out, "  Placeholder: {}", or_none(&config.labels.placeholder));
	let _ = writeln!(out, "  Popover title: {}", config.labels.popover_title);
	let _ = writeln!(out, "  Sidebar label: {}", config.labels.sidebar_label);
	out
}

fn or_none(text: &str) -> &str {
	if text.is_empty() { "(none)" } else { text }
}
