use std::sync::Arc;

use anyhow::{Context, Result};
use tikseek::{AccountSearch, AppOptions, FixtureSearch, HttpSearchClient, SearchOutcome};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive search experience.
pub(crate) struct SearchWorkflow {
	client: Arc<dyn AccountSearch>,
	options: AppOptions,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let client = build_client(&config)?;
		let options = AppOptions {
			debounce: config.debounce(),
			theme: config.resolved_theme(),
			labels: config.labels,
			fallback_avatar: config.fallback_avatar,
			initial_query: config.initial_query,
		};
		Ok(Self { client, options })
	}

	pub(crate) fn run(self) -> Result<SearchOutcome> {
		tikseek::run(self.client, self.options)
	}
}

fn build_client(config: &ResolvedConfig) -> Result<Arc<dyn AccountSearch>> {
	if let Some(path) = &config.fixture {
		let fixture = FixtureSearch::load(path)
			.with_context(|| format!("failed to load fixture {}", path.display()))?;
		tracing::info!(path = %path.display(), accounts = fixture.accounts().len(), "searching fixture");
		return Ok(Arc::new(fixture));
	}

	let client = HttpSearchClient::new(&config.api_url, config.timeout(), config.kind())
		.with_context(|| format!("failed to create search client for {}", config.api_url))?;
	tracing::info!(url = %config.api_url, "searching remote service");
	Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::tempdir;
	use tikseek::UiLabels;

	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			api_url: "http://localhost:8080/api".into(),
			timeout_ms: 5_000,
			result_kind: "less".into(),
			debounce_ms: 250,
			initial_query: "hoa".into(),
			fixture: None,
			theme: "light".into(),
			fallback_avatar: "builtin:no-image".into(),
			labels: UiLabels::default(),
		}
	}

	#[test]
	fn options_follow_the_configuration() {
		let workflow = SearchWorkflow::from_config(config()).expect("workflow");
		assert_eq!(workflow.options.debounce.as_millis(), 250);
		assert_eq!(workflow.options.initial_query, "hoa");
		assert_eq!(workflow.options.theme, tikseek::tui::theme::LIGHT);
	}

	#[test]
	fn fixture_client_answers_from_the_file() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("accounts.json");
		fs::write(
			&path,
			r#"{"data":[{"id":1,"full_name":"Hoa Nguyen","nickname":"hoanguyen","tick":true}]}"#,
		)
		.expect("write fixture");

		let config = ResolvedConfig {
			fixture: Some(path),
			..config()
		};
		let client = build_client(&config).expect("fixture client");
		let accounts = client.search("nguyen").expect("search");
		assert_eq!(accounts.len(), 1);
		assert_eq!(accounts[0].username, "hoanguyen");
	}

	#[test]
	fn missing_fixture_is_reported() {
		let config = ResolvedConfig {
			fixture: Some("/definitely/not/here.json".into()),
			..config()
		};
		let message = format!("{:#}", build_client(&config).err().expect("error"));
		assert!(message.contains("failed to load fixture"), "{message}");
	}
}
