use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn explicit_config_file_is_layered_under_cli_flags() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("tikseek.toml");
		fs::write(
			&path,
			r#"
[api]
base_url = "https://search.example/api"
timeout_ms = 1500

[search]
debounce_ms = 300

[ui]
theme = "light"
placeholder = "Find people"
"#,
		)
		.expect("write config");

		let cli = CliArgs::parse_from([
			"tikseek",
			"--no-config",
			"--config",
			path.to_str().expect("utf-8 path"),
			"--debounce-ms",
			"250",
		]);
		let config = load(&cli).expect("config loads");

		assert_eq!(config.api_url, "https://search.example/api");
		assert_eq!(config.timeout_ms, 1500);
		assert_eq!(config.debounce_ms, 250);
		assert_eq!(config.theme, "light");
		assert_eq!(config.labels.placeholder, "Find people");
	}

	#[test]
	fn invalid_file_values_name_the_config_key() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("bad.toml");
		fs::write(&path, "[api]\ntimeout_ms = 0\n").expect("write config");

		let cli = CliArgs::parse_from([
			"tikseek",
			"--no-config",
			"--config",
			path.to_str().expect("utf-8 path"),
		]);
		let message = load(&cli).expect_err("zero timeout rejected").to_string();
		assert!(message.contains("api.timeout_ms"), "{message}");
		assert!(message.contains("configuration key"), "{message}");
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let cli = CliArgs::parse_from([
			"tikseek",
			"--no-config",
			"--config",
			"/definitely/not/here/tikseek.toml",
		]);
		assert!(load(&cli).is_err());
	}
}
