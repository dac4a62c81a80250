//! Configuration sources, lowest precedence first: the user `config.toml`,
//! `tikseek.toml` in the working directory, `--config` files in the order
//! given, then `TIKSEEK__SECTION__KEY` environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use tikseek::app_dirs::AppDirs;

use crate::cli::CliArgs;

/// Prefix of environment variables read as configuration, e.g.
/// `TIKSEEK__API__BASE_URL`.
pub(super) const ENV_PREFIX: &str = "tikseek";

const LOCAL_CONFIG_FILE: &str = "tikseek.toml";

pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in implicit_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}
	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.separator("__")
				.try_parsing(true),
		)
		.build()
		.context("failed to read configuration sources")
}

/// Files read unless `--no-config` is given; missing ones are skipped.
fn implicit_config_files() -> Vec<PathBuf> {
	let user = AppDirs::locate().ok().map(|dirs| dirs.config_file());
	let local = env::current_dir()
		.ok()
		.map(|dir| dir.join(LOCAL_CONFIG_FILE));
	user.into_iter().chain(local).collect()
}
