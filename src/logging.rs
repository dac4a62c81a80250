//! Diagnostic logging.
//!
//! The terminal belongs to the UI while it runs, so log lines go to a file.
//! With neither `--log-file` nor `TIKSEEK_LOG` no subscriber is installed and
//! `tracing` macros are no-ops.

use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs::AppDirs;

/// Environment variable holding the filter directive, e.g. `tikseek=debug`.
pub const LOG_FILTER_ENV: &str = "TIKSEEK_LOG";

const DEFAULT_FILTER: &str = "info";

/// Install a global subscriber that appends to `path`.
///
/// Without `path`, setting `TIKSEEK_LOG` alone logs to the default file in
/// the data directory.
pub fn initialize(path: Option<&Path>) -> Result<()> {
	let Some(target) = log_target(path)? else {
		return Ok(());
	};
	let path = target.as_path();

	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = File::options()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	tracing_subscriber::fmt()
		.with_env_filter(filter_from_env())
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.try_init()
		.map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))?;

	tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging initialized");
	Ok(())
}

fn log_target(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
	if let Some(path) = explicit {
		return Ok(Some(path.to_path_buf()));
	}
	if env::var_os(LOG_FILTER_ENV).is_none() {
		return Ok(None);
	}
	Ok(Some(AppDirs::locate()?.log_file()))
}

fn filter_from_env() -> EnvFilter {
	EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
