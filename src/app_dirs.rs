//! Where tikseek keeps its user configuration file and its log.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const CONFIG_DIR_ENV: &str = "TIKSEEK_CONFIG_DIR";
const DATA_DIR_ENV: &str = "TIKSEEK_DATA_DIR";

const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "tikseek.log";

/// Directories tikseek reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
	pub config_dir: PathBuf,
	pub data_dir: PathBuf,
}

impl AppDirs {
	/// Platform locations, overridden by `TIKSEEK_CONFIG_DIR` and
	/// `TIKSEEK_DATA_DIR` when those are set and non-empty.
	pub fn locate() -> Result<Self> {
		Self::with_overrides(dir_from_env(CONFIG_DIR_ENV), dir_from_env(DATA_DIR_ENV))
	}

	fn with_overrides(config_dir: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<Self> {
		if let (Some(config_dir), Some(data_dir)) = (&config_dir, &data_dir) {
			return Ok(Self {
				config_dir: config_dir.clone(),
				data_dir: data_dir.clone(),
			});
		}

		let project = ProjectDirs::from("io", "tikseek", "tikseek")
			.ok_or_else(|| anyhow!("no home directory to place tikseek files in"))?;
		Ok(Self {
			config_dir: config_dir.unwrap_or_else(|| project.config_local_dir().to_path_buf()),
			data_dir: data_dir.unwrap_or_else(|| project.data_local_dir().to_path_buf()),
		})
	}

	/// User configuration file, read before any local or explicit file.
	#[must_use]
	pub fn config_file(&self) -> PathBuf {
		self.config_dir.join(CONFIG_FILE)
	}

	/// Log written when `TIKSEEK_LOG` is set without `--log-file`.
	#[must_use]
	pub fn log_file(&self) -> PathBuf {
		self.data_dir.join(LOG_FILE)
	}
}

fn dir_from_env(name: &str) -> Option<PathBuf> {
	env::var_os(name)
		.filter(|value| !value.is_empty())
		.map(PathBuf::from)
}
