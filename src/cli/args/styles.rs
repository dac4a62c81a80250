use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use tikseek::app_dirs::AppDirs;

/// Produce the full version banner including the config and log locations.
pub(super) fn long_version() -> &'static str {
	let mut details = format!("tikseek {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	match AppDirs::locate() {
		Ok(dirs) => {
			let _ = writeln!(details, "config file: {}", dirs.config_file().display());
			let _ = writeln!(details, "log file: {}", dirs.log_file().display());
		}
		Err(err) => {
			let _ = writeln!(details, "directories unavailable ({err})");
		}
	}

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Magenta.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Magenta.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}
