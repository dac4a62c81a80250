use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, ResultKindArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `tikseek` binary.
#[derive(Parser, Debug)]
#[command(
	name = "tikseek",
	version,
	long_version = long_version(),
	about = "Search accounts on a short-video site from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "TIKSEEK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'u',
		long = "api-url",
		value_name = "URL",
		help = "Base URL of the search service (default: http://localhost:8080/api)"
	)]
	pub(crate) api_url: Option<String>,
	#[arg(
		long = "timeout-ms",
		value_name = "MS",
		help = "Give up on a search request after this many milliseconds (default: 5000)"
	)]
	pub(crate) timeout_ms: Option<u64>,
	#[arg(
		short = 'd',
		long = "debounce-ms",
		value_name = "MS",
		help = "Wait this long after the last keystroke before searching (default: 500)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		short = 'k',
		long = "result-kind",
		value_enum,
		help = "Ask the service for a short or a long result list (default: less)"
	)]
	pub(crate) result_kind: Option<ResultKindArg>,
	#[arg(
		short = 'f',
		long,
		value_name = "FILE",
		help = "Answer searches from a JSON file instead of the service (default: none)"
	)]
	pub(crate) fixture: Option<PathBuf>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: dark)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write diagnostic logs to this file (default: logging disabled)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}
