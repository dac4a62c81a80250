use clap::ValueEnum;
use tikseek::ResultKind;

/// Result sizes the search endpoint understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ResultKindArg {
	Less,
	More,
}

impl ResultKindArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		self.kind().as_str()
	}

	fn kind(self) -> ResultKind {
		match self {
			ResultKindArg::Less => ResultKind::Less,
			ResultKindArg::More => ResultKind::More,
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
