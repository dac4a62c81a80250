use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use serde::Deserialize;

use super::{AccountSearch, SearchError};
use crate::account::Account;

#[derive(Deserialize)]
#[serde(untagged)]
enum FixtureDocument {
	Wrapped { data: Vec<Account> },
	Bare(Vec<Account>),
}

/// Offline search over a fixed list of accounts.
///
/// A query matches an account when the display name or the username contains
/// it, ignoring case. An optional latency makes the loading state visible.
#[derive(Debug, Clone, Default)]
pub struct FixtureSearch {
	accounts: Vec<Account>,
	latency: Duration,
}

impl FixtureSearch {
	#[must_use]
	pub fn new(accounts: Vec<Account>) -> Self {
		Self {
			accounts,
			latency: Duration::ZERO,
		}
	}

	/// Delay every answer by `latency`.
	#[must_use]
	pub fn with_latency(mut self, latency: Duration) -> Self {
		self.latency = latency;
		self
	}

	/// Load accounts from a JSON file holding either a bare array or a
	/// `{ "data": [...] }` envelope.
	pub fn load(path: &Path) -> Result<Self, SearchError> {
		let text = fs::read_to_string(path).map_err(|source| SearchError::FixtureIo {
			path: path.to_path_buf(),
			source,
		})?;
		let document: FixtureDocument =
			serde_json::from_str(&text).map_err(|source| SearchError::FixtureFormat {
				path: path.to_path_buf(),
				source,
			})?;

		let accounts = match document {
			FixtureDocument::Wrapped { data } => data,
			FixtureDocument::Bare(accounts) => accounts,
		};
		Ok(Self::new(accounts))
	}

	#[must_use]
	pub fn accounts(&self) -> &[Account] {
		&self.accounts
	}
}

impl AccountSearch for FixtureSearch {
	fn search(&self, query: &str) -> Result<Vec<Account>, SearchError> {
		if !self.latency.is_zero() {
			thread::sleep(self.latency);
		}

		let needle = query.trim().to_lowercase();
		if needle.is_empty() {
			return Ok(Vec::new());
		}

		Ok(self
			.accounts
			.iter()
			.filter(|account| {
				account.display_name.to_lowercase().contains(&needle)
					|| account.username.to_lowercase().contains(&needle)
			})
			.cloned()
			.collect())
	}
}
