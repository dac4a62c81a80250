//! What the interactive session returns when it ends.

use serde::Serialize;

use crate::account::Account;

/// Result of a search session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
	/// Whether the user picked an account rather than leaving.
	pub accepted: bool,
	/// Text in the search box when the session ended.
	pub query: String,
	/// The picked account, when one was chosen.
	pub selection: Option<Account>,
}

impl SearchOutcome {
	/// The user left without choosing anything.
	#[must_use]
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			selection: None,
		}
	}

	/// The user picked `account`.
	#[must_use]
	pub fn accepted(query: impl Into<String>, account: Account) -> Self {
		Self {
			accepted: true,
			query: query.into(),
			selection: Some(account),
		}
	}
}
