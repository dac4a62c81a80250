//! Account records returned by the search service.

use serde::{Deserialize, Serialize};

/// A user profile as returned by the search endpoint.
///
/// Records are immutable once received. Two records describe the same account
/// when their [`id`](Account::id) matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
	pub id: u64,
	/// Human readable name, shown in bold.
	#[serde(rename = "full_name", default)]
	pub display_name: String,
	/// Handle rendered as `@username`.
	#[serde(rename = "nickname")]
	pub username: String,
	#[serde(rename = "tick", default)]
	pub verified: bool,
	/// Reference to the avatar image.
	#[serde(default)]
	pub avatar: String,
	#[serde(default)]
	pub followers_count: u64,
	#[serde(default)]
	pub likes_count: u64,
}

impl Account {
	/// Build an account with the fields the search popover renders.
	#[must_use]
	pub fn new(
		id: u64,
		display_name: impl Into<String>,
		username: impl Into<String>,
		verified: bool,
		avatar: impl Into<String>,
	) -> Self {
		Self {
			id,
			display_name: display_name.into(),
			username: username.into(),
			verified,
			avatar: avatar.into(),
			followers_count: 0,
			likes_count: 0,
		}
	}

	/// Return the display name, falling back to the username when the service
	/// left it blank.
	#[must_use]
	pub fn label(&self) -> &str {
		if self.display_name.trim().is_empty() {
			&self.username
		} else {
			&self.display_name
		}
	}
}
