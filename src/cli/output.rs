use anyhow::Result;
use serde_json::json;
use tikseek::{Account, SearchOutcome};

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	println!("{}", format_plain(outcome));
}

fn format_plain(outcome: &SearchOutcome) -> String {
	if !outcome.accepted {
		return format!("Search cancelled (query: '{}')", outcome.query);
	}

	match &outcome.selection {
		Some(account) => describe(account),
		None => "No selection".to_string(),
	}
}

fn describe(account: &Account) -> String {
	if account.display_name.trim().is_empty() {
		format!("@{}", account.username)
	} else {
		format!("@{} ({})", account.username, account.display_name)
	}
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let selection = match &outcome.selection {
		Some(account) => json!({
			"id": account.id,
			"username": account.username,
			"display_name": account.display_name,
			"verified": account.verified,
			"avatar": account.avatar,
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
