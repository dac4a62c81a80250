/// Text shown around the search box and in the page chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Logo text at the left of the header.
	pub logo: String,
	/// Placeholder shown while the search input is empty.
	pub placeholder: String,
	/// Heading of the result popover.
	pub popover_title: String,
	/// Labels at the right of the header.
	pub actions: Vec<String>,
	/// Text inside the sidebar placeholder.
	pub sidebar_label: String,
	/// Hint shown in the content area before an account is picked.
	pub content_hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			logo: "TikTok".to_string(),
			placeholder: "Search accounts and videos".to_string(),
			popover_title: "Accounts".to_string(),
			actions: vec!["Upload".to_string(), "Log in".to_string()],
			sidebar_label: "Sidebar".to_string(),
			content_hint: "Press / to search, Enter to pick an account, Esc to leave".to_string(),
		}
	}
}
