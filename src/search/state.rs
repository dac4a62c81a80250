//! Event-driven state for the account search box.
//!
//! [`SearchBox`] owns every piece of mutable search state. Hosts feed it
//! [`SearchEvent`]s and carry out the [`SearchEffect`]s it returns, which keeps
//! the behavior testable without a terminal or a network.

use std::time::{Duration, Instant};

use super::debounce::Debounced;
use crate::account::Account;
use crate::api::SearchError;

/// Identifier attached to each fetch so late answers can be recognized.
pub type RequestId = u64;

/// Coarse lifecycle of the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
	/// Nothing has been asked yet, or the query is empty.
	Idle,
	/// A fetch for the current debounced query is in flight.
	Pending,
	/// The latest fetch finished, with or without matches.
	Ready,
}

/// Things that can happen to the search box.
#[derive(Debug)]
pub enum SearchEvent {
	/// The input text changed to `text` at `at`.
	InputChanged { text: String, at: Instant },
	/// Time passed; settles the debounced query when its window elapsed.
	Tick(Instant),
	/// The debounced query settled on a new value. Newer input that is still
	/// waiting out its window is kept and settles later.
	DebounceElapsed(String),
	/// A fetch issued earlier finished.
	FetchCompleted {
		id: RequestId,
		outcome: Result<Vec<Account>, SearchError>,
	},
	/// The input gained focus.
	Focus,
	/// The user clicked somewhere outside the input and the popover.
	OutsideClick,
	/// The clear button was activated.
	ClearClicked,
}

/// Work the host must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEffect {
	/// Look up accounts for `query`, answering with the same `id`.
	Fetch { id: RequestId, query: String },
	/// Move keyboard focus back into the input.
	FocusInput,
}

/// Whether `text` may become the query. Leading spaces are refused.
#[must_use]
pub fn is_acceptable_query(text: &str) -> bool {
	!text.starts_with(' ')
}

/// State of one search box instance.
#[derive(Debug)]
pub struct SearchBox {
	raw_query: String,
	debounced: Debounced<String>,
	results: Vec<Account>,
	loading: bool,
	visible: bool,
	focused: bool,
	phase: SearchPhase,
	next_request_id: RequestId,
	latest_request: Option<RequestId>,
	last_error: Option<String>,
	torn_down: bool,
}

impl SearchBox {
	/// Fresh, empty state debouncing input by `delay`.
	#[must_use]
	pub fn new(delay: Duration) -> Self {
		Self {
			raw_query: String::new(),
			debounced: Debounced::new(String::new(), delay),
			results: Vec::new(),
			loading: false,
			visible: true,
			focused: false,
			phase: SearchPhase::Idle,
			next_request_id: 0,
			latest_request: None,
			last_error: None,
			torn_down: false,
		}
	}

	/// Apply `event` and return the effects the host has to run.
	pub fn dispatch(&mut self, event: SearchEvent) -> Vec<SearchEffect> {
		if self.torn_down {
			return Vec::new();
		}

		match event {
			SearchEvent::InputChanged { text, at } => {
				self.input_changed(text, at);
				Vec::new()
			}
			SearchEvent::Tick(now) => match self.debounced.poll(now).cloned() {
				Some(query) => self.debounced_changed(query),
				None => Vec::new(),
			},
			SearchEvent::DebounceElapsed(query) => {
				if &query == self.debounced.settled() {
					return Vec::new();
				}
				self.debounced.settle(query.clone());
				self.debounced_changed(query)
			}
			SearchEvent::FetchCompleted { id, outcome } => {
				self.fetch_completed(id, outcome);
				Vec::new()
			}
			SearchEvent::Focus => {
				self.focused = true;
				self.visible = true;
				Vec::new()
			}
			SearchEvent::OutsideClick => {
				self.focused = false;
				self.visible = false;
				Vec::new()
			}
			SearchEvent::ClearClicked => self.clear(),
		}
	}

	fn input_changed(&mut self, text: String, at: Instant) {
		if !is_acceptable_query(&text) || text == self.raw_query {
			return;
		}
		self.raw_query = text.clone();
		self.debounced.push(text, at);
	}

	fn debounced_changed(&mut self, query: String) -> Vec<SearchEffect> {
		if query.trim().is_empty() {
			self.results.clear();
			self.loading = false;
			self.latest_request = None;
			self.phase = SearchPhase::Idle;
			return Vec::new();
		}

		self.next_request_id = self.next_request_id.saturating_add(1);
		let id = self.next_request_id;
		self.latest_request = Some(id);
		self.loading = true;
		self.phase = SearchPhase::Pending;
		tracing::debug!(id, query = %query, "issuing account search");
		vec![SearchEffect::Fetch { id, query }]
	}

	fn fetch_completed(&mut self, id: RequestId, outcome: Result<Vec<Account>, SearchError>) {
		if self.latest_request != Some(id) {
			tracing::debug!(id, latest = ?self.latest_request, "dropping stale search result");
			return;
		}

		self.loading = false;
		self.phase = SearchPhase::Ready;
		match outcome {
			Ok(accounts) => {
				self.results = accounts;
				self.last_error = None;
			}
			Err(err) => {
				tracing::warn!(id, error = %err, "account search failed");
				self.last_error = Some(err.to_string());
			}
		}
	}

	fn clear(&mut self) -> Vec<SearchEffect> {
		self.raw_query.clear();
		self.debounced.reset(String::new());
		self.results.clear();
		self.loading = false;
		self.latest_request = None;
		self.phase = SearchPhase::Idle;
		self.focused = true;
		vec![SearchEffect::FocusInput]
	}

	/// Stop reacting to events and drop any pending debounce.
	pub fn teardown(&mut self) {
		self.debounced.cancel();
		self.torn_down = true;
	}

	#[must_use]
	pub fn raw_query(&self) -> &str {
		&self.raw_query
	}

	#[must_use]
	pub fn debounced_query(&self) -> &str {
		self.debounced.settled()
	}

	#[must_use]
	pub fn results(&self) -> &[Account] {
		&self.results
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.loading
	}

	/// Visibility flag: cleared by outside clicks, set again on focus.
	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	#[must_use]
	pub fn phase(&self) -> SearchPhase {
		self.phase
	}

	/// Request id of the fetch whose answer is still awaited or was last
	/// applied.
	#[must_use]
	pub fn latest_request(&self) -> Option<RequestId> {
		self.latest_request
	}

	/// Message of the most recent failed fetch, cleared by the next success.
	#[must_use]
	pub fn last_error(&self) -> Option<&str> {
		self.last_error.as_deref()
	}

	/// When the pending input will settle into the debounced query.
	#[must_use]
	pub fn debounce_deadline(&self) -> Option<Instant> {
		self.debounced.deadline()
	}

	#[must_use]
	pub fn popover_visible(&self) -> bool {
		self.visible && !self.results.is_empty()
	}

	#[must_use]
	pub fn loading_indicator_visible(&self) -> bool {
		!self.raw_query.is_empty() && self.loading
	}

	#[must_use]
	pub fn clear_button_visible(&self) -> bool {
		!self.raw_query.is_empty() && !self.loading
	}
}

#[cfg(test)]
mod tests;
