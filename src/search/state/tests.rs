use std::time::{Duration, Instant};

use super::*;

const DELAY: Duration = Duration::from_millis(500);

fn account(id: u64, name: &str) -> Account {
	Account::new(id, name, name.to_lowercase(), false, "")
}

fn typed(search: &mut SearchBox, text: &str, at: Instant) -> Vec<SearchEffect> {
	search.dispatch(SearchEvent::InputChanged {
		text: text.to_string(),
		at,
	})
}

/// Type `text`, let the debounce settle and return the fetch it issued.
fn settle_query(search: &mut SearchBox, text: &str, at: Instant) -> RequestId {
	typed(search, text, at);
	let effects = search.dispatch(SearchEvent::Tick(at + DELAY));
	match effects.as_slice() {
		[SearchEffect::Fetch { id, query }] => {
			assert_eq!(query, text);
			*id
		}
		other => panic!("expected a single fetch, got {other:?}"),
	}
}

fn complete(search: &mut SearchBox, id: RequestId, accounts: Vec<Account>) {
	search.dispatch(SearchEvent::FetchCompleted {
		id,
		outcome: Ok(accounts),
	});
}

#[test]
fn leading_space_input_is_ignored() {
	let mut search = SearchBox::new(DELAY);
	let start = Instant::now();

	typed(&mut search, " leading", start);
	assert_eq!(search.raw_query(), "");
	assert!(search.debounce_deadline().is_none());

	typed(&mut search, "ok", start);
	typed(&mut search, " ok", start);
	assert_eq!(search.raw_query(), "ok");
}

#[test]
fn keystrokes_within_window_issue_one_fetch_for_the_last_value() {
	let mut search = SearchBox::new(DELAY);
	let start = Instant::now();
	let mut fetches = Vec::new();

	fetches.extend(typed(&mut search, "a", start));
	fetches.extend(search.dispatch(SearchEvent::Tick(start + Duration::from_millis(50))));
	fetches.extend(typed(&mut search, "ab", start + Duration::from_millis(100)));
	assert_eq!(search.raw_query(), "ab", "raw query updates synchronously");

	for ms in (150..=1_000).step_by(50) {
		fetches.extend(search.dispatch(SearchEvent::Tick(start + Duration::from_millis(ms))));
	}

	assert_eq!(
		fetches,
		vec![SearchEffect::Fetch {
			id: 1,
			query: "ab".into()
		}]
	);
	assert!(search.is_loading());
	assert_eq!(search.phase(), SearchPhase::Pending);
	assert_eq!(search.debounced_query(), "ab");
}

#[test]
fn empty_debounced_query_clears_results_without_fetching() {
	let mut search = SearchBox::new(DELAY);
	let start = Instant::now();
	let id = settle_query(&mut search, "hoa", start);
	complete(&mut search, id, vec![account(1, "Hoa")]);
	assert_eq!(search.results().len(), 1);

	let later = start + Duration::from_secs(2);
	typed(&mut search, "", later);
	let effects = search.dispatch(SearchEvent::Tick(later + DELAY));
	assert!(effects.is_empty());
	assert!(search.results().is_empty());
	assert_eq!(search.phase(), SearchPhase::Idle);
}

#[test]
fn completed_fetch_replaces_results_and_stops_loading() {
	let mut search = SearchBox::new(DELAY);
	let id = settle_query(&mut search, "hoa", Instant::now());
	assert!(search.loading_indicator_visible());
	assert!(!search.clear_button_visible());

	complete(&mut search, id, vec![account(1, "Hoa"), account(2, "Hoang")]);
	assert!(!search.is_loading());
	assert_eq!(search.phase(), SearchPhase::Ready);
	assert_eq!(search.results().len(), 2);
	assert!(!search.loading_indicator_visible());
	assert!(search.clear_button_visible());
}

#[test]
fn stale_completion_is_discarded() {
	let mut search = SearchBox::new(DELAY);
	let start = Instant::now();
	let first = settle_query(&mut search, "ho", start);
	let second = settle_query(&mut search, "hoa", start + Duration::from_secs(1));
	assert_ne!(first, second);

	complete(&mut search, second, vec![account(2, "Hoa")]);
	complete(&mut search, first, vec![account(9, "Hovering")]);

	let ids: Vec<u64> = search.results().iter().map(|a| a.id).collect();
	assert_eq!(ids, vec![2]);
}

#[test]
fn failed_fetch_keeps_previous_results_and_stops_loading() {
	let mut search = SearchBox::new(DELAY);
	let start = Instant::now();
	let id = settle_query(&mut search, "hoa", start);
	complete(&mut search, id, vec![account(1, "Hoa")]);

	let id = settle_query(&mut search, "hoan", start + Duration::from_secs(1));
	search.dispatch(SearchEvent::FetchCompleted {
		id,
		outcome: Err(SearchError::Status { status: 502 }),
	});

	assert!(!search.is_loading());
	assert_eq!(search.results().len(), 1);
	assert!(search.last_error().is_some_and(|msg| msg.contains("502")));

	let id = settle_query(&mut search, "hoang", start + Duration::from_secs(2));
	complete(&mut search, id, Vec::new());
	assert!(search.last_error().is_none());
}

#[test]
fn clear_resets_query_and_results_and_requests_focus() {
	let mut search = SearchBox::new(DELAY);
	let start = Instant::now();
	let id = settle_query(&mut search, "abc", start);
	complete(
		&mut search,
		id,
		vec![account(1, "A"), account(2, "B"), account(3, "C")],
	);
	assert!(search.popover_visible());

	let effects = search.dispatch(SearchEvent::ClearClicked);
	assert_eq!(effects, vec![SearchEffect::FocusInput]);
	assert_eq!(search.raw_query(), "");
	assert_eq!(search.debounced_query(), "");
	assert!(search.results().is_empty());
	assert!(search.is_focused());
	assert!(!search.popover_visible());

	// Clearing an already empty box behaves the same way.
	let effects = search.dispatch(SearchEvent::ClearClicked);
	assert_eq!(effects, vec![SearchEffect::FocusInput]);
	assert!(search.results().is_empty());
}

#[test]
fn clear_invalidates_the_fetch_in_flight() {
	let mut search = SearchBox::new(DELAY);
	let id = settle_query(&mut search, "abc", Instant::now());
	search.dispatch(SearchEvent::ClearClicked);
	assert!(!search.is_loading());

	complete(&mut search, id, vec![account(1, "Late")]);
	assert!(search.results().is_empty());
}

#[test]
fn outside_click_hides_popover_until_focus() {
	let mut search = SearchBox::new(DELAY);
	let id = settle_query(&mut search, "hoa", Instant::now());
	complete(&mut search, id, vec![account(1, "Hoa")]);
	assert!(search.popover_visible());

	search.dispatch(SearchEvent::OutsideClick);
	assert!(!search.is_visible());
	assert!(!search.popover_visible(), "results alone do not show the popover");
	assert_eq!(search.results().len(), 1);

	search.dispatch(SearchEvent::Focus);
	assert!(search.is_visible());
	assert!(search.popover_visible());
}

#[test]
fn popover_needs_results_even_when_visible() {
	let mut search = SearchBox::new(DELAY);
	search.dispatch(SearchEvent::Focus);
	assert!(search.is_visible());
	assert!(!search.popover_visible());
}

#[test]
fn indicators_follow_raw_query_and_loading() {
	let mut search = SearchBox::new(DELAY);
	assert!(!search.clear_button_visible());
	assert!(!search.loading_indicator_visible());

	typed(&mut search, "x", Instant::now());
	assert!(search.clear_button_visible());
	assert!(!search.loading_indicator_visible());
}

#[test]
fn debounce_elapsed_event_behaves_like_a_settled_tick() {
	let mut search = SearchBox::new(DELAY);
	let effects = search.dispatch(SearchEvent::DebounceElapsed("minh".into()));
	assert!(matches!(
		effects.as_slice(),
		[SearchEffect::Fetch { query, .. }] if query == "minh"
	));

	let repeat = search.dispatch(SearchEvent::DebounceElapsed("minh".into()));
	assert!(repeat.is_empty(), "unchanged debounced query does not refetch");
}

#[test]
fn debounce_elapsed_keeps_newer_pending_input() {
	let mut search = SearchBox::new(DELAY);
	let start = Instant::now();
	typed(&mut search, "ab", start);

	let first = search.dispatch(SearchEvent::DebounceElapsed("a".into()));
	assert!(matches!(
		first.as_slice(),
		[SearchEffect::Fetch { id: 1, query }] if query == "a"
	));
	assert_eq!(search.raw_query(), "ab");

	let effects = search.dispatch(SearchEvent::Tick(start + DELAY));
	assert_eq!(
		effects,
		vec![SearchEffect::Fetch {
			id: 2,
			query: "ab".into()
		}]
	);
	assert_eq!(search.debounced_query(), "ab");
}

#[test]
fn teardown_cancels_pending_debounce() {
	let mut search = SearchBox::new(DELAY);
	let start = Instant::now();
	typed(&mut search, "abc", start);
	search.teardown();

	let effects = search.dispatch(SearchEvent::Tick(start + Duration::from_secs(5)));
	assert!(effects.is_empty());
	assert!(search.debounce_deadline().is_none());
	assert!(!search.is_loading());
}
