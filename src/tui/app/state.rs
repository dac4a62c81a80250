use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::widgets::ListState;
use throbber_widgets_tui::ThrobberState;

use crate::account::Account;
use crate::api::AccountSearch;
use crate::image::{DEFAULT_FALLBACK, FallbackImage, ImageProbe, ImageStage, UrlProbe};
use crate::search::{SearchBox, SearchEffect, SearchEvent, SearchRuntime, is_acceptable_query};
use crate::tui::components::{PopoverHitbox, SearchBoxAreas};
use crate::tui::config::UiLabels;
use crate::tui::input::QueryInput;
use crate::tui::theme::Theme;

/// Default quiet period before a query is sent.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Construction parameters for [`App`].
#[derive(Debug, Clone)]
pub struct AppOptions {
	pub debounce: Duration,
	pub theme: Theme,
	pub labels: UiLabels,
	/// Image shown when an avatar cannot be loaded.
	pub fallback_avatar: String,
	/// Query typed into the box before the first frame.
	pub initial_query: String,
}

impl Default for AppOptions {
	fn default() -> Self {
		Self {
			debounce: DEFAULT_DEBOUNCE,
			theme: Theme::default(),
			labels: UiLabels::default(),
			fallback_avatar: DEFAULT_FALLBACK.to_string(),
			initial_query: String::new(),
		}
	}
}

impl<'a> Drop for App<'a> {
	fn drop(&mut self) {
		self.search.teardown();
	}
}

/// State of the whole page.
pub struct App<'a> {
	pub(crate) search: SearchBox,
	pub(crate) input: QueryInput<'a>,
	pub(crate) runtime: SearchRuntime,
	pub(crate) labels: UiLabels,
	pub(crate) theme: Theme,
	pub(crate) probe: Box<dyn ImageProbe>,
	pub(crate) fallback_avatar: String,
	pub(crate) avatars: HashMap<u64, FallbackImage>,
	pub(crate) list_state: ListState,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) hitbox: PopoverHitbox,
	pub(crate) search_areas: Option<SearchBoxAreas>,
	/// Account last picked with the mouse, shown in the content pane.
	pub(crate) picked: Option<Account>,
}

impl<'a> App<'a> {
	/// Build the page, answering searches with `client`.
	pub fn new(client: Arc<dyn AccountSearch>, options: AppOptions) -> Self {
		let AppOptions {
			debounce,
			theme,
			labels,
			fallback_avatar,
			initial_query,
		} = options;

		let mut input = QueryInput::new("");
		input.set_style(theme.prompt);

		let mut app = Self {
			search: SearchBox::new(debounce),
			input,
			runtime: SearchRuntime::spawn(client),
			labels,
			theme,
			probe: Box::new(UrlProbe),
			fallback_avatar,
			avatars: HashMap::new(),
			list_state: ListState::default(),
			throbber_state: ThrobberState::default(),
			hitbox: PopoverHitbox::default(),
			search_areas: None,
			picked: None,
		};
		app.seed_query(initial_query);
		app
	}

	/// Replace the probe deciding whether avatars load.
	pub fn set_image_probe(&mut self, probe: Box<dyn ImageProbe>) {
		self.probe = probe;
		self.avatars.clear();
		self.refresh_avatars();
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.input.set_style(theme.prompt);
	}

	/// Underlying search state.
	#[must_use]
	pub fn search(&self) -> &SearchBox {
		&self.search
	}

	/// Text currently shown in the input.
	#[must_use]
	pub fn query(&self) -> &str {
		self.input.text()
	}

	/// Feed `event` to the search box and carry out its effects.
	pub fn apply(&mut self, event: SearchEvent) {
		for effect in self.search.dispatch(event) {
			match effect {
				SearchEffect::Fetch { id, query } => self.runtime.issue(id, query),
				SearchEffect::FocusInput => self.input.set_focused(true),
			}
		}
		self.sync_input();
		self.refresh_avatars();
		self.ensure_selection();
	}

	/// Let the debounce window advance to `now`.
	pub fn tick(&mut self, now: Instant) {
		self.apply(SearchEvent::Tick(now));
	}

	/// Apply every search answer the worker has sent back so far.
	pub fn pump_search_results(&mut self) {
		while let Ok(result) = self.runtime.try_recv() {
			self.apply(SearchEvent::FetchCompleted {
				id: result.id,
				outcome: result.outcome,
			});
		}
	}

	/// Fallback stage of the avatar shown for `account`.
	#[must_use]
	pub fn avatar_stage(&self, account: &Account) -> ImageStage {
		self.avatars
			.get(&account.id)
			.map_or(ImageStage::Primary, FallbackImage::stage)
	}

	/// Account under the popover cursor, while the popover is shown.
	#[must_use]
	pub fn current_selection(&self) -> Option<&Account> {
		if !self.search.popover_visible() {
			return None;
		}
		self.list_state
			.selected()
			.and_then(|index| self.search.results().get(index))
	}

	fn seed_query(&mut self, query: String) {
		if query.is_empty() || !is_acceptable_query(&query) {
			return;
		}
		self.apply(SearchEvent::InputChanged {
			text: query.clone(),
			at: Instant::now(),
		});
		self.apply(SearchEvent::DebounceElapsed(query));
	}

	fn sync_input(&mut self) {
		if self.input.text() != self.search.raw_query() {
			self.input.set_text(self.search.raw_query());
		}
		if self.input.is_focused() != self.search.is_focused() {
			self.input.set_focused(self.search.is_focused());
		}
	}

	/// Keep one resolved avatar per shown account, reloading it when the
	/// account's image source changed.
	fn refresh_avatars(&mut self) {
		let results = self.search.results();
		self.avatars
			.retain(|id, _| results.iter().any(|account| account.id == *id));

		for account in results {
			if self
				.avatars
				.get(&account.id)
				.is_some_and(|image| image.src() == account.avatar)
			{
				continue;
			}
			let mut image = FallbackImage::new(account.avatar.clone(), self.fallback_avatar.clone());
			image.resolve(self.probe.as_ref());
			self.avatars.insert(account.id, image);
		}
	}

	pub(crate) fn ensure_selection(&mut self) {
		let len = self.search.results().len();
		match self.list_state.selected() {
			_ if len == 0 => self.list_state.select(None),
			Some(index) if index < len => {}
			_ => self.list_state.select(Some(0)),
		}
	}
}
