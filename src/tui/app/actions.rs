use std::time::Instant;

use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::App;
use crate::outcome::SearchOutcome;
use crate::search::{SearchEvent, is_acceptable_query};

impl<'a> App<'a> {
	/// Process a keyboard event and return an outcome if the session ends.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return Some(self.cancel());
		}
		if self.search.is_focused() {
			self.handle_focused_key(key)
		} else {
			self.handle_page_key(key)
		}
	}

	fn handle_page_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => return Some(self.cancel()),
			KeyCode::Char('/' | 'i') => self.apply(SearchEvent::Focus),
			KeyCode::Enter => return self.accept(),
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ => {}
		}
		None
	}

	fn handle_focused_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
		match key.code {
			KeyCode::Esc => self.apply(SearchEvent::OutsideClick),
			KeyCode::Enter => return self.accept(),
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.apply(SearchEvent::ClearClicked);
			}
			_ => {
				if let Some(text) = self.input.input_filtered(key, is_acceptable_query) {
					self.apply(SearchEvent::InputChanged {
						text,
						at: Instant::now(),
					});
				}
			}
		}
		None
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		let (column, row) = (mouse.column, mouse.row);
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => self.click(column, row),
			MouseEventKind::ScrollUp if self.over_popover(column, row) => {
				self.move_selection_up();
			}
			MouseEventKind::ScrollDown if self.over_popover(column, row) => {
				self.move_selection_down();
			}
			_ => {}
		}
	}

	fn click(&mut self, column: u16, row: u16) {
		let position = Position::new(column, row);
		let areas = self.search_areas;

		if let Some(button) = areas.and_then(|areas| areas.clear_button)
			&& button.contains(position)
		{
			self.apply(SearchEvent::ClearClicked);
			return;
		}

		if self.search.popover_visible()
			&& let Some(index) = self.hitbox.row_at(column, row, self.list_state.offset())
		{
			if let Some(account) = self.search.results().get(index) {
				self.picked = Some(account.clone());
				self.list_state.select(Some(index));
			}
			return;
		}

		if areas.is_some_and(|areas| areas.frame.contains(position)) {
			self.apply(SearchEvent::Focus);
		} else if self.hitbox.is_outside(column, row) {
			self.apply(SearchEvent::OutsideClick);
		}
	}

	fn over_popover(&self, column: u16, row: u16) -> bool {
		self.search.popover_visible()
			&& self
				.hitbox
				.popover
				.is_some_and(|area| area.contains(Position::new(column, row)))
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.list_state.selected()
			&& selected > 0
		{
			self.list_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.list_state.selected()
			&& selected + 1 < self.search.results().len()
		{
			self.list_state.select(Some(selected + 1));
		}
	}

	fn accept(&self) -> Option<SearchOutcome> {
		let account = self.current_selection()?.clone();
		Some(SearchOutcome::accepted(self.input.text(), account))
	}

	fn cancel(&self) -> SearchOutcome {
		SearchOutcome::cancelled(self.input.text())
	}
}
