//! Single-line text input backing the search box.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Thin wrapper over [`TextArea`] that keeps the text on one line and lets
/// the caller veto edits before they land.
#[derive(Clone)]
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
	style: Style,
	focused: bool,
}

impl<'a> QueryInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
			style: Style::default(),
			focused: false,
		};
		input.set_text(initial);
		input
	}

	/// Current text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Replace the text and move the cursor to its end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let mut textarea = TextArea::new(vec![text.into()]);
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
		self.apply_style();
	}

	/// Apply `key`, keeping the edit only when `accept` approves the
	/// resulting text.
	///
	/// Returns the new text when it changed. Cursor movement is always kept;
	/// edits that would add a line or that `accept` refuses are dropped.
	pub fn input_filtered(&mut self, key: KeyEvent, accept: impl Fn(&str) -> bool) -> Option<String> {
		let mut candidate = self.textarea.clone();
		candidate.input(key);

		let [line] = candidate.lines() else {
			return None;
		};
		if line == self.text() {
			self.textarea = candidate;
			return None;
		}
		if !accept(line.as_str()) {
			return None;
		}

		let text = line.clone();
		self.textarea = candidate;
		Some(text)
	}

	pub fn set_focused(&mut self, focused: bool) {
		self.focused = focused;
		self.apply_style();
	}

	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	/// Style used for the typed text.
	pub fn set_style(&mut self, style: Style) {
		self.style = style;
		self.apply_style();
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}

	fn apply_style(&mut self) {
		self.textarea.set_style(self.style);
		self.textarea.set_cursor_line_style(Style::default());
		let cursor = if self.focused {
			self.style.add_modifier(Modifier::REVERSED)
		} else {
			self.style
		};
		self.textarea.set_cursor_style(cursor);
	}
}
