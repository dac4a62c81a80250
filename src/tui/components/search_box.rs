//! Bordered search input with its loading spinner and clear button.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::search::SearchBox;
use crate::tui::input::QueryInput;
use crate::tui::theme::Theme;

const CLEAR_GLYPH: &str = "✕";
const SEARCH_GLYPH: &str = "⌕";
const INDICATOR_WIDTH: u16 = 2;

/// Everything needed to draw the search box.
pub struct SearchBoxView<'a, 'i> {
	pub input: &'a QueryInput<'i>,
	pub state: &'a SearchBox,
	pub placeholder: &'a str,
	pub throbber: &'a ThrobberState,
	pub theme: &'a Theme,
}

/// Screen regions produced while drawing the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBoxAreas {
	/// Whole bordered box; the popover anchors to it.
	pub frame: Rect,
	/// Text input line.
	pub input: Rect,
	/// Clear button, present only while it is shown.
	pub clear_button: Option<Rect>,
}

/// Draw the search box into `area`.
pub fn render_search_box(
	frame: &mut Frame,
	area: Rect,
	view: SearchBoxView<'_, '_>,
) -> SearchBoxAreas {
	let SearchBoxView {
		input,
		state,
		placeholder,
		throbber,
		theme,
	} = view;

	let block = Block::bordered()
		.border_type(BorderType::Rounded)
		.border_style(theme.border_style(state.is_focused()));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let [text_area, indicator_area, icon_area] = Layout::horizontal([
		Constraint::Min(1),
		Constraint::Length(INDICATOR_WIDTH),
		Constraint::Length(INDICATOR_WIDTH),
	])
	.areas(inner);

	input.render(frame, text_area);
	if input.text().is_empty() && !placeholder.is_empty() {
		let hint: String = placeholder.chars().take(usize::from(text_area.width)).collect();
		frame.render_widget(Paragraph::new(Span::styled(hint, theme.empty_style())), text_area);
	}

	let mut clear_button = None;
	if state.loading_indicator_visible() {
		let spinner = Throbber::default()
			.style(theme.muted)
			.throbber_style(theme.muted);
		let spinner_span = spinner.to_symbol_span(throbber);
		frame.render_widget(Paragraph::new(Line::from(spinner_span)), indicator_area);
	} else if state.clear_button_visible() {
		frame.render_widget(
			Paragraph::new(Span::styled(CLEAR_GLYPH, theme.muted)),
			indicator_area,
		);
		clear_button = Some(indicator_area);
	}

	frame.render_widget(
		Paragraph::new(Span::styled(SEARCH_GLYPH, theme.muted)),
		icon_area,
	);

	SearchBoxAreas {
		frame: area,
		input: text_area,
		clear_button,
	}
}
