//! Page header: logo, search box and account actions.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::search_box::{SearchBoxAreas, SearchBoxView, render_search_box};
use crate::tui::config::UiLabels;
use crate::tui::theme::Theme;

/// Rows the header occupies.
pub const HEADER_HEIGHT: u16 = 3;

const SEARCH_WIDTH: u16 = 60;
const ACTION_GAP: &str = "  ";

/// Draw the header into `area` and return where the search box landed.
pub fn render_header(
	frame: &mut Frame,
	area: Rect,
	labels: &UiLabels,
	theme: &Theme,
	search: SearchBoxView<'_, '_>,
) -> SearchBoxAreas {
	let logo_width = u16::try_from(labels.logo.width())
		.unwrap_or(u16::MAX)
		.saturating_add(2);
	let actions = labels.actions.join(ACTION_GAP);
	let actions_width = u16::try_from(actions.width())
		.unwrap_or(u16::MAX)
		.saturating_add(1);

	let [logo_area, middle, actions_area] = Layout::horizontal([
		Constraint::Length(logo_width),
		Constraint::Fill(1),
		Constraint::Length(actions_width),
	])
	.areas(area);

	let [_, logo_row, _] = Layout::vertical([
		Constraint::Length(1),
		Constraint::Length(1),
		Constraint::Fill(1),
	])
	.areas(logo_area);
	frame.render_widget(
		Paragraph::new(Span::styled(format!(" {}", labels.logo), theme.logo)),
		logo_row,
	);

	let [_, actions_row, _] = Layout::vertical([
		Constraint::Length(1),
		Constraint::Length(1),
		Constraint::Fill(1),
	])
	.areas(actions_area);
	frame.render_widget(
		Paragraph::new(Line::from(Span::styled(actions, theme.prompt))).alignment(Alignment::Right),
		actions_row,
	);

	let search_width = SEARCH_WIDTH.min(middle.width);
	let [_, search_area, _] = Layout::horizontal([
		Constraint::Fill(1),
		Constraint::Length(search_width),
		Constraint::Fill(1),
	])
	.areas(middle);

	render_search_box(frame, search_area, search)
}
