use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::tui::theme::Theme;

/// Columns reserved for the sidebar.
pub const SIDEBAR_WIDTH: u16 = 24;

/// Draw the sidebar placeholder.
pub fn render_sidebar(frame: &mut Frame, area: Rect, label: &str, theme: &Theme) {
	let block = Block::default()
		.borders(Borders::RIGHT | Borders::TOP)
		.border_style(theme.border)
		.padding(Padding::horizontal(1));
	frame.render_widget(
		Paragraph::new(Span::styled(label.to_string(), theme.prompt)).block(block),
		area,
	);
}
