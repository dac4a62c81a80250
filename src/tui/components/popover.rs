//! Floating result list anchored below the search box.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::{Block, BorderType, Clear, List, ListItem, ListState};

use crate::tui::theme::Theme;

/// Rows shown before the list starts scrolling.
pub const MAX_VISIBLE_ROWS: u16 = 8;

const BORDER_ROWS: u16 = 2;

/// Place a popover of `content_rows` rows directly below `anchor`,
/// left-aligned with it and clamped inside `bounds`.
#[must_use]
pub fn place(anchor: Rect, bounds: Rect, content_rows: u16) -> Rect {
	let width = anchor.width.min(bounds.width);
	let max_x = bounds.right().saturating_sub(width);
	let x = anchor.x.clamp(bounds.x, max_x.max(bounds.x));
	let y = anchor.bottom().clamp(bounds.y, bounds.bottom());
	let wanted = content_rows.min(MAX_VISIBLE_ROWS).saturating_add(BORDER_ROWS);
	let height = wanted.min(bounds.bottom().saturating_sub(y));
	Rect::new(x, y, width, height)
}

/// Screen regions of the anchor and the popover, used to classify clicks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopoverHitbox {
	pub anchor: Option<Rect>,
	pub popover: Option<Rect>,
}

impl PopoverHitbox {
	/// A click lands outside when it hits neither the anchor nor the popover.
	#[must_use]
	pub fn is_outside(&self, column: u16, row: u16) -> bool {
		let position = Position::new(column, row);
		let inside = |area: Option<Rect>| area.is_some_and(|area| area.contains(position));
		!inside(self.anchor) && !inside(self.popover)
	}

	/// Index of the popover row under the pointer, if any.
	#[must_use]
	pub fn row_at(&self, column: u16, row: u16, offset: usize) -> Option<usize> {
		let area = self.popover?;
		let inner = Block::bordered().inner(area);
		if !inner.contains(Position::new(column, row)) {
			return None;
		}
		Some(offset + usize::from(row - inner.y))
	}
}

/// Draw the popover with `items` into `area`, clearing what is underneath.
pub fn render_popover(
	frame: &mut Frame,
	area: Rect,
	title: &str,
	items: Vec<ListItem<'static>>,
	state: &mut ListState,
	theme: &Theme,
) {
	if area.height <= BORDER_ROWS || area.width <= 2 {
		return;
	}

	let block = Block::bordered()
		.border_type(BorderType::Rounded)
		.border_style(theme.border)
		.title(format!(" {title} "))
		.title_style(theme.muted);
	let list = List::new(items)
		.block(block)
		.highlight_style(theme.row_highlight);

	frame.render_widget(Clear, area);
	frame.render_stateful_widget(list, area, state);
}
