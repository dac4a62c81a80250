use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, ListItem, Padding, Paragraph, Wrap};

use super::App;
use crate::tui::components::popover::place;
use crate::tui::components::{
	HEADER_HEIGHT, PopoverHitbox, SIDEBAR_WIDTH, SearchBoxView, account_line, render_header,
	render_popover, render_sidebar,
};

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let [header_area, body] =
			Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(1)]).areas(area);

		let view = SearchBoxView {
			input: &self.input,
			state: &self.search,
			placeholder: &self.labels.placeholder,
			throbber: &self.throbber_state,
			theme: &self.theme,
		};
		let search_areas = render_header(frame, header_area, &self.labels, &self.theme, view);
		self.search_areas = Some(search_areas);

		let [sidebar_area, content_area] =
			Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)]).areas(body);
		render_sidebar(frame, sidebar_area, &self.labels.sidebar_label, &self.theme);
		self.render_content(frame, content_area);

		self.hitbox = PopoverHitbox {
			anchor: Some(search_areas.frame),
			popover: None,
		};
		if self.search.popover_visible() {
			let rows = u16::try_from(self.search.results().len()).unwrap_or(u16::MAX);
			let popover_area = place(search_areas.frame, area, rows);
			self.render_results(frame, popover_area);
			self.hitbox.popover = Some(popover_area);
		}
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		let width = usize::from(area.width.saturating_sub(2));
		let query = self.search.debounced_query();
		let items: Vec<ListItem<'static>> = self
			.search
			.results()
			.iter()
			.map(|account| {
				ListItem::new(account_line(
					account,
					self.avatar_stage(account),
					query,
					&self.theme,
					width,
				))
			})
			.collect();

		render_popover(
			frame,
			area,
			&self.labels.popover_title,
			items,
			&mut self.list_state,
			&self.theme,
		);
	}

	fn render_content(&self, frame: &mut Frame, area: Rect) {
		let block = Block::default()
			.borders(Borders::TOP)
			.border_style(self.theme.border)
			.padding(Padding::horizontal(1));

		let mut lines = match &self.picked {
			Some(account) => {
				let mut name = vec![Span::styled(
					account.label().to_string(),
					self.theme.prompt.add_modifier(Modifier::BOLD),
				)];
				if account.verified {
					name.push(Span::styled(" ✔", self.theme.verified));
				}
				vec![
					Line::from(name),
					Line::from(Span::styled(format!("@{}", account.username), self.theme.muted)),
					Line::from(Span::styled(
						format!(
							"{} followers · {} likes",
							account.followers_count, account.likes_count
						),
						self.theme.muted,
					)),
				]
			}
			None => vec![Line::from(Span::styled(
				self.labels.content_hint.clone(),
				self.theme.empty_style(),
			))],
		};

		if let Some(error) = self.search.last_error() {
			lines.push(Line::default());
			lines.push(Line::from(Span::styled(
				format!("Search failed: {error}"),
				self.theme.error,
			)));
		}

		frame.render_widget(
			Paragraph::new(lines)
				.block(block)
				.wrap(Wrap { trim: true }),
			area,
		);
	}
}
