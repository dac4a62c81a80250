//! One account row: avatar, name, verified badge and username.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::account::Account;
use crate::image::ImageStage;
use crate::tui::theme::Theme;

const VERIFIED_MARK: &str = "✔";

/// Glyph standing in for the avatar at each fallback stage.
#[must_use]
pub fn avatar_glyph(stage: ImageStage) -> &'static str {
	match stage {
		ImageStage::Primary => "◉",
		ImageStage::Fallback => "◌",
		ImageStage::Broken => "✕",
	}
}

/// Build the row for `account`, highlighting `query` inside the display name
/// and cutting the line to `width` columns.
#[must_use]
pub fn account_line(
	account: &Account,
	avatar: ImageStage,
	query: &str,
	theme: &Theme,
	width: usize,
) -> Line<'static> {
	let avatar_style = match avatar {
		ImageStage::Broken => theme.error,
		_ => Style::new().fg(theme.accent()),
	};

	let mut spans = vec![Span::styled(format!("{} ", avatar_glyph(avatar)), avatar_style)];
	spans.extend(name_spans(account.label(), query, theme));
	if account.verified {
		spans.push(Span::styled(format!(" {VERIFIED_MARK}"), theme.verified));
	}
	spans.push(Span::styled(format!(" @{}", account.username), theme.muted));

	Line::from(fit_spans(spans, width))
}

fn name_spans(name: &str, query: &str, theme: &Theme) -> Vec<Span<'static>> {
	let base = theme.prompt.add_modifier(ratatui::style::Modifier::BOLD);
	match match_range(name, query) {
		Some((start, end)) => [
			Span::styled(name[..start].to_string(), base),
			Span::styled(name[start..end].to_string(), theme.highlight),
			Span::styled(name[end..].to_string(), base),
		]
		.into_iter()
		.filter(|span| !span.content.is_empty())
		.collect(),
		None => vec![Span::styled(name.to_string(), base)],
	}
}

/// Byte range of the first case-insensitive occurrence of `query` in `text`.
pub(crate) fn match_range(text: &str, query: &str) -> Option<(usize, usize)> {
	let needle: Vec<char> = query.trim().chars().collect();
	let chars: Vec<(usize, char)> = text.char_indices().collect();
	if needle.is_empty() || needle.len() > chars.len() {
		return None;
	}

	(0..=chars.len() - needle.len()).find_map(|start| {
		let window = &chars[start..start + needle.len()];
		let hit = window
			.iter()
			.zip(&needle)
			.all(|((_, have), want)| have.to_lowercase().eq(want.to_lowercase()));
		hit.then(|| {
			let (last_index, last_char) = window[window.len() - 1];
			(window[0].0, last_index + last_char.len_utf8())
		})
	})
}

fn fit_spans(spans: Vec<Span<'static>>, width: usize) -> Vec<Span<'static>> {
	let mut remaining = width;
	let mut fitted = Vec::with_capacity(spans.len());
	for span in spans {
		if remaining == 0 {
			break;
		}
		let span_width = span.content.width();
		if span_width <= remaining {
			remaining -= span_width;
			fitted.push(span);
			continue;
		}
		let (cut, _) = span.content.unicode_truncate(remaining);
		fitted.push(Span::styled(cut.to_string(), span.style));
		break;
	}
	fitted
}
