//! Color schemes for the terminal UI.
//!
//! A [`Theme`] is handed to the application at construction; nothing looks
//! styles up globally.

mod builtins;

use ratatui::style::{Color, Style};

pub use builtins::{DARK, LIGHT};

/// Styles for every element the interface draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Logo in the header.
	pub logo: Style,
	/// Borders of unfocused panels.
	pub border: Style,
	/// Border of the search box while it has focus.
	pub border_focused: Style,
	/// Text typed into the search box.
	pub prompt: Style,
	/// Placeholders, usernames and other secondary text.
	pub muted: Style,
	/// Query fragments matched inside account names.
	pub highlight: Style,
	/// Selected popover row.
	pub row_highlight: Style,
	/// Verified badge.
	pub verified: Style,
	/// Failure messages.
	pub error: Style,
}

impl Theme {
	/// Style for empty states and placeholders.
	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.muted
	}

	/// Border style depending on focus.
	#[must_use]
	pub fn border_style(&self, focused: bool) -> Style {
		if focused {
			self.border_focused
		} else {
			self.border
		}
	}

	/// Foreground color of the logo, used for accents.
	#[must_use]
	pub fn accent(&self) -> Color {
		self.logo.fg.unwrap_or(Color::Reset)
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// A named built-in theme.
#[derive(Debug, Clone, Copy)]
pub struct ThemeRegistration {
	pub name: &'static str,
	pub aliases: &'static [&'static str],
	pub theme: Theme,
}

impl ThemeRegistration {
	fn matches(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> &'static [ThemeRegistration] {
	&builtins::REGISTRATIONS
}

/// The theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
	DARK
}

/// Look up a theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	builtin_themes()
		.iter()
		.find(|registration| registration.matches(name.trim()))
		.map(|registration| registration.theme)
}

/// Names of all built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	builtin_themes()
		.iter()
		.map(|registration| registration.name)
		.collect()
}
