use ratatui::style::{Color, Modifier, Style};

use super::{Theme, ThemeRegistration};

pub const DARK: Theme = Theme {
	logo: Style::new()
		.fg(Color::Rgb(254, 44, 85))
		.add_modifier(Modifier::BOLD),
	border: Style::new().fg(Color::Rgb(70, 70, 78)),
	border_focused: Style::new().fg(Color::Rgb(37, 244, 238)),
	prompt: Style::new().fg(Color::Rgb(235, 235, 235)),
	muted: Style::new().fg(Color::Rgb(128, 128, 136)),
	highlight: Style::new()
		.fg(Color::Rgb(37, 244, 238))
		.add_modifier(Modifier::BOLD),
	row_highlight: Style::new()
		.bg(Color::Rgb(44, 44, 52))
		.add_modifier(Modifier::BOLD),
	verified: Style::new().fg(Color::Rgb(32, 213, 236)),
	error: Style::new().fg(Color::Rgb(255, 99, 99)),
};

pub const LIGHT: Theme = Theme {
	logo: Style::new()
		.fg(Color::Rgb(22, 24, 35))
		.add_modifier(Modifier::BOLD),
	border: Style::new().fg(Color::Rgb(200, 200, 204)),
	border_focused: Style::new().fg(Color::Rgb(254, 44, 85)),
	prompt: Style::new().fg(Color::Rgb(22, 24, 35)),
	muted: Style::new().fg(Color::Rgb(120, 120, 128)),
	highlight: Style::new()
		.fg(Color::Rgb(254, 44, 85))
		.add_modifier(Modifier::BOLD),
	row_highlight: Style::new()
		.bg(Color::Rgb(230, 230, 234))
		.add_modifier(Modifier::BOLD),
	verified: Style::new().fg(Color::Rgb(32, 213, 236)),
	error: Style::new().fg(Color::Rgb(200, 30, 30)),
};

pub(super) static REGISTRATIONS: [ThemeRegistration; 2] = [
	ThemeRegistration {
		name: "dark",
		aliases: &["night", "default"],
		theme: DARK,
	},
	ThemeRegistration {
		name: "light",
		aliases: &["day"],
		theme: LIGHT,
	},
];
