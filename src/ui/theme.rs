use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ONLINE: Color = Color::Green;
    pub const OFFLINE: Color = Color::Red;
    pub const EDIT_ACCENT: Color = Color::Yellow;
    pub const DELETE_ACCENT: Color = Color::LightRed;
    pub const SPINNER: Color = Color::Blue;

    pub fn connectivity(online: bool) -> Color {
        if online {
            Self::ONLINE
        } else {
            Self::OFFLINE
        }
    }

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn item_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn item_selected() -> Style {
        Style::default().bg(Color::Rgb(40, 44, 52))
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn button(bg: Color, focused: bool) -> Style {
        let style = Style::default().fg(Color::White).bg(bg).add_modifier(Modifier::BOLD);
        if focused {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn alert_border() -> Style {
        Style::default().fg(Color::Yellow)
    }
}
