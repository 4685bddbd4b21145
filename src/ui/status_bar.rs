use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Connectivity
    let online = state.shop.is_online();
    parts.push(Span::styled(
        if online { " ● online " } else { " ○ offline " },
        Style::default()
            .fg(Theme::connectivity(online))
            .bg(Color::DarkGray),
    ));

    // Status text
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let hints = match state.screen {
        Screen::Shop if state.shop.focus.is_form_field() => {
            "Tab focus  Enter save  Esc cancel  F2 style  ^C quit"
        }
        Screen::Shop => "Tab focus  e edit  d delete  Esc cancel  F2 style  ^C quit",
        Screen::StyleDemo => "Tab focus  Enter press  F2 shop  ^C quit",
    };
    let screen_name = state.screen.label();

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let tail = format!(" {} [{}] ", hints, screen_name);
    let remaining = (area.width as usize).saturating_sub(used + tail.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        tail,
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
