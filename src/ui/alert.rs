use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(ref message) = state.shop.alert else {
        return;
    };

    let area = frame.area();

    // Center the popup: 50% width, min 30x5
    let popup_w = (area.width / 2).max(30).min(area.width.saturating_sub(2));
    let popup_h = 5u16.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Alert ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::alert_border());

    let body = Paragraph::new(vec![
        Line::from(message.as_str()),
        Line::from(Span::styled("Enter to dismiss", Theme::hint())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(block);
    frame.render_widget(body, popup_area);
}
