use crate::app::input::TextField;
use crate::style_demo::FieldStyle;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn border_type(style: &FieldStyle) -> BorderType {
    match (style.thick_border, style.rounded) {
        (true, _) => BorderType::Thick,
        (false, true) => BorderType::Rounded,
        (false, false) => Theme::border_type(),
    }
}

/// Draw a bordered single-line input. The terminal cursor is placed in the
/// field when `focused`.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    field: &TextField,
    placeholder: &str,
    style: FieldStyle,
    focused: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type(&style))
        .border_style(Style::default().fg(style.border_color))
        .padding(Padding::horizontal(style.padding));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Vertically centre the text in tall fields
    let line_area = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);

    let content = if field.as_str().is_empty() {
        Line::from(Span::styled(placeholder, Theme::placeholder()))
    } else {
        let mut text_style = Theme::input_text();
        if style.bold_text {
            text_style = text_style.add_modifier(Modifier::BOLD);
        }
        Line::from(Span::styled(field.as_str(), text_style))
    };
    frame.render_widget(Paragraph::new(content), line_area);

    if focused {
        let cursor_x = line_area.x.saturating_add(field.display_cursor());
        frame.set_cursor_position((cursor_x.min(line_area.right().saturating_sub(1)), line_area.y));
    }
}
