use crate::app::state::AppState;
use crate::style_demo::DemoFocus;
use crate::ui::theme::Theme;
use crate::ui::{layout, status_bar, text_field};
use ratatui::prelude::*;
use ratatui::style::Color;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, state: &AppState) {
    let demo = &state.demo;
    let l = layout::compute_demo_layout(frame.area(), demo.style.height);

    frame.render_widget(
        Paragraph::new(Span::styled("Style Editor", Theme::title())).alignment(Alignment::Center),
        l.title,
    );

    text_field::render(
        frame,
        l.field,
        &demo.field,
        "enter here",
        demo.style,
        demo.focus == DemoFocus::Field,
    );

    let button = Paragraph::new(" Change Style ")
        .alignment(Alignment::Center)
        .style(Theme::button(Color::Blue, demo.focus == DemoFocus::Button));
    frame.render_widget(button, l.button);

    let info = Paragraph::new(Line::from(Span::styled(
        format!(
            "The style changes {} ms after the last press.",
            state.config.demo.debounce_ms
        ),
        Theme::hint(),
    )));
    frame.render_widget(info, l.info);

    status_bar::render(frame, l.status_bar, state);
}
