use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.shop.focus == ShopFocus::List;
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(if focused {
            Style::default().fg(Theme::ONLINE)
        } else {
            Theme::border()
        });

    if state.shop.loading {
        let frame_idx = (state.tick_count / 3) as usize % SPINNER_FRAMES.len();
        let spinner = Paragraph::new(Line::from(vec![
            Span::styled(SPINNER_FRAMES[frame_idx], Style::default().fg(Theme::SPINNER)),
            Span::raw(" Loading..."),
        ]))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(spinner, area);
        return;
    }

    let visible = state.shop.items.visible();
    if visible.is_empty() {
        let msg = if state.shop.items.collection().is_empty() {
            "No furniture yet"
        } else {
            "No matches"
        };
        let empty = Paragraph::new(Span::styled(msg, Theme::hint()))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let editing = state.shop.items.editing();
    let items: Vec<ListItem> = visible
        .iter()
        .map(|(index, item)| {
            let marker = if editing == Some(*index) { "✎ " } else { "  " };
            let lines = vec![
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(Theme::EDIT_ACCENT)),
                    Span::styled(format!("Name: {}", item.name), Theme::item_text()),
                ]),
                Line::from(Span::styled(format!("  Type: {}", item.kind), Theme::item_text())),
                Line::from(vec![
                    Span::styled(format!("  Price: {}", item.price), Theme::item_text()),
                    Span::raw("   "),
                    Span::styled("[e] Edit", Style::default().fg(Theme::EDIT_ACCENT)),
                    Span::raw(" "),
                    Span::styled("[d] Delete", Style::default().fg(Theme::DELETE_ACCENT)),
                ]),
                Line::raw(""),
            ];
            ListItem::new(lines)
        })
        .collect();

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.shop.selected));
    }
    let list = List::new(items)
        .block(block)
        .highlight_style(Theme::item_selected());
    frame.render_stateful_widget(list, area, &mut list_state);
}
