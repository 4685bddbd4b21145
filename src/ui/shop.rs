use crate::app::state::*;
use crate::style_demo::FieldStyle;
use crate::ui::theme::Theme;
use crate::ui::{item_list, layout, status_bar, text_field};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, state: &AppState) {
    let shop = &state.shop;
    let online = shop.is_online();
    let l = layout::compute_shop_layout(frame.area());

    let title = Line::from(vec![
        Span::styled("Furniture ", Theme::title()),
        Span::styled(
            "Shop",
            Theme::title().fg(Theme::connectivity(online)),
        ),
    ]);
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), l.title);

    let draft = &shop.items.draft;
    let fields = [
        (l.name, &draft.name, "Furniture Name", ShopFocus::Name),
        (l.kind, &draft.kind, "Furniture Type", ShopFocus::Type),
        (l.price, &draft.price, "Furniture Price", ShopFocus::Price),
    ];
    for (area, field, placeholder, focus) in fields {
        let focused = shop.focus == focus;
        text_field::render(frame, area, field, placeholder, field_style(focused), focused);
    }

    let label = if shop.items.editing().is_some() {
        "Update Furniture"
    } else {
        "Add Furniture"
    };
    let button = Paragraph::new(format!(" {} ", label))
        .alignment(Alignment::Center)
        .style(Theme::button(
            Theme::connectivity(online),
            shop.focus == ShopFocus::Submit,
        ));
    frame.render_widget(button, l.submit);

    let searching = shop.focus == ShopFocus::Search;
    text_field::render(
        frame,
        l.search,
        &shop.items.search,
        "Search Furniture...",
        field_style(searching),
        searching,
    );

    frame.render_widget(
        Paragraph::new(Span::styled("Furniture List:", Theme::heading())),
        l.list_title,
    );
    item_list::render(frame, l.list, state);
    status_bar::render(frame, l.status_bar, state);
}

fn field_style(focused: bool) -> FieldStyle {
    if focused {
        FieldStyle::focused()
    } else {
        FieldStyle::unfocused()
    }
}
