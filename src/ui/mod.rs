mod alert;
mod item_list;
mod layout;
mod shop;
mod status_bar;
mod style_demo;
mod text_field;
mod theme;

use crate::app::state::{AppState, Screen};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    match state.screen {
        Screen::Shop => {
            shop::render(frame, state);
            alert::render(frame, state);
        }
        Screen::StyleDemo => style_demo::render(frame, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::shop::model::FurnitureItem;
    use ratatui::backend::TestBackend;

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn shop_screen_lists_items() {
        let mut state = AppState::new(AppConfig::default());
        state
            .shop
            .items
            .replace_collection(vec![FurnitureItem::new("Sofa", "Living", "500")]);
        let screen = draw(&state);
        assert!(screen.contains("Furniture Shop"));
        assert!(screen.contains("Add Furniture"));
        assert!(screen.contains("Name: Sofa"));
        assert!(screen.contains("Price: 500"));
        assert!(screen.contains("offline"));
    }

    #[test]
    fn loading_replaces_list() {
        let mut state = AppState::new(AppConfig::default());
        state.shop.loading = true;
        state
            .shop
            .items
            .replace_collection(vec![FurnitureItem::new("Sofa", "Living", "500")]);
        let screen = draw(&state);
        assert!(screen.contains("Loading..."));
        assert!(!screen.contains("Name: Sofa"));
    }

    #[test]
    fn very_long_input_keeps_cursor_inside_field() {
        let mut state = AppState::new(AppConfig::default());
        state.shop.items.draft.name.set("w".repeat(70_000));
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();
        let cursor = terminal.get_cursor_position().unwrap();
        assert!(cursor.x < 80);
    }

    #[test]
    fn alert_is_drawn_over_shop() {
        let mut state = AppState::new(AppConfig::default());
        state.shop.alert = Some("Please enter all furniture details".into());
        assert!(draw(&state).contains("Please enter all furniture details"));
    }

    #[test]
    fn style_screen_shows_edited_text() {
        let mut state = AppState::new(AppConfig::default());
        state.enter_screen(Screen::StyleDemo);
        assert!(draw(&state).contains("enter here"));
        state.demo.apply_edit();
        assert!(draw(&state).contains("Hello world!"));
    }
}
