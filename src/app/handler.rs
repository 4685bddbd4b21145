use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::input::TextField;
use crate::app::state::*;
use crate::shop::connectivity::Transition;
use crate::shop::controller::OfflinePolicy;
use crate::style_demo::DemoFocus;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{info, warn};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Reachability { is_connected } => handle_reachability(state, is_connected),
        AppEvent::CollectionLoaded(loaded) => {
            state.shop.loading = false;
            match loaded {
                Some(items) => state.shop.items.replace_collection(items),
                None => state.set_status("Could not load saved furniture"),
            }
            state.shop.clamp_selection();
            state.dirty = true;
            vec![]
        }
        AppEvent::StyleChangeDue { press } => {
            // Queued before the demo was torn down
            if state.screen != Screen::StyleDemo {
                return vec![];
            }
            state.demo.apply_edit();
            info!(press, "{}", state.config.demo.log_name);
            state.set_status(format!("Style changed (press #{})", press));
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Keep the spinner moving
            if state.shop.loading && state.screen == Screen::Shop {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_reachability(state: &mut AppState, is_connected: bool) -> Vec<Action> {
    let transition = state.shop.connectivity.observe(is_connected);
    if transition == Transition::Unchanged {
        return vec![];
    }
    state.dirty = true;
    // A load already in flight reads the same storage
    if transition.needs_reload() && !state.shop.loading {
        state.shop.loading = true;
        vec![Action::Reload]
    } else {
        vec![]
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // The alert captures all input while visible
    if state.shop.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.shop.alert = None;
        }
        return vec![];
    }

    if key.code == KeyCode::F(2) {
        let next = state.screen.other();
        state.enter_screen(next);
        return vec![Action::SwitchScreen(next)];
    }

    match state.screen {
        Screen::Shop => handle_shop_key(state, key),
        Screen::StyleDemo => handle_demo_key(state, key),
    }
}

fn handle_shop_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Tab => {
            state.shop.focus = state.shop.focus.next();
            return vec![];
        }
        KeyCode::BackTab => {
            state.shop.focus = state.shop.focus.prev();
            return vec![];
        }
        KeyCode::Esc => {
            if state.shop.items.editing().is_some() {
                state.shop.items.cancel_edit();
                state.set_status("Edit cancelled");
            }
            return vec![];
        }
        _ => {}
    }

    match state.shop.focus {
        focus @ (ShopFocus::Name | ShopFocus::Type | ShopFocus::Price) => {
            if key.code == KeyCode::Enter {
                return submit(state);
            }
            let draft = &mut state.shop.items.draft;
            let field = match focus {
                ShopFocus::Name => &mut draft.name,
                ShopFocus::Type => &mut draft.kind,
                _ => &mut draft.price,
            };
            edit_field(field, key);
            vec![]
        }
        ShopFocus::Submit => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => submit(state),
            _ => vec![],
        },
        ShopFocus::Search => {
            if key.code == KeyCode::Enter || key.code == KeyCode::Down {
                state.shop.focus = ShopFocus::List;
                return vec![];
            }
            if edit_field(&mut state.shop.items.search, key) {
                state.shop.selected = 0;
            }
            vec![]
        }
        ShopFocus::List => handle_list_key(state, key),
    }
}

fn handle_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Rows are hidden behind the spinner until the load lands
    if state.shop.loading {
        return vec![];
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.shop.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.shop.select_next();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char('e') => {
            if let Some(index) = state.shop.selected_index() {
                if state.shop.items.edit(index) {
                    state.shop.focus = ShopFocus::Name;
                    state.set_status(format!("Editing item {}", index + 1));
                }
            }
            vec![]
        }
        KeyCode::Delete | KeyCode::Char('d') => {
            let Some(index) = state.shop.selected_index() else {
                return vec![];
            };
            let snapshot = state.shop.items.delete(index);
            state.shop.clamp_selection();
            state.set_status("Deleted");
            vec![Action::Persist(snapshot)]
        }
        _ => vec![],
    }
}

fn submit(state: &mut AppState) -> Vec<Action> {
    if state.shop.loading {
        state.set_status("Still loading furniture");
        return vec![];
    }
    let updating = state.shop.items.editing().is_some();
    let online = state.shop.is_online();
    match state.shop.items.add_or_update(online) {
        Ok(snapshot) => {
            state.shop.focus = ShopFocus::Name;
            state.shop.clamp_selection();
            let verb = if updating { "Updated" } else { "Added" };
            if online || state.config.behavior.offline_policy == OfflinePolicy::AlwaysUpdate {
                state.set_status(verb);
            } else {
                state.set_status(format!("{} offline; shown after reconnect", verb));
            }
            vec![Action::Persist(snapshot)]
        }
        Err(e) => {
            warn!("rejected furniture submission: {}", e);
            state.shop.alert = Some(e.to_string());
            vec![]
        }
    }
}

fn handle_demo_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        state.demo.toggle_focus();
        return vec![];
    }
    match state.demo.focus {
        DemoFocus::Field => {
            if key.code == KeyCode::Enter {
                state.demo.focus = DemoFocus::Button;
            } else {
                edit_field(&mut state.demo.field, key);
            }
            vec![]
        }
        DemoFocus::Button => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                let press = state.demo.press();
                vec![Action::ScheduleStyleChange { press }]
            }
            _ => vec![],
        },
    }
}

/// Apply a line-editing key to `field`. Returns whether the text changed.
fn edit_field(field: &mut TextField, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            field.insert_char(c);
            true
        }
        KeyCode::Backspace => {
            field.delete_back();
            true
        }
        KeyCode::Delete => {
            field.delete_forward();
            true
        }
        KeyCode::Left => {
            field.move_left();
            false
        }
        KeyCode::Right => {
            field.move_right();
            false
        }
        KeyCode::Home => {
            field.move_home();
            false
        }
        KeyCode::End => {
            field.move_end();
            false
        }
        _ => false,
    }
}
