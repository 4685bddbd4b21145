use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct ShopLayout {
    pub title: Rect,
    pub name: Rect,
    pub kind: Rect,
    pub price: Rect,
    pub submit: Rect,
    pub search: Rect,
    pub list_title: Rect,
    pub list: Rect,
    pub status_bar: Rect,
}

pub struct DemoLayout {
    pub title: Rect,
    pub field: Rect,
    pub button: Rect,
    pub info: Rect,
    pub status_bar: Rect,
}

/// Split off the one-row status bar at the bottom and pad the rest.
fn split_status(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    let content = Layout::default()
        .direction(Direction::Horizontal)
        .horizontal_margin(2)
        .constraints([Constraint::Min(20)])
        .split(chunks[0])[0];
    (content, chunks[1])
}

pub fn compute_shop_layout(area: Rect) -> ShopLayout {
    let (content, status_bar) = split_status(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Name
            Constraint::Length(3), // Type
            Constraint::Length(3), // Price
            Constraint::Length(1), // Submit button
            Constraint::Length(1), // Gap
            Constraint::Length(3), // Search
            Constraint::Length(1), // List title
            Constraint::Min(3),    // List
        ])
        .split(content);

    ShopLayout {
        title: chunks[0],
        name: chunks[1],
        kind: chunks[2],
        price: chunks[3],
        submit: chunks[4],
        search: chunks[6],
        list_title: chunks[7],
        list: chunks[8],
        status_bar,
    }
}

pub fn compute_demo_layout(area: Rect, field_height: u16) -> DemoLayout {
    let (content, status_bar) = split_status(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Title
            Constraint::Length(field_height), // Field
            Constraint::Length(1),            // Gap
            Constraint::Length(1),            // Button
            Constraint::Min(1),               // Info
        ])
        .split(content);

    DemoLayout {
        title: chunks[0],
        field: chunks[1],
        button: chunks[3],
        info: chunks[4],
        status_bar,
    }
}
