use crate::config::AppConfig;
use crate::shop::connectivity::ConnectivityWatcher;
use crate::shop::controller::ItemListController;
use crate::style_demo::StyleDemoState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Shop,
    StyleDemo,
}

impl Screen {
    pub fn other(self) -> Self {
        match self {
            Screen::Shop => Screen::StyleDemo,
            Screen::StyleDemo => Screen::Shop,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Screen::Shop => "SHOP",
            Screen::StyleDemo => "STYLE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopFocus {
    Name,
    Type,
    Price,
    Submit,
    Search,
    List,
}

impl ShopFocus {
    const ORDER: [ShopFocus; 6] = [
        ShopFocus::Name,
        ShopFocus::Type,
        ShopFocus::Price,
        ShopFocus::Submit,
        ShopFocus::Search,
        ShopFocus::List,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn is_form_field(self) -> bool {
        matches!(self, ShopFocus::Name | ShopFocus::Type | ShopFocus::Price)
    }
}

#[derive(Debug)]
pub struct ShopState {
    pub items: ItemListController,
    pub connectivity: ConnectivityWatcher,
    pub focus: ShopFocus,
    /// Row in the filtered list, not an index into the collection.
    pub selected: usize,
    pub loading: bool,
    /// Blocking notice; swallows input until dismissed.
    pub alert: Option<String>,
}

impl ShopState {
    pub fn new(items: ItemListController) -> Self {
        Self {
            items,
            connectivity: ConnectivityWatcher::new(),
            focus: ShopFocus::Name,
            selected: 0,
            loading: false,
            alert: None,
        }
    }

    pub fn is_online(&self) -> bool {
        self.connectivity.is_connected()
    }

    /// Collection index of the selected row, if any row is selected.
    pub fn selected_index(&self) -> Option<usize> {
        self.items.visible().get(self.selected).map(|(i, _)| *i)
    }

    pub fn clamp_selection(&mut self) {
        let len = self.items.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn select_next(&mut self) {
        let len = self.items.visible().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub screen: Screen,
    pub shop: ShopState,
    pub demo: StyleDemoState,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let items = ItemListController::new(config.behavior.offline_policy);
        Self {
            config,
            screen: Screen::Shop,
            shop: ShopState::new(items),
            demo: StyleDemoState::new(),
            should_quit: false,
            dirty: true,
            status_message: None,
            tick_count: 0,
        }
    }

    /// Make `screen` current. Entering the shop starts a load, so the list
    /// shows the loading indicator until the storage worker answers.
    pub fn enter_screen(&mut self, screen: Screen) {
        self.screen = screen;
        if screen == Screen::Shop {
            self.shop.loading = true;
        }
        self.status_message = None;
        self.dirty = true;
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        match self.screen {
            Screen::Shop => {
                let total = self.shop.items.collection().len();
                let shown = self.shop.items.visible().len();
                if shown == total {
                    format!("Items: {}", total)
                } else {
                    format!("Items: {}/{}", shown, total)
                }
            }
            Screen::StyleDemo => format!(
                "Presses: {} | Applied: {}",
                self.demo.presses, self.demo.fired
            ),
        }
    }
}
