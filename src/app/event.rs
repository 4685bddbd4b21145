use crate::shop::model::FurnitureCollection;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Reachability reading from the connectivity subscription
    Reachability { is_connected: bool },

    /// Storage worker finished a load. `None` means it failed and was logged.
    CollectionLoaded(Option<FurnitureCollection>),

    /// Debounced style change elapsed
    StyleChangeDue { press: u32 },

    /// Tick for UI refresh
    Tick,
}
