use crate::app::state::Screen;
use crate::shop::model::FurnitureCollection;

/// Side effects requested by the handler, carried out by the event loop.
#[derive(Debug, PartialEq)]
pub enum Action {
    /// Overwrite the persisted snapshot.
    Persist(FurnitureCollection),
    /// Read the persisted snapshot back into the list.
    Reload,
    /// Unmount the current screen's resources and mount `Screen`'s.
    SwitchScreen(Screen),
    /// Restart the style demo's debounce countdown.
    ScheduleStyleChange { press: u32 },
    Quit,
}
