//! State for the style editor demo screen.
//!
//! The field's look is plain data in [`FieldStyle`]; the renderer reads it
//! on every frame, so changing the style is an ordinary state update.

use crate::app::input::TextField;
use ratatui::style::Color;

pub const EDITED_TEXT: &str = "Hello world!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldStyle {
    pub border_color: Color,
    pub thick_border: bool,
    pub rounded: bool,
    pub padding: u16,
    /// Total rows, borders included.
    pub height: u16,
    pub bold_text: bool,
}

impl FieldStyle {
    pub fn initial() -> Self {
        Self {
            border_color: Color::Red,
            thick_border: false,
            rounded: false,
            padding: 1,
            height: 3,
            bold_text: false,
        }
    }

    pub fn edited() -> Self {
        Self {
            border_color: Color::Green,
            thick_border: true,
            rounded: true,
            padding: 2,
            height: 5,
            bold_text: true,
        }
    }

    /// Look of a shop form field while it has focus.
    pub fn focused() -> Self {
        Self {
            border_color: Color::Green,
            thick_border: false,
            rounded: true,
            padding: 2,
            height: 3,
            bold_text: false,
        }
    }

    pub fn unfocused() -> Self {
        Self {
            border_color: Color::Gray,
            thick_border: false,
            rounded: false,
            padding: 1,
            height: 3,
            bold_text: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoFocus {
    Field,
    Button,
}

#[derive(Debug)]
pub struct StyleDemoState {
    pub field: TextField,
    pub style: FieldStyle,
    pub focus: DemoFocus,
    pub presses: u32,
    pub fired: u32,
}

impl StyleDemoState {
    pub fn new() -> Self {
        Self {
            field: TextField::new(),
            style: FieldStyle::initial(),
            focus: DemoFocus::Field,
            presses: 0,
            fired: 0,
        }
    }

    /// Count a button press and return its sequence number.
    pub fn press(&mut self) -> u32 {
        self.presses += 1;
        self.presses
    }

    /// Overwrite the field with the edited content and look. Applying it
    /// again leaves the same state.
    pub fn apply_edit(&mut self) {
        self.field.set(EDITED_TEXT);
        self.style = FieldStyle::edited();
        self.fired += 1;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            DemoFocus::Field => DemoFocus::Button,
            DemoFocus::Button => DemoFocus::Field,
        };
    }
}

impl Default for StyleDemoState {
    fn default() -> Self {
        Self::new()
    }
}
