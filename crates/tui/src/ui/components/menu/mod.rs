//! Multi-column selection menu with live key highlighting.

pub mod menu_component;
pub mod state;

pub use menu_component::{MENU_COLUMNS, MenuComponent};
pub use state::{MenuState, columns};
