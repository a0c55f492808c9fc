//! UI components: section prompt, selection menu and shared input state.

pub mod common;
pub mod component;
pub mod menu;
pub mod section;

pub use component::Effect;
pub use menu::{MenuComponent, MenuState};
pub use section::{SectionComponent, SectionPromptState};
