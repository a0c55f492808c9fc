//! The structured positional prompt: several named fields typed on one line.

pub mod render_state;
pub mod section_component;
pub mod state;
pub mod suggestion_engine;

pub use render_state::{DetailBody, DetailOption, DetailPanel, FieldStatus, OptionStyle, SummaryLabel};
pub use section_component::SectionComponent;
pub use state::SectionPromptState;
pub use suggestion_engine::{accept_suggestion, suggest};
