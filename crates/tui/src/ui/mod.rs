//! Terminal UI: components and the inline runtime that drives them.

pub mod components;
pub(crate) mod runtime;
