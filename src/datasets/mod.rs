//! Built-in dataset builders.

/// Palmer penguins measurements dataset.
pub mod penguins;

pub use penguins::Penguins;
