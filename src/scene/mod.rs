//! Szenen-Schicht: Scene-Orchestrierung und Interaktionsmodi.

pub mod modes;
mod scene;

pub use modes::{EdgeCreationMode, ModeContext, ModeKind, ModeSet, NodeCreationMode, ViewMode};
pub use scene::Scene;
