//! Geteilte Typen für layer-übergreifende Verträge.

pub mod options;

pub use options::EditorOptions;
pub use options::{NODE_RADIUS_SCENE, PICK_WINDOW_PX};
