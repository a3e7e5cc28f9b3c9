//! Graph-Canvas-Editor Library.
//! Scene/Mode/Picking-Kern als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod scene;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, CommandLog, EditHistory};
pub use core::{
    Color, PickBuffer, PickHit, Shape, ShapeGeometry, ShapeKind, ShapeRegistry, Viewport,
};
pub use render::{PickOutcome, RenderBackend, SoftwareBackend};
pub use scene::{EdgeCreationMode, ModeKind, NodeCreationMode, Scene, ViewMode};
pub use shared::EditorOptions;
