//! Core-Domänentypen: Shapes, Registry, Viewport, Pick-Buffer.

pub mod color;
pub mod pick;
pub mod registry;
/// Shape-Primitiven der Szene
///
/// Dieses Modul definiert die zeichen- und selektierbaren Grundformen:
/// - Shape: Position, Füll-/Highlight-Farbe, Selektions-Flag
/// - ShapeGeometry: geschlossene Varianten Kreis und Linie
pub mod shape;
pub mod viewport;

pub use color::Color;
pub use pick::{PickBuffer, PickHit, DEFAULT_PICK_CAPACITY, MAX_PICK_CAPACITY};
pub use registry::ShapeRegistry;
pub use shape::{Shape, ShapeGeometry, ShapeKind};
pub use viewport::Viewport;
