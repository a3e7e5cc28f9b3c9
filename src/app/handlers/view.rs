//! Handler für Viewport und Rendering.

use glam::Vec2;

use crate::app::AppState;
use crate::render::RenderBackend;

/// Übernimmt eine neue Viewport-Größe.
pub fn set_viewport_size(state: &mut AppState, backend: &mut dyn RenderBackend, size: [f32; 2]) {
    state.scene.resize(backend, Vec2::new(size[0], size[1]));
}

/// Zeichnet die Szene in Registry-Reihenfolge.
pub fn render(state: &AppState, backend: &mut dyn RenderBackend) {
    state.scene.render(backend);
}
