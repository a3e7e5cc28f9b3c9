//! Handler für Klick-Interaktion und Selektion.

use glam::Vec2;

use crate::app::AppState;
use crate::render::RenderBackend;

/// Reicht einen Klick an die Szene durch (Hit-Test + Modus-Dispatch).
pub fn register_click(
    state: &mut AppState,
    backend: &mut dyn RenderBackend,
    window_pos: Vec2,
) -> anyhow::Result<()> {
    // Snapshot VOR Mutation: der aktive Modus darf Registry und
    // Selektion verändern
    state.record_undo_snapshot();
    state.scene.register_click(backend, window_pos)
}

/// Hebt die komplette Selektion auf.
pub fn clear(state: &mut AppState) {
    state.scene.reset_highlighting();
    log::debug!("Selektion aufgehoben");
}
