//! Handler für Shape-Editing und Moduswechsel.

use glam::Vec2;

use crate::app::AppState;
use crate::core::ShapeKind;
use crate::render::RenderBackend;
use crate::scene::ModeKind;

/// Legt ein Shape an einer Fensterposition an (mit Overlap-Unterdrückung).
pub fn add_shape(
    state: &mut AppState,
    backend: &mut dyn RenderBackend,
    kind: ShapeKind,
    window_pos: Vec2,
) -> anyhow::Result<()> {
    // Snapshot VOR Mutation
    state.record_undo_snapshot();
    state.scene.add_shape(backend, kind, window_pos)?;
    Ok(())
}

/// Aktiviert einen Interaktionsmodus; hebt jede Hervorhebung auf.
pub fn set_mode(state: &mut AppState, mode: ModeKind) {
    state.scene.set_active_mode(mode);
}

/// Löscht alle aktuell selektierten Shapes (inklusive abhängiger Kanten).
pub fn delete_selected(state: &mut AppState) {
    let ids: Vec<u64> = state.scene.selected().iter().copied().collect();
    if ids.is_empty() {
        return;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let mut removed = 0;
    for id in ids {
        if state.scene.remove_shape(id).is_some() {
            removed += 1;
        }
    }
    log::info!("{} selektierte Shapes gelöscht", removed);
}
