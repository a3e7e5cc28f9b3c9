//! Handler für Undo/Redo.

use crate::app::history::Snapshot;
use crate::app::AppState;

/// Macht die letzte Aktion rückgängig.
pub fn undo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    if let Some(prev) = state.history.pop_undo_with_current(current) {
        prev.apply_to(state);
        log::info!("Undo ausgeführt");
    } else {
        log::debug!("Undo: keine Einträge");
    }
}

/// Stellt die zuletzt rückgängig gemachte Aktion wieder her.
pub fn redo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    if let Some(next) = state.history.pop_redo_with_current(current) {
        next.apply_to(state);
        log::info!("Redo ausgeführt");
    } else {
        log::debug!("Redo: keine Einträge");
    }
}
