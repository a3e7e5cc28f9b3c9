//! Snapshot-basierte Undo/Redo-History.

use crate::scene::Scene;

/// Snapshot des mutierbaren Editor-Zustands.
///
/// Nutzt die tiefe Wert-Kopie der Szene: der Klon teilt keinerlei Zustand
/// mit dem Original, die Selektions-Menge wird aus den kopierten Shapes
/// neu abgeleitet.
#[derive(Clone)]
pub struct Snapshot {
    /// Tiefe Kopie der Szene zum Zeitpunkt des Snapshots
    pub scene: Scene,
}

impl Snapshot {
    /// Erstellt einen Snapshot des aktuellen Zustands.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            scene: state.scene.clone(),
        }
    }

    /// Stellt den Snapshot wieder her.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.scene = self.scene;
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Nimmt einen vorbereiteten Snapshot auf und leert den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Nimmt den obersten Undo-Snapshot, legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        if let Some(prev) = self.undo_stack.pop() {
            if self.redo_stack.len() >= self.max_depth {
                self.redo_stack.remove(0);
            }
            self.redo_stack.push(current);
            Some(prev)
        } else {
            None
        }
    }

    /// Nimmt den obersten Redo-Snapshot, legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        if let Some(next) = self.redo_stack.pop() {
            if self.undo_stack.len() >= self.max_depth {
                self.undo_stack.remove(0);
            }
            self.undo_stack.push(current);
            Some(next)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use glam::Vec2;

    fn snapshot_with_node_count(count: usize) -> Snapshot {
        let mut state = AppState::new();
        for i in 0..count {
            state.scene.add_node_at(Vec2::new(i as f32 * 0.3, 0.0));
        }
        Snapshot::from_state(&state)
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_enables_undo() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(snapshot_with_node_count(1));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(snapshot_with_node_count(2));

        let current = snapshot_with_node_count(5);
        let restored = history
            .pop_undo_with_current(current)
            .expect("Undo vorhanden");

        assert_eq!(restored.scene.node_count(), 2);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn redo_restores_undone_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(snapshot_with_node_count(2));

        let _restored = history.pop_undo_with_current(snapshot_with_node_count(5));

        let redone = history
            .pop_redo_with_current(snapshot_with_node_count(2))
            .expect("Redo vorhanden");

        assert_eq!(redone.scene.node_count(), 5);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_record_clears_redo_stack() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(snapshot_with_node_count(1));

        let _restored = history.pop_undo_with_current(snapshot_with_node_count(3));
        assert!(history.can_redo());

        history.record_snapshot(snapshot_with_node_count(7));
        assert!(!history.can_redo());
    }

    #[test]
    fn respects_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.record_snapshot(snapshot_with_node_count(i));
        }

        // Nur 3 Undo-Schritte sollten möglich sein
        let mut undo_count = 0;
        while history.can_undo() {
            history.pop_undo_with_current(snapshot_with_node_count(99));
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
    }
}
