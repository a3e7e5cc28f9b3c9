use glam::Vec2;

use crate::core::ShapeKind;
use crate::scene::ModeKind;

/// App-Intent-Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Viewport-Größe hat sich geändert
    ViewportResized {
        /// Neue Größe in Pixel
        size: [f32; 2],
    },
    /// Primärklick auf den Canvas (Fenster-Pixelkoordinaten)
    CanvasClicked {
        /// Klickposition in Fenster-Pixeln
        window_pos: Vec2,
    },
    /// Shape einer Art an einer Fensterposition anlegen
    AddShapeRequested {
        /// Gewünschte Shape-Art
        kind: ShapeKind,
        /// Zielposition in Fenster-Pixeln
        window_pos: Vec2,
    },
    /// Interaktionsmodus wechseln
    ModeSelected {
        /// Gewünschter Modus
        mode: ModeKind,
    },
    /// Komplette Selektion aufheben
    ClearSelectionRequested,
    /// Selektierte Shapes löschen
    DeleteSelectedRequested,
    /// Frame neu zeichnen
    RedrawRequested,
    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,
    /// Anwendung beenden
    ExitRequested,
}
