use glam::Vec2;

use crate::core::ShapeKind;
use crate::scene::ModeKind;

/// Mutierende App-Commands, ausgeführt durch die Feature-Handler.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Viewport-Größe übernehmen
    SetViewportSize {
        /// Neue Größe in Pixel
        size: [f32; 2],
    },
    /// Klick an die Szene durchreichen (Hit-Test + Modus-Dispatch)
    RegisterClick {
        /// Klickposition in Fenster-Pixeln
        window_pos: Vec2,
    },
    /// Shape an einer Fensterposition anlegen (mit Overlap-Unterdrückung)
    AddShape {
        /// Gewünschte Shape-Art
        kind: ShapeKind,
        /// Zielposition in Fenster-Pixeln
        window_pos: Vec2,
    },
    /// Interaktionsmodus setzen
    SetMode {
        /// Gewünschter Modus
        mode: ModeKind,
    },
    /// Selektion aufheben
    ClearSelection,
    /// Selektierte Shapes löschen
    DeleteSelected,
    /// Frame zeichnen
    Render,
    /// Letzte Aktion rückgängig machen
    Undo,
    /// Rückgängig gemachte Aktion wiederherstellen
    Redo,
    /// Anwendung kontrolliert beenden
    RequestExit,
}
