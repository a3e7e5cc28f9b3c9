//! Schmale Render-Backend-Schnittstelle.
//!
//! Die Szene spricht ausschließlich über diesen Trait mit der Render-/
//! Selektions-Fassade: Primitive zeichnen, Pick-Pass mit Namensvergabe,
//! Treffer-Liste abholen. Damit bleibt der Scene/Mode/Picking-Kern ohne
//! echte Render-Oberfläche testbar.

pub mod software;

use glam::Vec2;

use crate::core::{Color, PickHit};

pub use software::SoftwareBackend;

/// Ergebnis eines abgeschlossenen Pick-Passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// Alle Treffer haben in den Ausgabe-Puffer gepasst
    Complete(usize),
    /// Mehr Treffer als Puffer-Slots — Aufrufer vergrößert und wiederholt
    Overflow,
}

/// Immediate-Mode-Schnittstelle für Zeichnen und Hit-Testing.
///
/// Zwischen `begin_pick` und `end_pick` wirken die Draw-Aufrufe als
/// Hit-Proben gegen die Pick-Region unter dem zuletzt geladenen Namen;
/// außerhalb davon zeichnen sie in den aktuellen Frame.
pub trait RenderBackend {
    /// Übernimmt eine neue Viewport-Größe in Pixel.
    fn resize(&mut self, size: Vec2);

    /// Beginnt einen Frame und setzt die Hintergrundfarbe.
    fn begin_frame(&mut self, clear: Color);

    /// Zeichnet einen gefüllten Kreis mit Umriss.
    fn draw_circle(&mut self, center: Vec2, radius: f32, fill: Color, outline: Color);

    /// Zeichnet ein Liniensegment.
    fn draw_line(&mut self, start: Vec2, end: Vec2, width: f32, color: Color);

    /// Schließt den aktuellen Frame ab.
    fn end_frame(&mut self);

    /// Startet einen Pick-Pass um das Zentrum mit Radius in Szenen-Einheiten.
    fn begin_pick(&mut self, center: Vec2, radius: f32);

    /// Lädt den Namen für nachfolgende Hit-Proben (Registry-Index).
    fn load_name(&mut self, name: u32);

    /// Beendet den Pick-Pass und schreibt Treffer in `out`.
    ///
    /// Meldet `Overflow`, wenn mehr Shapes getroffen wurden als `out`
    /// Slots hat; in dem Fall wurden keine verwertbaren Treffer geschrieben.
    fn end_pick(&mut self, out: &mut [PickHit]) -> PickOutcome;
}
