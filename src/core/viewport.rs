//! Fenster↔Szene-Koordinatentransformation.
//!
//! Fenster-Koordinaten sind Pixel mit Ursprung oben links, Szenen-Koordinaten
//! logische Einheiten mit Ursprung unten links — die Transformation flippt
//! daher die Y-Achse. Die Tiefe liegt fest auf der Near-Plane (reine 2D-Szene).

use glam::Vec2;

/// Aktuelle Viewport-Ausdehnung samt Umrechnung in Szenen-Einheiten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Viewport-Größe in Pixel
    pub size: Vec2,
}

impl Viewport {
    /// Sichtbare Szenen-Halbhöhe; die Halbbreite skaliert mit dem Seitenverhältnis.
    pub const SCENE_HALF_EXTENT: f32 = 1.0;

    /// Erstellt einen Viewport mit Standardgröße.
    pub fn new() -> Self {
        Self {
            size: Vec2::new(800.0, 600.0),
        }
    }

    /// Aktualisiert die Viewport-Größe nach einem Resize-Event.
    ///
    /// Muss vor jeder weiteren Koordinatenumrechnung aufgerufen werden.
    pub fn resize(&mut self, size: Vec2) {
        self.size = Vec2::new(size.x.max(1.0), size.y.max(1.0));
    }

    /// Konvertiert eine Fenster-Pixelposition in Szenen-Koordinaten.
    ///
    /// Berücksichtigt Seitenverhältnis und Y-Flip (Fenster oben-links,
    /// Szene unten-links).
    pub fn window_to_scene(&self, window_pos: Vec2) -> Vec2 {
        // Fenster-Koordinaten zentrieren (-1 bis 1)
        let ndc = (window_pos / self.size) * 2.0 - Vec2::ONE;
        let aspect = self.size.x / self.size.y;
        Vec2::new(
            ndc.x * Self::SCENE_HALF_EXTENT * aspect,
            -ndc.y * Self::SCENE_HALF_EXTENT,
        )
    }

    /// Berechnet den Umrechnungsfaktor von Fenster-Pixeln zu Szenen-Einheiten.
    pub fn scene_units_per_pixel(&self) -> f32 {
        2.0 * Self::SCENE_HALF_EXTENT / self.size.y
    }

    /// Berechnet den Pick-Radius in Szenen-Einheiten aus einem quadratischen
    /// Pick-Fenster in Pixeln (halbe Fensterbreite als Radius).
    pub fn pick_radius_scene(&self, pick_window_px: f32) -> f32 {
        pick_window_px * 0.5 * self.scene_units_per_pixel()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
