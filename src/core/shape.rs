//! Shape-Primitiven der Szene: Kreise (Knoten) und Linien (Kanten).

use glam::Vec2;

use super::Color;
use crate::render::RenderBackend;

/// Unterscheidungsmerkmal der Shape-Arten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Kreis — repräsentiert einen Graph-Knoten
    Circle,
    /// Linie — repräsentiert eine Kante zwischen zwei Knoten
    Line,
}

/// Geometrie-Variante eines Shapes.
///
/// Geschlossene Aufzählung statt Vererbung: jede Erweiterung um eine neue
/// Art zwingt den Compiler durch sämtliche `match`-Stellen.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeGeometry {
    /// Kreis mit Radius in Szenen-Einheiten
    Circle {
        /// Radius in Szenen-Einheiten
        radius: f32,
    },
    /// Liniensegment zwischen zwei Knoten-Shapes
    Line {
        /// Shape-ID des Startknotens
        start_id: u64,
        /// Shape-ID des Zielknotens
        end_id: u64,
        /// Startpunkt in Szenen-Koordinaten
        start: Vec2,
        /// Endpunkt in Szenen-Koordinaten
        end: Vec2,
        /// Linienstärke in Szenen-Einheiten
        width: f32,
    },
}

/// Ein zeichen- und selektierbares Primitiv der Szene.
///
/// `position` ist beim Kreis das Zentrum, bei der Linie der Mittelpunkt
/// (abgeleitet aus den Endpunkten).
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: u64,
    position: Vec2,
    fill: Color,
    highlight: Color,
    selected: bool,
    geometry: ShapeGeometry,
}

impl Shape {
    /// Erstellt einen Kreis-Shape.
    pub fn new_circle(id: u64, center: Vec2, radius: f32, fill: Color, highlight: Color) -> Self {
        Self {
            id,
            position: center,
            fill,
            highlight,
            selected: false,
            geometry: ShapeGeometry::Circle { radius },
        }
    }

    /// Erstellt einen Linien-Shape zwischen zwei Knoten.
    #[allow(clippy::too_many_arguments)]
    pub fn new_line(
        id: u64,
        start_id: u64,
        end_id: u64,
        start: Vec2,
        end: Vec2,
        width: f32,
        fill: Color,
        highlight: Color,
    ) -> Self {
        Self {
            id,
            position: (start + end) * 0.5,
            fill,
            highlight,
            selected: false,
            geometry: ShapeGeometry::Line {
                start_id,
                end_id,
                start,
                end,
                width,
            },
        }
    }

    /// Gibt die Shape-ID zurück.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Gibt die Shape-Art zurück.
    pub fn kind(&self) -> ShapeKind {
        match self.geometry {
            ShapeGeometry::Circle { .. } => ShapeKind::Circle,
            ShapeGeometry::Line { .. } => ShapeKind::Line,
        }
    }

    /// Gibt die Position zurück (Kreis: Zentrum, Linie: Mittelpunkt).
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Setzt die Position. Eine Linie wird mitsamt Endpunkten verschoben.
    pub fn set_position(&mut self, position: Vec2) {
        let delta = position - self.position;
        if let ShapeGeometry::Line { start, end, .. } = &mut self.geometry {
            *start += delta;
            *end += delta;
        }
        self.position = position;
    }

    /// Gibt die Füllfarbe zurück.
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Setzt die Füllfarbe.
    pub fn set_fill(&mut self, fill: Color) {
        self.fill = fill;
    }

    /// Setzt die Füllfarbe aus Einzelkanälen.
    pub fn set_fill_rgba(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.fill = Color::rgba(r, g, b, a);
    }

    /// Gibt die Highlight-/Umrissfarbe zurück.
    pub fn highlight(&self) -> Color {
        self.highlight
    }

    /// Setzt die Highlight-/Umrissfarbe.
    pub fn set_highlight(&mut self, highlight: Color) {
        self.highlight = highlight;
    }

    /// Kippt das Selektions-Flag und gibt den neuen Zustand zurück.
    pub fn toggle_selected(&mut self) -> bool {
        self.selected = !self.selected;
        self.selected
    }

    /// Setzt das Selektions-Flag explizit.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Gibt `true` zurück, wenn das Shape selektiert ist.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Gibt die Geometrie-Variante zurück.
    pub fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    /// Gibt bei Linien die Endpunkt-IDs (start, end) zurück.
    pub fn endpoints(&self) -> Option<(u64, u64)> {
        match self.geometry {
            ShapeGeometry::Line {
                start_id, end_id, ..
            } => Some((start_id, end_id)),
            ShapeGeometry::Circle { .. } => None,
        }
    }

    /// Aktualisiert die Linien-Geometrie aus neuen Endpunkt-Positionen.
    ///
    /// Bei Kreisen ein No-op.
    pub fn update_line_geometry(&mut self, new_start: Vec2, new_end: Vec2) {
        if let ShapeGeometry::Line { start, end, .. } = &mut self.geometry {
            *start = new_start;
            *end = new_end;
            self.position = (new_start + new_end) * 0.5;
        }
    }

    /// Zeichnet das Shape über das Backend.
    pub fn draw(&self, backend: &mut dyn RenderBackend) {
        match self.geometry {
            ShapeGeometry::Circle { radius } => {
                backend.draw_circle(self.position, radius, self.fill, self.highlight);
            }
            ShapeGeometry::Line {
                start, end, width, ..
            } => {
                backend.draw_line(start, end, width, self.fill);
            }
        }
    }

    /// Meldet das Shape unter dem übergebenen Namen beim Pick-Pass an.
    ///
    /// Nur während eines aktiven Pick-Passes aufrufen; der Name muss der
    /// Registry-Index zum Zeitpunkt des Passes sein.
    pub fn pick(&self, name: u32, backend: &mut dyn RenderBackend) {
        backend.load_name(name);
        self.draw(backend);
    }
}
