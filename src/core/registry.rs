//! Die geordnete Shape-Registry der Szene.
//!
//! Einfügereihenfolge ist semantisch: sie bestimmt die Zeichenreihenfolge
//! und die Namensvergabe (Registry-Index) im Pick-Pass.

use glam::Vec2;
use indexmap::IndexMap;

use super::{Color, Shape, ShapeKind};

/// Container für alle Shapes der Szene, indexiert nach ihrer ID.
#[derive(Debug, Clone, Default)]
pub struct ShapeRegistry {
    shapes: IndexMap<u64, Shape>,
}

impl ShapeRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self {
            shapes: IndexMap::new(),
        }
    }

    /// Berechnet die nächste freie Shape-ID.
    pub fn next_shape_id(&self) -> u64 {
        self.shapes.keys().max().copied().unwrap_or(0) + 1
    }

    /// Fügt ein Shape hinzu (ans Ende der Zeichenreihenfolge).
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.insert(shape.id(), shape);
    }

    /// Gibt ein Shape per ID zurück.
    pub fn get(&self, id: u64) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Gibt ein Shape per ID mutierbar zurück.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Shape> {
        self.shapes.get_mut(&id)
    }

    /// Prüft ob eine Shape-ID existiert.
    pub fn contains(&self, id: u64) -> bool {
        self.shapes.contains_key(&id)
    }

    /// Entfernt ein Shape und erhält die Reihenfolge der übrigen.
    pub fn remove(&mut self, id: u64) -> Option<Shape> {
        self.shapes.shift_remove(&id)
    }

    /// Iteriert über alle Shapes in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    /// Iteriert mutierbar über alle Shapes in Einfügereihenfolge.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Shape> {
        self.shapes.values_mut()
    }

    /// Löst einen Pick-Namen (Registry-Index) in eine Shape-ID auf.
    pub fn id_at_index(&self, index: usize) -> Option<u64> {
        self.shapes.get_index(index).map(|(id, _)| *id)
    }

    /// Gibt die Anzahl der Shapes zurück.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Gibt `true` zurück, wenn die Registry leer ist.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Zählt die Shapes einer Art.
    pub fn count_kind(&self, kind: ShapeKind) -> usize {
        self.shapes.values().filter(|s| s.kind() == kind).count()
    }

    /// Findet alle Linien, die den Knoten als Endpunkt referenzieren.
    pub fn lines_touching(&self, node_id: u64) -> Vec<u64> {
        self.shapes
            .values()
            .filter(|s| {
                s.endpoints()
                    .is_some_and(|(a, b)| a == node_id || b == node_id)
            })
            .map(|s| s.id())
            .collect()
    }

    /// Prüft ob bereits eine Linie zwischen zwei Knoten existiert
    /// (in beliebiger Orientierung).
    pub fn has_line_between(&self, node_a: u64, node_b: u64) -> bool {
        self.shapes.values().any(|s| {
            s.endpoints()
                .is_some_and(|(a, b)| (a == node_a && b == node_b) || (a == node_b && b == node_a))
        })
    }

    /// Aktualisiert die Geometrie aller Linien aus den Knoten-Positionen.
    pub fn rebuild_line_geometry(&mut self) {
        // Positionen zuerst einsammeln, um Borrow-Konflikt zu vermeiden
        let updates: Vec<(u64, Vec2, Vec2)> = self
            .shapes
            .values()
            .filter_map(|s| {
                let (start_id, end_id) = s.endpoints()?;
                let start = self.shapes.get(&start_id)?.position();
                let end = self.shapes.get(&end_id)?.position();
                Some((s.id(), start, end))
            })
            .collect();
        for (id, start, end) in updates {
            if let Some(shape) = self.shapes.get_mut(&id) {
                shape.update_line_geometry(start, end);
            }
        }
    }

    /// Erzeugt und registriert einen Kreis-Shape; gibt die neue ID zurück.
    pub fn spawn_circle(&mut self, center: Vec2, radius: f32, fill: Color, highlight: Color) -> u64 {
        let id = self.next_shape_id();
        self.add_shape(Shape::new_circle(id, center, radius, fill, highlight));
        id
    }

    /// Erzeugt und registriert einen Linien-Shape zwischen zwei Knoten;
    /// gibt die neue ID zurück. Endpunkt-Existenz prüft der Aufrufer.
    #[allow(clippy::too_many_arguments)]
    pub fn spawn_line(
        &mut self,
        start_id: u64,
        end_id: u64,
        start: Vec2,
        end: Vec2,
        width: f32,
        fill: Color,
        highlight: Color,
    ) -> u64 {
        let id = self.next_shape_id();
        self.add_shape(Shape::new_line(
            id, start_id, end_id, start, end, width, fill, highlight,
        ));
        id
    }
}
