//! Pick-Buffer: Ergebnis-Puffer für Hit-Test-Abfragen.
//!
//! Der Puffer wächst per Verdopplung, wenn eine Abfrage mehr Treffer meldet
//! als Platz vorhanden ist (Overflow-Erkennung mit Retry, kein stilles
//! Abschneiden). Die Kapazität schrumpft nie und bleibt ein
//! Zweierpotenz-Vielfaches der Startkapazität.

/// Startkapazität des Pick-Buffers.
pub const DEFAULT_PICK_CAPACITY: usize = 16;
/// Obergrenze der Kapazität; darüber schlägt die Abfrage explizit fehl.
pub const MAX_PICK_CAPACITY: usize = 16_384;

/// Ein einzelner Treffer einer Hit-Test-Abfrage.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PickHit {
    /// Name des getroffenen Shapes (Registry-Index zum Zeitpunkt des Passes)
    pub name: u32,
    /// Abstand zum Pick-Zentrum in Szenen-Einheiten (Near-Plane-Tiefe)
    pub depth: f32,
}

/// Ergebnis-Puffer mit Wachstums-Policy für Hit-Test-Abfragen.
#[derive(Debug, Clone)]
pub struct PickBuffer {
    slots: Vec<PickHit>,
    hit_count: usize,
}

impl PickBuffer {
    /// Erstellt einen Puffer mit Startkapazität.
    pub fn new() -> Self {
        Self {
            slots: vec![PickHit::default(); DEFAULT_PICK_CAPACITY],
            hit_count: 0,
        }
    }

    /// Gibt die aktuelle Slot-Kapazität zurück.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Gibt die Treffer der letzten erfolgreichen Abfrage zurück.
    pub fn hits(&self) -> &[PickHit] {
        &self.slots[..self.hit_count]
    }

    /// Gibt die Anzahl der Treffer der letzten Abfrage zurück.
    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    /// Gibt die Slots als Schreibziel für das Backend zurück.
    pub fn slots_mut(&mut self) -> &mut [PickHit] {
        &mut self.slots
    }

    /// Übernimmt die Trefferanzahl einer abgeschlossenen Abfrage.
    pub fn record_hits(&mut self, count: usize) {
        self.hit_count = count.min(self.slots.len());
    }

    /// Verdoppelt die Kapazität; bestehende Slots bleiben erhalten.
    ///
    /// Gibt `false` zurück, wenn die Obergrenze bereits erreicht ist.
    pub fn grow(&mut self) -> bool {
        let new_capacity = self.slots.len() << 1;
        if new_capacity > MAX_PICK_CAPACITY {
            return false;
        }
        self.slots.resize(new_capacity, PickHit::default());
        true
    }
}

impl Default for PickBuffer {
    fn default() -> Self {
        Self::new()
    }
}
