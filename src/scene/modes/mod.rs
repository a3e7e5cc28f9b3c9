//! Interaktionsmodi: Strategien zur Deutung eines aufgelösten Klicks.
//!
//! Jeder Modus interpretiert denselben Pick unterschiedlich (Knoten anlegen,
//! Kante ziehen, nur selektieren). Modi halten keine Zeiger in die Szene;
//! Registry und Selektion kommen als expliziter Kontext pro Aufruf.

pub mod edge_creation;
pub mod node_creation;
pub mod view;

use glam::Vec2;
use indexmap::IndexSet;

use crate::core::{PickHit, ShapeKind, ShapeRegistry};
use crate::render::RenderBackend;
use crate::shared::EditorOptions;

pub use edge_creation::EdgeCreationMode;
pub use node_creation::NodeCreationMode;
pub use view::ViewMode;

/// Unterscheidungsmerkmal der Interaktionsmodi
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModeKind {
    /// Knoten platzieren und selektieren
    #[default]
    NodeCreation,
    /// Kanten zwischen Knoten ziehen (Zwei-Klick-Geste)
    EdgeCreation,
    /// Nur ansehen und selektieren
    View,
}

/// Expliziter Mutations-Kontext für Modus-Operationen.
///
/// Selektions-Invariante: `selected` enthält genau die IDs der Shapes mit
/// gesetztem Selektions-Flag; Highlight-Farbe läuft synchron mit.
pub struct ModeContext<'a> {
    /// Shape-Registry der Szene
    pub shapes: &'a mut ShapeRegistry,
    /// Geteilte Selektions-Menge (IDs, nicht-besitzend)
    pub selected: &'a mut IndexSet<u64>,
    /// Laufzeit-Optionen (Farben, Größen)
    pub options: &'a EditorOptions,
}

impl ModeContext<'_> {
    /// Löst einen Pick-Treffer in eine Shape-ID auf.
    ///
    /// Namen außerhalb der Registry werden ignoriert (defensive Prüfung
    /// gegen veraltete Treffer).
    pub fn resolve_hit(&self, hit: &PickHit) -> Option<u64> {
        self.shapes.id_at_index(hit.name as usize)
    }

    /// Kippt die Selektion eines Shapes und hält Menge + Highlight synchron.
    pub fn toggle_selection(&mut self, id: u64) {
        let outline_selected = self.options.outline_color_selected;
        let outline_default = self.options.outline_color_default;
        let Some(shape) = self.shapes.get_mut(id) else {
            log::warn!("Selektion für unbekanntes Shape {} ignoriert", id);
            return;
        };
        if shape.toggle_selected() {
            shape.set_highlight(outline_selected);
            self.selected.insert(id);
        } else {
            shape.set_highlight(outline_default);
            self.selected.shift_remove(&id);
        }
    }

    /// Selektiert genau ein Shape und hebt jede andere Selektion auf.
    pub fn select_only(&mut self, id: u64) {
        self.clear_selection();
        let outline_selected = self.options.outline_color_selected;
        let Some(shape) = self.shapes.get_mut(id) else {
            log::warn!("Selektion für unbekanntes Shape {} ignoriert", id);
            return;
        };
        shape.set_selected(true);
        shape.set_highlight(outline_selected);
        self.selected.insert(id);
    }

    /// Hebt die komplette Selektion auf (Flags, Highlight, Menge).
    pub fn clear_selection(&mut self) {
        let outline_default = self.options.outline_color_default;
        for id in self.selected.drain(..) {
            if let Some(shape) = self.shapes.get_mut(id) {
                shape.set_selected(false);
                shape.set_highlight(outline_default);
            }
        }
    }
}

/// Gemeinsames Selektionsverhalten aller Modi: erster Treffer kippt
/// die Selektion, kein Treffer ändert nichts.
pub(crate) fn select_logic(ctx: &mut ModeContext, hits: &[PickHit]) {
    let Some(hit) = hits.first() else {
        return;
    };
    let Some(id) = ctx.resolve_hit(hit) else {
        log::warn!("Pick-Treffer mit ungültigem Namen {} ignoriert", hit.name);
        return;
    };
    ctx.toggle_selection(id);
}

/// Entscheidet, welche Shape-Arten ein Modus im Pick-Pass scharfschaltet.
///
/// In den Erstellungs-Modi sind nur Knoten klickbar; Kanten werden über
/// ihre Endpunkte identifiziert, nicht eigenständig gepickt.
pub fn picks_kind(mode: ModeKind, kind: ShapeKind) -> bool {
    match mode {
        ModeKind::NodeCreation | ModeKind::EdgeCreation => kind == ShapeKind::Circle,
        ModeKind::View => true,
    }
}

/// Führt den Pick-Pass des Modus aus: meldet jedes zulässige Shape mit
/// seinem Registry-Index als Namen beim Backend an.
pub fn run_pick_pass(mode: ModeKind, shapes: &ShapeRegistry, backend: &mut dyn RenderBackend) {
    for (index, shape) in shapes.iter().enumerate() {
        if picks_kind(mode, shape.kind()) {
            shape.pick(index as u32, backend);
        }
    }
}

/// Persistente Modus-Instanzen der Szene (eine pro Art).
///
/// Moduswechsel zerstört keine Instanz; nur transienter Gesten-Zustand
/// wird beim Wechsel zurückgesetzt.
#[derive(Debug, Clone, Default)]
pub struct ModeSet {
    node_creation: NodeCreationMode,
    edge_creation: EdgeCreationMode,
    view: ViewMode,
}

impl ModeSet {
    /// Erstellt die Standard-Modusinstanzen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leitet einen aufgelösten Klick an den aktiven Modus weiter.
    pub fn handle_click(
        &mut self,
        mode: ModeKind,
        ctx: &mut ModeContext,
        scene_pos: Vec2,
        hits: &[PickHit],
    ) {
        match mode {
            ModeKind::NodeCreation => self.node_creation.handle_click(ctx, scene_pos, hits),
            ModeKind::EdgeCreation => self.edge_creation.handle_click(ctx, scene_pos, hits),
            ModeKind::View => self.view.handle_click(ctx, scene_pos, hits),
        }
    }

    /// Setzt transienten Gesten-Zustand aller Modi zurück (Moduswechsel).
    pub fn reset_transient(&mut self) {
        self.edge_creation.cancel_pending();
    }

    /// Read-only-Zugriff auf den Kanten-Modus (z.B. für Status-Anzeigen).
    pub fn edge_creation(&self) -> &EdgeCreationMode {
        &self.edge_creation
    }
}
