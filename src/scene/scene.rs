//! Die Szene: Shape-Registry, Pick-Pipeline und Modus-Zustandsmaschine.

use anyhow::bail;
use glam::Vec2;
use indexmap::IndexSet;

use crate::core::{PickBuffer, PickHit, ShapeKind, ShapeRegistry, Viewport};
use crate::core::{Shape, MAX_PICK_CAPACITY};
use crate::render::{PickOutcome, RenderBackend};
use crate::scene::modes::{self, ModeContext, ModeKind, ModeSet};
use crate::shared::EditorOptions;

/// Container und Orchestrator des Editor-Kerns.
///
/// Besitzt Registry, Selektions-Menge, Pick-Buffer und die persistenten
/// Modus-Instanzen. Alle Klick-Interaktion läuft über `register_click`;
/// die Deutung des Klicks ist allein Sache des aktiven Modus.
pub struct Scene {
    shapes: ShapeRegistry,
    selected: IndexSet<u64>,
    pick_buffer: PickBuffer,
    modes: ModeSet,
    active_mode: ModeKind,
    viewport: Viewport,
    options: EditorOptions,
}

impl Scene {
    /// Erstellt eine leere Szene (Start im Knoten-Erstellungs-Modus).
    pub fn new(options: EditorOptions) -> Self {
        Self {
            shapes: ShapeRegistry::new(),
            selected: IndexSet::new(),
            pick_buffer: PickBuffer::new(),
            modes: ModeSet::new(),
            active_mode: ModeKind::NodeCreation,
            viewport: Viewport::new(),
            options,
        }
    }

    // ── Zugriff ─────────────────────────────────────────────────────

    /// Gibt die Shape-Registry zurück.
    pub fn shapes(&self) -> &ShapeRegistry {
        &self.shapes
    }

    /// Gibt ein Shape mutierbar zurück (z.B. für Highlight-Änderungen
    /// durch einen Graph-Algorithmus-Kollaborateur).
    pub fn shape_mut(&mut self, id: u64) -> Option<&mut Shape> {
        self.shapes.get_mut(id)
    }

    /// Gibt die Menge der selektierten Shape-IDs zurück.
    pub fn selected(&self) -> &IndexSet<u64> {
        &self.selected
    }

    /// Gibt den aktiven Modus zurück.
    pub fn active_mode(&self) -> ModeKind {
        self.active_mode
    }

    /// Gibt die Laufzeit-Optionen zurück.
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Gibt die aktuelle Pick-Buffer-Kapazität zurück.
    pub fn pick_capacity(&self) -> usize {
        self.pick_buffer.capacity()
    }

    /// Gibt die Treffer des letzten Hit-Tests zurück.
    pub fn pick_hits(&self) -> &[PickHit] {
        self.pick_buffer.hits()
    }

    /// Gibt den gemerkten Startknoten einer laufenden Kanten-Geste zurück.
    pub fn pending_edge_source(&self) -> Option<u64> {
        self.modes.edge_creation().pending_source()
    }

    /// Gibt die Anzahl der Knoten-Shapes zurück (für UI-Anzeige).
    pub fn node_count(&self) -> usize {
        self.shapes.count_kind(ShapeKind::Circle)
    }

    /// Gibt die Anzahl der Kanten-Shapes zurück (für UI-Anzeige).
    pub fn edge_count(&self) -> usize {
        self.shapes.count_kind(ShapeKind::Line)
    }

    // ── Viewport & Koordinaten ──────────────────────────────────────

    /// Übernimmt eine neue Viewport-Größe und informiert das Backend.
    ///
    /// Muss nach einem Resize-Event vor der nächsten Koordinatenumrechnung
    /// aufgerufen werden.
    pub fn resize(&mut self, backend: &mut dyn RenderBackend, size: Vec2) {
        self.viewport.resize(size);
        backend.resize(self.viewport.size);
        log::debug!("Viewport: {}x{}", self.viewport.size.x, self.viewport.size.y);
    }

    /// Konvertiert eine Fenster-Pixelposition in Szenen-Koordinaten.
    pub fn window_to_scene(&self, window_pos: Vec2) -> Vec2 {
        self.viewport.window_to_scene(window_pos)
    }

    // ── Mutationen ──────────────────────────────────────────────────

    /// Erstellt ein Shape der Art an einer Fensterposition.
    ///
    /// Trifft der Hit-Test an der Stelle bereits etwas, wird die Erstellung
    /// unterdrückt (keine überlappenden Shapes). Gibt die neue Shape-ID
    /// zurück, oder `None` wenn unterdrückt.
    pub fn add_shape(
        &mut self,
        backend: &mut dyn RenderBackend,
        kind: ShapeKind,
        window_pos: Vec2,
    ) -> anyhow::Result<Option<u64>> {
        let scene_pos = self.viewport.window_to_scene(window_pos);
        let hits = self.pick_at(backend, window_pos)?;
        if hits > 0 {
            log::debug!(
                "Shape-Erstellung an ({:.2}, {:.2}) unterdrückt: {} Treffer",
                scene_pos.x,
                scene_pos.y,
                hits
            );
            return Ok(None);
        }

        match kind {
            ShapeKind::Circle => {
                let id = self.shapes.spawn_circle(
                    scene_pos,
                    self.options.node_radius_scene,
                    self.options.node_fill_color,
                    self.options.outline_color_default,
                );
                log::info!(
                    "Knoten {} an ({:.2}, {:.2}) erstellt",
                    id,
                    scene_pos.x,
                    scene_pos.y
                );
                Ok(Some(id))
            }
            ShapeKind::Line => {
                // Eine freie Linie hat keine sinnvollen Endpunkte; Kanten
                // entstehen über die Kanten-Geste oder `add_edge`.
                log::warn!("Linien-Erstellung ohne Endpunkte ignoriert");
                Ok(None)
            }
        }
    }

    /// Erstellt einen Knoten direkt an einer Szenen-Position
    /// (Konstruktion durch Import-Kollaborateure, ohne Hit-Test).
    pub fn add_node_at(&mut self, scene_pos: Vec2) -> u64 {
        self.shapes.spawn_circle(
            scene_pos,
            self.options.node_radius_scene,
            self.options.node_fill_color,
            self.options.outline_color_default,
        )
    }

    /// Erstellt eine Kante zwischen zwei bestehenden Knoten.
    ///
    /// Validiert gegen Selbst-Kanten, fehlende Endpunkte und Duplikate.
    pub fn add_edge(&mut self, start_id: u64, end_id: u64) -> Option<u64> {
        if start_id == end_id {
            log::warn!("Selbst-Kante nicht erlaubt (Knoten {})", start_id);
            return None;
        }
        let start = self.shapes.get(start_id).map(|s| s.position());
        let end = self.shapes.get(end_id).map(|s| s.position());
        let (Some(start), Some(end)) = (start, end) else {
            log::warn!(
                "Kante nicht möglich: Knoten {} oder {} existiert nicht",
                start_id,
                end_id
            );
            return None;
        };
        if self.shapes.has_line_between(start_id, end_id) {
            log::warn!("Kante {}→{} existiert bereits", start_id, end_id);
            return None;
        }

        let id = self.shapes.spawn_line(
            start_id,
            end_id,
            start,
            end,
            self.options.line_width_scene,
            self.options.line_color,
            self.options.outline_color_default,
        );
        log::info!("Kante {}→{} erstellt (Shape {})", start_id, end_id, id);
        Some(id)
    }

    /// Entfernt ein Shape aus Registry und Selektion.
    ///
    /// Beim Entfernen eines Knotens werden auch alle Kanten entfernt, die
    /// ihn als Endpunkt referenzieren.
    pub fn remove_shape(&mut self, id: u64) -> Option<Shape> {
        let removed = self.shapes.remove(id)?;
        self.selected.shift_remove(&id);

        if removed.kind() == ShapeKind::Circle {
            for line_id in self.shapes.lines_touching(id) {
                self.shapes.remove(line_id);
                self.selected.shift_remove(&line_id);
            }
        }
        log::info!("Shape {} entfernt", id);
        Some(removed)
    }

    /// Registriert einen Klick: Koordinaten wandeln, Hit-Test ausführen und
    /// Ergebnis an den aktiven Modus übergeben.
    ///
    /// Der einzige Einstiegspunkt für klick-getriebene Interaktionslogik;
    /// die Szene selbst hat keine Meinung dazu, was ein Klick bedeutet.
    pub fn register_click(
        &mut self,
        backend: &mut dyn RenderBackend,
        window_pos: Vec2,
    ) -> anyhow::Result<()> {
        let scene_pos = self.viewport.window_to_scene(window_pos);
        self.pick_at(backend, window_pos)?;

        let hits: Vec<PickHit> = self.pick_buffer.hits().to_vec();
        let mut ctx = ModeContext {
            shapes: &mut self.shapes,
            selected: &mut self.selected,
            options: &self.options,
        };
        self.modes
            .handle_click(self.active_mode, &mut ctx, scene_pos, &hits);
        Ok(())
    }

    /// Wechselt den aktiven Modus und hebt jede Hervorhebung auf.
    ///
    /// Moduswechsel deselektiert immer visuell; transienter Gesten-Zustand
    /// (z.B. gemerkter Kanten-Startknoten) wird verworfen.
    pub fn set_active_mode(&mut self, mode: ModeKind) {
        self.active_mode = mode;
        self.modes.reset_transient();
        self.reset_highlighting();
        log::info!("Interaktionsmodus: {:?}", mode);
    }

    /// Hebt Selektion und Highlight sämtlicher Shapes auf.
    pub fn reset_highlighting(&mut self) {
        let outline_default = self.options.outline_color_default;
        for shape in self.shapes.iter_mut() {
            shape.set_selected(false);
            shape.set_highlight(outline_default);
        }
        self.selected.clear();
    }

    // ── Rendering & Picking ─────────────────────────────────────────

    /// Zeichnet alle Shapes in Registry-Reihenfolge.
    pub fn render(&self, backend: &mut dyn RenderBackend) {
        backend.begin_frame(self.options.background_color);
        for shape in self.shapes.iter() {
            shape.draw(backend);
        }
        backend.end_frame();
    }

    /// Führt den Hit-Test an einer Fensterposition aus.
    ///
    /// Bei Overflow wird der Pick-Buffer verdoppelt und die identische
    /// Abfrage wiederholt; die Schleife ist durch die Kapazitäts-Obergrenze
    /// begrenzt. Gibt die Trefferanzahl zurück.
    fn pick_at(&mut self, backend: &mut dyn RenderBackend, window_pos: Vec2) -> anyhow::Result<usize> {
        let center = self.viewport.window_to_scene(window_pos);
        let radius = self.viewport.pick_radius_scene(self.options.pick_window_px);

        loop {
            backend.begin_pick(center, radius);
            modes::run_pick_pass(self.active_mode, &self.shapes, backend);

            match backend.end_pick(self.pick_buffer.slots_mut()) {
                PickOutcome::Complete(count) => {
                    self.pick_buffer.record_hits(count);
                    return Ok(count);
                }
                PickOutcome::Overflow => {
                    if !self.pick_buffer.grow() {
                        bail!(
                            "Pick-Buffer-Limit erreicht ({} Slots): Abfrage abgebrochen",
                            MAX_PICK_CAPACITY
                        );
                    }
                    log::debug!(
                        "Pick-Buffer auf {} Slots vergrößert, Abfrage wiederholt",
                        self.pick_buffer.capacity()
                    );
                }
            }
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}

impl Clone for Scene {
    /// Tiefe Wert-Kopie ohne Aliasing zur Quelle.
    ///
    /// Die Selektions-Menge wird aus den kopierten Shapes neu abgeleitet
    /// (genau die Shapes mit gesetztem Selektions-Flag).
    fn clone(&self) -> Self {
        let shapes = self.shapes.clone();
        let selected = shapes
            .iter()
            .filter(|s| s.is_selected())
            .map(|s| s.id())
            .collect();

        Self {
            shapes,
            selected,
            pick_buffer: self.pick_buffer.clone(),
            modes: self.modes.clone(),
            active_mode: self.active_mode,
            viewport: self.viewport,
            options: self.options.clone(),
        }
    }
}
