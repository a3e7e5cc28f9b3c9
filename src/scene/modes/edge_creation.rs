//! Kanten-Erstellungs-Modus (Zwei-Klick-Geste).

use glam::Vec2;

use super::ModeContext;
use crate::core::PickHit;

/// Modus: erster qualifizierter Klick merkt den Startknoten, zweiter Klick
/// auf einen anderen Knoten erstellt die Kante. Ein Fehlschuss bricht die
/// laufende Geste ab.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeCreationMode {
    pending_source: Option<u64>,
}

impl EdgeCreationMode {
    /// Gibt den gemerkten Startknoten der laufenden Geste zurück.
    pub fn pending_source(&self) -> Option<u64> {
        self.pending_source
    }

    /// Bricht eine laufende Geste ab (z.B. bei Moduswechsel).
    pub fn cancel_pending(&mut self) {
        self.pending_source = None;
    }

    /// Verarbeitet einen aufgelösten Klick.
    pub fn handle_click(&mut self, ctx: &mut ModeContext, _scene_pos: Vec2, hits: &[PickHit]) {
        let hit_id = hits.first().and_then(|hit| ctx.resolve_hit(hit));

        let Some(target) = hit_id else {
            // Kein Knoten getroffen — laufende Geste abbrechen
            if self.pending_source.take().is_some() {
                ctx.clear_selection();
                log::debug!("Kanten-Modus: kein Knoten getroffen, Quelle zurückgesetzt");
            }
            return;
        };

        match self.pending_source.take() {
            None => {
                // Erster Klick: Quelle merken und als visuelles Feedback selektieren
                self.pending_source = Some(target);
                ctx.select_only(target);
                log::info!("Kanten-Modus: Startknoten {} gewählt", target);
            }
            Some(source) if source == target => {
                ctx.clear_selection();
                log::warn!("Selbst-Kante nicht erlaubt (Knoten {})", source);
            }
            Some(source) => {
                self.create_edge(ctx, source, target);
            }
        }
    }

    /// Zweiter Klick: Kante von `source` nach `target` erstellen.
    fn create_edge(&mut self, ctx: &mut ModeContext, source: u64, target: u64) {
        if ctx.shapes.has_line_between(source, target) {
            ctx.clear_selection();
            log::warn!("Kante {}→{} existiert bereits", source, target);
            return;
        }

        let start = ctx.shapes.get(source).map(|s| s.position());
        let end = ctx.shapes.get(target).map(|s| s.position());
        let (Some(start), Some(end)) = (start, end) else {
            ctx.clear_selection();
            log::warn!(
                "Kante nicht möglich: Knoten {} oder {} existiert nicht",
                source,
                target
            );
            return;
        };

        let id = ctx.shapes.spawn_line(
            source,
            target,
            start,
            end,
            ctx.options.line_width_scene,
            ctx.options.line_color,
            ctx.options.outline_color_default,
        );
        ctx.clear_selection();
        log::info!("Kante {}→{} erstellt (Shape {})", source, target, id);
    }
}
