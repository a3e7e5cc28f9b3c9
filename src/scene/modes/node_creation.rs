//! Knoten-Erstellungs-Modus.

use glam::Vec2;

use super::{select_logic, ModeContext};
use crate::core::PickHit;

/// Modus: Klick ins Leere legt einen neuen Knoten an, Klick auf einen
/// bestehenden Knoten kippt dessen Selektion.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeCreationMode;

impl NodeCreationMode {
    /// Verarbeitet einen aufgelösten Klick.
    ///
    /// Erstellung feuert nur bei einem echten Fehlschuss; Treffer laufen
    /// über das gemeinsame Selektionsverhalten. So entstehen keine
    /// überlappenden Knoten.
    pub fn handle_click(&mut self, ctx: &mut ModeContext, scene_pos: Vec2, hits: &[PickHit]) {
        if hits.is_empty() {
            let id = ctx.shapes.spawn_circle(
                scene_pos,
                ctx.options.node_radius_scene,
                ctx.options.node_fill_color,
                ctx.options.outline_color_default,
            );
            log::info!(
                "Knoten {} an ({:.2}, {:.2}) erstellt",
                id,
                scene_pos.x,
                scene_pos.y
            );
        }

        select_logic(ctx, hits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ShapeKind, ShapeRegistry};
    use crate::shared::EditorOptions;
    use indexmap::IndexSet;

    fn with_context<R>(
        shapes: &mut ShapeRegistry,
        selected: &mut IndexSet<u64>,
        f: impl FnOnce(&mut ModeContext) -> R,
    ) -> R {
        let options = EditorOptions::default();
        let mut ctx = ModeContext {
            shapes,
            selected,
            options: &options,
        };
        f(&mut ctx)
    }

    #[test]
    fn miss_creates_node_at_click_position() {
        let mut shapes = ShapeRegistry::new();
        let mut selected = IndexSet::new();
        let mut mode = NodeCreationMode;

        with_context(&mut shapes, &mut selected, |ctx| {
            mode.handle_click(ctx, Vec2::new(0.3, -0.2), &[]);
        });

        assert_eq!(shapes.len(), 1);
        let node = shapes.iter().next().expect("Knoten erwartet");
        assert_eq!(node.kind(), ShapeKind::Circle);
        assert_eq!(node.position(), Vec2::new(0.3, -0.2));
        // Neu erstellte Knoten sind nicht selektiert
        assert!(selected.is_empty());
    }

    #[test]
    fn hit_toggles_selection_instead_of_creating() {
        let mut shapes = ShapeRegistry::new();
        let mut selected = IndexSet::new();
        let options = EditorOptions::default();
        let id = shapes.spawn_circle(
            Vec2::ZERO,
            options.node_radius_scene,
            options.node_fill_color,
            options.outline_color_default,
        );
        let mut mode = NodeCreationMode;

        with_context(&mut shapes, &mut selected, |ctx| {
            mode.handle_click(ctx, Vec2::ZERO, &[PickHit { name: 0, depth: 0.0 }]);
        });

        assert_eq!(shapes.len(), 1);
        assert!(selected.contains(&id));
        assert!(shapes.get(id).expect("Knoten erwartet").is_selected());
    }
}
