//! Ansichts-Modus: reine Selektion, keine Erstellung.

use glam::Vec2;

use super::{select_logic, ModeContext};
use crate::core::PickHit;

/// Modus: Klicks kippen nur die Selektion; im Pick-Pass sind alle
/// Shape-Arten scharfgeschaltet (auch Kanten).
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewMode;

impl ViewMode {
    /// Verarbeitet einen aufgelösten Klick.
    pub fn handle_click(&mut self, ctx: &mut ModeContext, _scene_pos: Vec2, hits: &[PickHit]) {
        select_logic(ctx, hits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ShapeRegistry;
    use crate::shared::EditorOptions;
    use indexmap::IndexSet;

    #[test]
    fn click_toggles_selection_and_never_creates() {
        let options = EditorOptions::default();
        let mut shapes = ShapeRegistry::new();
        let id = shapes.spawn_circle(
            Vec2::ZERO,
            options.node_radius_scene,
            options.node_fill_color,
            options.outline_color_default,
        );
        let mut selected = IndexSet::new();
        let mut mode = ViewMode;

        let mut ctx = ModeContext {
            shapes: &mut shapes,
            selected: &mut selected,
            options: &options,
        };
        mode.handle_click(&mut ctx, Vec2::new(0.5, 0.5), &[]);
        mode.handle_click(&mut ctx, Vec2::ZERO, &[PickHit { name: 0, depth: 0.0 }]);

        assert_eq!(shapes.len(), 1);
        assert!(selected.contains(&id));
    }
}
