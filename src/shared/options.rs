//! Zentrale Konfiguration für den Graph-Canvas-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::Color;

// ── Knoten ──────────────────────────────────────────────────────────

/// Standard-Radius neuer Knoten in Szenen-Einheiten.
pub const NODE_RADIUS_SCENE: f32 = 0.1;
/// Standard-Füllfarbe für Knoten (RGBA: Blau).
pub const NODE_FILL_COLOR: [f32; 4] = [0.2, 0.45, 0.85, 1.0];
/// Standard-Umrissfarbe unselektierter Shapes (RGBA: Dunkelgrau).
pub const OUTLINE_COLOR_DEFAULT: [f32; 4] = [0.12, 0.12, 0.12, 1.0];
/// Umrissfarbe selektierter Shapes (RGBA: Rot).
pub const OUTLINE_COLOR_SELECTED: [f32; 4] = [1.0, 0.15, 0.15, 1.0];

// ── Kanten ──────────────────────────────────────────────────────────

/// Linienstärke von Kanten in Szenen-Einheiten.
pub const LINE_WIDTH_SCENE: f32 = 0.02;
/// Farbe von Kanten (RGBA: nahezu Schwarz).
pub const LINE_COLOR: [f32; 4] = [0.15, 0.15, 0.15, 1.0];

// ── Selektion ───────────────────────────────────────────────────────

/// Kantenlänge des quadratischen Pick-Fensters in Screen-Pixeln.
pub const PICK_WINDOW_PX: f32 = 25.0;

// ── Hintergrund ─────────────────────────────────────────────────────

/// Hintergrundfarbe des Canvas (RGBA: Grau).
pub const BACKGROUND_COLOR: [f32; 4] = [139.0 / 255.0, 137.0 / 255.0, 137.0 / 255.0, 0.0];

// ── History ─────────────────────────────────────────────────────────

/// Maximale Tiefe der Undo/Redo-History.
pub const HISTORY_DEPTH: usize = 200;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `graph_canvas_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Knoten ──────────────────────────────────────────────────
    /// Radius neuer Knoten in Szenen-Einheiten
    pub node_radius_scene: f32,
    /// Füllfarbe neuer Knoten
    pub node_fill_color: Color,
    /// Umrissfarbe unselektierter Shapes
    pub outline_color_default: Color,
    /// Umrissfarbe selektierter Shapes
    pub outline_color_selected: Color,

    // ── Kanten ──────────────────────────────────────────────────
    /// Linienstärke von Kanten in Szenen-Einheiten
    pub line_width_scene: f32,
    /// Farbe von Kanten
    pub line_color: Color,

    // ── Selektion ───────────────────────────────────────────────
    /// Kantenlänge des quadratischen Pick-Fensters in Screen-Pixeln
    pub pick_window_px: f32,

    // ── Canvas ──────────────────────────────────────────────────
    /// Hintergrundfarbe des Canvas
    pub background_color: Color,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Tiefe der Undo/Redo-History
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
}

fn default_history_depth() -> usize {
    HISTORY_DEPTH
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            node_radius_scene: NODE_RADIUS_SCENE,
            node_fill_color: NODE_FILL_COLOR.into(),
            outline_color_default: OUTLINE_COLOR_DEFAULT.into(),
            outline_color_selected: OUTLINE_COLOR_SELECTED.into(),
            line_width_scene: LINE_WIDTH_SCENE,
            line_color: LINE_COLOR.into(),
            pick_window_px: PICK_WINDOW_PX,
            background_color: BACKGROUND_COLOR.into(),
            history_depth: HISTORY_DEPTH,
        }
    }
}

impl EditorOptions {
    /// Pfad der Options-Datei neben der Binary (Fallback: Arbeitsverzeichnis).
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("graph_canvas_editor.toml")
    }

    /// Lädt Optionen aus einer TOML-Datei; bei Fehlern Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(options) => options,
            Err(e) => {
                log::info!(
                    "Optionen nicht geladen ({}): Standardwerte aktiv — {:#}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Options-Datei {} nicht lesbar", path.display()))?;
        let options = toml::from_str(&content)
            .with_context(|| format!("Options-Datei {} nicht parsebar", path.display()))?;
        Ok(options)
    }

    /// Speichert die Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self).context("Optionen nicht serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Options-Datei {} nicht schreibbar", path.display()))?;
        log::info!("Optionen gespeichert: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_const_fallbacks() {
        let options = EditorOptions::default();
        assert_eq!(options.node_radius_scene, NODE_RADIUS_SCENE);
        assert_eq!(options.pick_window_px, PICK_WINDOW_PX);
        assert_eq!(options.node_fill_color, Color::from(NODE_FILL_COLOR));
        assert_eq!(options.history_depth, HISTORY_DEPTH);
    }

    #[test]
    fn toml_roundtrip_preserves_options() {
        let mut options = EditorOptions::default();
        options.node_radius_scene = 0.25;
        options.pick_window_px = 40.0;

        let toml_text = toml::to_string_pretty(&options).expect("serialisierbar");
        let restored: EditorOptions = toml::from_str(&toml_text).expect("parsebar");

        assert_eq!(restored.node_radius_scene, 0.25);
        assert_eq!(restored.pick_window_px, 40.0);
        assert_eq!(restored.line_color, options.line_color);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let options = EditorOptions::load_from_file(Path::new("/nonexistent/options.toml"));
        assert_eq!(options.node_radius_scene, NODE_RADIUS_SCENE);
    }
}
