//! RGBA-Farbwert für Shapes, Optionen und Render-Backend.

use serde::{Deserialize, Serialize};

/// Ein RGBA-Farbwert mit Kanälen im Bereich 0.0–1.0.
///
/// Kanalbereiche werden bewusst nicht validiert — Aufrufer-Verantwortung.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    /// Rot-Kanal
    pub r: f32,
    /// Grün-Kanal
    pub g: f32,
    /// Blau-Kanal
    pub b: f32,
    /// Alpha-Kanal
    pub a: f32,
}

impl Color {
    /// Erstellt eine Farbe aus vier Kanälen.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Erstellt eine deckende Farbe (Alpha = 1.0).
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        let c = Color::rgb(0.2, 0.4, 0.8);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn array_roundtrip() {
        let c = Color::rgba(0.1, 0.2, 0.3, 0.4);
        let arr: [f32; 4] = c.into();
        assert_eq!(Color::from(arr), c);
    }
}
