//! Headless-Referenz-Backend mit geometrischem Hit-Testing.
//!
//! Führt echte Distanz-Tests gegen die Pick-Region aus und protokolliert
//! alle Draw-Aufrufe pro Frame, sodass Tests Zeichenreihenfolge und
//! Hintergrundfarbe prüfen können, ohne eine GPU zu benötigen.

use glam::Vec2;

use super::{PickOutcome, RenderBackend};
use crate::core::{Color, PickHit};

/// Ein protokollierter Draw-Aufruf eines Frames.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    /// Frame-Beginn mit Hintergrundfarbe
    Clear(Color),
    /// Gefüllter Kreis mit Umriss
    Circle {
        /// Zentrum in Szenen-Koordinaten
        center: Vec2,
        /// Radius in Szenen-Einheiten
        radius: f32,
        /// Füllfarbe
        fill: Color,
        /// Umrissfarbe
        outline: Color,
    },
    /// Liniensegment
    Line {
        /// Startpunkt
        start: Vec2,
        /// Endpunkt
        end: Vec2,
        /// Linienstärke
        width: f32,
        /// Farbe
        color: Color,
    },
}

/// Laufender Pick-Pass: Region, aktueller Name, gesammelte Kandidaten.
#[derive(Debug, Clone)]
struct PickPass {
    center: Vec2,
    radius: f32,
    current_name: u32,
    candidates: Vec<PickHit>,
}

/// Software-Backend: Referenzimplementierung ohne Render-Oberfläche.
#[derive(Debug, Clone, Default)]
pub struct SoftwareBackend {
    size: Vec2,
    current_frame: Vec<DrawCall>,
    last_frame: Vec<DrawCall>,
    frame_count: usize,
    pick: Option<PickPass>,
}

impl SoftwareBackend {
    /// Erstellt ein Backend mit der übergebenen Viewport-Größe.
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Gibt die zuletzt übernommene Viewport-Größe zurück.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Gibt die Draw-Aufrufe des zuletzt abgeschlossenen Frames zurück.
    pub fn last_frame(&self) -> &[DrawCall] {
        &self.last_frame
    }

    /// Gibt die Anzahl abgeschlossener Frames zurück.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    fn record(&mut self, call: DrawCall) {
        self.current_frame.push(call);
    }
}

impl RenderBackend for SoftwareBackend {
    fn resize(&mut self, size: Vec2) {
        self.size = size;
    }

    fn begin_frame(&mut self, clear: Color) {
        self.current_frame.clear();
        self.current_frame.push(DrawCall::Clear(clear));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, fill: Color, outline: Color) {
        if let Some(pass) = self.pick.as_mut() {
            let depth = center.distance(pass.center);
            if depth <= radius + pass.radius {
                pass.candidates.push(PickHit {
                    name: pass.current_name,
                    depth,
                });
            }
            return;
        }
        self.record(DrawCall::Circle {
            center,
            radius,
            fill,
            outline,
        });
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, width: f32, color: Color) {
        if let Some(pass) = self.pick.as_mut() {
            let depth = segment_distance(pass.center, start, end);
            if depth <= width * 0.5 + pass.radius {
                pass.candidates.push(PickHit {
                    name: pass.current_name,
                    depth,
                });
            }
            return;
        }
        self.record(DrawCall::Line {
            start,
            end,
            width,
            color,
        });
    }

    fn end_frame(&mut self) {
        self.last_frame = std::mem::take(&mut self.current_frame);
        self.frame_count += 1;
    }

    fn begin_pick(&mut self, center: Vec2, radius: f32) {
        if self.pick.is_some() {
            log::warn!("begin_pick während laufendem Pick-Pass — alter Pass wird verworfen");
        }
        self.pick = Some(PickPass {
            center,
            radius,
            current_name: 0,
            candidates: Vec::new(),
        });
    }

    fn load_name(&mut self, name: u32) {
        if let Some(pass) = self.pick.as_mut() {
            pass.current_name = name;
        } else {
            log::warn!("load_name({}) ohne aktiven Pick-Pass ignoriert", name);
        }
    }

    fn end_pick(&mut self, out: &mut [PickHit]) -> PickOutcome {
        let Some(mut pass) = self.pick.take() else {
            log::warn!("end_pick ohne aktiven Pick-Pass");
            return PickOutcome::Complete(0);
        };

        if pass.candidates.len() > out.len() {
            return PickOutcome::Overflow;
        }

        // Nächster Treffer zuerst; Modi dürfen sich darauf nicht verlassen.
        pass.candidates
            .sort_by(|a, b| a.depth.total_cmp(&b.depth));
        for (slot, hit) in out.iter_mut().zip(pass.candidates.iter()) {
            *slot = *hit;
        }
        PickOutcome::Complete(pass.candidates.len())
    }
}

/// Kürzester Abstand eines Punkts zu einem Liniensegment.
fn segment_distance(point: Vec2, start: Vec2, end: Vec2) -> f32 {
    let segment = end - start;
    let length_sq = segment.length_squared();
    if length_sq <= f32::EPSILON {
        return point.distance(start);
    }
    let t = ((point - start).dot(segment) / length_sq).clamp(0.0, 1.0);
    point.distance(start + segment * t)
}
