//! Graph-Canvas-Editor — Headless-Demo.
//!
//! Skriptet eine kurze Editier-Sitzung über den Controller: Knoten
//! platzieren, Kante ziehen, Frame rendern. Dient als Smoke-Test der
//! öffentlichen API; die echte Fenster-Anbindung liefert ein Host.

use glam::Vec2;
use graph_canvas_editor::{
    AppController, AppIntent, AppState, EditorOptions, ModeKind, ShapeKind, SoftwareBackend,
};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Graph-Canvas-Editor v{} startet (Headless-Demo)...",
        env!("CARGO_PKG_VERSION")
    );

    // Optionen aus TOML laden (oder Standardwerte)
    let options = EditorOptions::load_from_file(&EditorOptions::config_path());

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();
    let mut backend = SoftwareBackend::new(Vec2::new(800.0, 600.0));

    let session = [
        AppIntent::ViewportResized {
            size: [800.0, 600.0],
        },
        // Drei Knoten im Knoten-Erstellungs-Modus
        AppIntent::CanvasClicked {
            window_pos: Vec2::new(200.0, 300.0),
        },
        AppIntent::CanvasClicked {
            window_pos: Vec2::new(400.0, 150.0),
        },
        AppIntent::CanvasClicked {
            window_pos: Vec2::new(600.0, 450.0),
        },
        // Kante zwischen den ersten beiden Knoten ziehen
        AppIntent::ModeSelected {
            mode: ModeKind::EdgeCreation,
        },
        AppIntent::CanvasClicked {
            window_pos: Vec2::new(200.0, 300.0),
        },
        AppIntent::CanvasClicked {
            window_pos: Vec2::new(400.0, 150.0),
        },
        // Expliziter Add-Shape-Pfad (Overlap-Unterdrückung inklusive)
        AppIntent::AddShapeRequested {
            kind: ShapeKind::Circle,
            window_pos: Vec2::new(650.0, 100.0),
        },
        AppIntent::RedrawRequested,
    ];

    for intent in session {
        controller.handle_intent(&mut state, &mut backend, intent)?;
    }

    log::info!(
        "Sitzung beendet: {} Knoten, {} Kanten, {} Draw-Aufrufe im letzten Frame",
        state.node_count(),
        state.edge_count(),
        backend.last_frame().len()
    );

    Ok(())
}
