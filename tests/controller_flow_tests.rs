use glam::Vec2;
use graph_canvas_editor::{
    AppCommand, AppController, AppIntent, AppState, ModeKind, ShapeKind, SoftwareBackend,
};

fn session() -> (AppController, AppState, SoftwareBackend) {
    let controller = AppController::new();
    let state = AppState::new();
    let backend = SoftwareBackend::new(Vec2::new(800.0, 600.0));
    (controller, state, backend)
}

fn click(
    controller: &mut AppController,
    state: &mut AppState,
    backend: &mut SoftwareBackend,
    x: f32,
    y: f32,
) {
    controller
        .handle_intent(
            state,
            backend,
            AppIntent::CanvasClicked {
                window_pos: Vec2::new(x, y),
            },
        )
        .expect("Klick sollte ohne Fehler durchlaufen");
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let (mut controller, mut state, mut backend) = session();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, &mut backend, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_click_on_empty_canvas_creates_node_at_scene_position() {
    let (mut controller, mut state, mut backend) = session();

    click(&mut controller, &mut state, &mut backend, 50.0, 50.0);

    assert_eq!(state.node_count(), 1);
    let expected = state.scene.window_to_scene(Vec2::new(50.0, 50.0));
    let node = state
        .scene
        .shapes()
        .iter()
        .next()
        .expect("Knoten erwartet");
    assert!((node.position() - expected).length() < 1e-6);
    // Neu erstellte Knoten sind nicht selektiert
    assert!(state.scene.selected().is_empty());
}

#[test]
fn test_click_near_existing_node_selects_instead_of_creating() {
    let (mut controller, mut state, mut backend) = session();

    click(&mut controller, &mut state, &mut backend, 200.0, 300.0);
    assert_eq!(state.node_count(), 1);

    // Zweiter Klick knapp daneben: Treffer, kein neuer Knoten
    click(&mut controller, &mut state, &mut backend, 205.0, 302.0);

    assert_eq!(state.node_count(), 1);
    assert_eq!(state.scene.selected().len(), 1);
    let node = state
        .scene
        .shapes()
        .iter()
        .next()
        .expect("Knoten erwartet");
    assert!(node.is_selected());
}

#[test]
fn test_edge_creation_gesture_connects_two_nodes() {
    let (mut controller, mut state, mut backend) = session();

    // Zwei Knoten im Knoten-Erstellungs-Modus
    click(&mut controller, &mut state, &mut backend, 200.0, 300.0);
    click(&mut controller, &mut state, &mut backend, 400.0, 150.0);
    assert_eq!(state.node_count(), 2);

    controller
        .handle_intent(
            &mut state,
            &mut backend,
            AppIntent::ModeSelected {
                mode: ModeKind::EdgeCreation,
            },
        )
        .expect("Moduswechsel sollte ohne Fehler durchlaufen");

    // Erster Klick: Quelle merken und hervorheben
    click(&mut controller, &mut state, &mut backend, 200.0, 300.0);
    assert!(state.scene.pending_edge_source().is_some());
    assert_eq!(state.scene.selected().len(), 1);

    // Zweiter Klick auf anderen Knoten: Kante entsteht
    click(&mut controller, &mut state, &mut backend, 400.0, 150.0);
    assert_eq!(state.edge_count(), 1);
    assert_eq!(state.scene.pending_edge_source(), None);

    // Dritter Klick ins Leere: keine weitere Kante
    click(&mut controller, &mut state, &mut backend, 700.0, 500.0);
    assert_eq!(state.edge_count(), 1);
    assert_eq!(state.scene.pending_edge_source(), None);
}

#[test]
fn test_edge_gesture_miss_cancels_pending_source() {
    let (mut controller, mut state, mut backend) = session();

    click(&mut controller, &mut state, &mut backend, 200.0, 300.0);
    controller
        .handle_intent(
            &mut state,
            &mut backend,
            AppIntent::ModeSelected {
                mode: ModeKind::EdgeCreation,
            },
        )
        .expect("Moduswechsel sollte ohne Fehler durchlaufen");

    click(&mut controller, &mut state, &mut backend, 200.0, 300.0);
    assert!(state.scene.pending_edge_source().is_some());

    click(&mut controller, &mut state, &mut backend, 700.0, 500.0);
    assert_eq!(state.scene.pending_edge_source(), None);
    assert!(state.scene.selected().is_empty());
    assert_eq!(state.edge_count(), 0);
}

#[test]
fn test_mode_switch_clears_every_highlight() {
    let (mut controller, mut state, mut backend) = session();

    // Knoten erstellen und selektieren
    click(&mut controller, &mut state, &mut backend, 200.0, 300.0);
    click(&mut controller, &mut state, &mut backend, 200.0, 300.0);
    assert_eq!(state.scene.selected().len(), 1);

    controller
        .handle_intent(
            &mut state,
            &mut backend,
            AppIntent::ModeSelected {
                mode: ModeKind::View,
            },
        )
        .expect("Moduswechsel sollte ohne Fehler durchlaufen");

    assert!(state.scene.selected().is_empty());
    let outline_default = state.scene.options().outline_color_default;
    for shape in state.scene.shapes().iter() {
        assert!(!shape.is_selected());
        assert_eq!(shape.highlight(), outline_default);
    }
}

#[test]
fn test_undo_redo_roundtrip_restores_node_count() {
    let (mut controller, mut state, mut backend) = session();

    click(&mut controller, &mut state, &mut backend, 200.0, 300.0);
    assert_eq!(state.node_count(), 1);
    assert!(state.can_undo());

    controller
        .handle_intent(&mut state, &mut backend, AppIntent::UndoRequested)
        .expect("Undo sollte ohne Fehler durchlaufen");
    assert_eq!(state.node_count(), 0);
    assert!(state.can_redo());

    controller
        .handle_intent(&mut state, &mut backend, AppIntent::RedoRequested)
        .expect("Redo sollte ohne Fehler durchlaufen");
    assert_eq!(state.node_count(), 1);
}

#[test]
fn test_delete_selected_removes_node_and_attached_edges() {
    let (mut controller, mut state, mut backend) = session();

    // Zwei Knoten plus Kante
    click(&mut controller, &mut state, &mut backend, 200.0, 300.0);
    click(&mut controller, &mut state, &mut backend, 400.0, 150.0);
    controller
        .handle_intent(
            &mut state,
            &mut backend,
            AppIntent::ModeSelected {
                mode: ModeKind::EdgeCreation,
            },
        )
        .expect("Moduswechsel sollte ohne Fehler durchlaufen");
    click(&mut controller, &mut state, &mut backend, 200.0, 300.0);
    click(&mut controller, &mut state, &mut backend, 400.0, 150.0);
    assert_eq!(state.edge_count(), 1);

    // Ersten Knoten wieder anwählen (erster Klick einer neuen Geste)
    click(&mut controller, &mut state, &mut backend, 200.0, 300.0);
    assert_eq!(state.scene.selected().len(), 1);

    controller
        .handle_intent(&mut state, &mut backend, AppIntent::DeleteSelectedRequested)
        .expect("Löschen sollte ohne Fehler durchlaufen");

    assert_eq!(state.node_count(), 1);
    assert_eq!(state.edge_count(), 0);
    assert!(state.scene.selected().is_empty());

    // Folgeklick mit verwaister Quelle darf nicht crashen
    click(&mut controller, &mut state, &mut backend, 400.0, 150.0);
}

#[test]
fn test_add_shape_requested_suppresses_overlap() {
    let (mut controller, mut state, mut backend) = session();

    let add = AppIntent::AddShapeRequested {
        kind: ShapeKind::Circle,
        window_pos: Vec2::new(300.0, 200.0),
    };
    controller
        .handle_intent(&mut state, &mut backend, add.clone())
        .expect("AddShape sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, &mut backend, add)
        .expect("AddShape sollte ohne Fehler durchlaufen");

    // Zweiter Versuch an gleicher Stelle wird unterdrückt
    assert_eq!(state.node_count(), 1);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::AddShape { kind, .. } => assert_eq!(*kind, ShapeKind::Circle),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_clear_selection_resets_flags() {
    let (mut controller, mut state, mut backend) = session();

    click(&mut controller, &mut state, &mut backend, 200.0, 300.0);
    click(&mut controller, &mut state, &mut backend, 200.0, 300.0);
    assert_eq!(state.scene.selected().len(), 1);

    controller
        .handle_intent(&mut state, &mut backend, AppIntent::ClearSelectionRequested)
        .expect("ClearSelection sollte ohne Fehler durchlaufen");

    assert!(state.scene.selected().is_empty());
    assert!(state.scene.shapes().iter().all(|s| !s.is_selected()));
}

#[test]
fn test_redraw_renders_all_shapes_in_registry_order() {
    let (mut controller, mut state, mut backend) = session();

    click(&mut controller, &mut state, &mut backend, 200.0, 300.0);
    click(&mut controller, &mut state, &mut backend, 400.0, 150.0);

    controller
        .handle_intent(&mut state, &mut backend, AppIntent::RedrawRequested)
        .expect("Redraw sollte ohne Fehler durchlaufen");

    // Clear + zwei Kreise
    assert_eq!(backend.last_frame().len(), 3);
}
