//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CanvasClicked { window_pos } => vec![AppCommand::RegisterClick { window_pos }],
        AppIntent::AddShapeRequested { kind, window_pos } => {
            vec![AppCommand::AddShape { kind, window_pos }]
        }
        AppIntent::ModeSelected { mode } => vec![AppCommand::SetMode { mode }],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelected],
        AppIntent::RedrawRequested => vec![AppCommand::Render],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
