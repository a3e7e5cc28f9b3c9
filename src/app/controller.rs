//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::render::RenderBackend;

/// Orchestriert UI-Events und Handler auf den AppState.
///
/// Das Backend kommt pro Aufruf herein; der Controller hält selbst keine
/// Render-Ressourcen.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        backend: &mut dyn RenderBackend,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, backend, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        backend: &mut dyn RenderBackend,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Viewport & Rendering ===
            AppCommand::SetViewportSize { size } => {
                handlers::view::set_viewport_size(state, backend, size)
            }
            AppCommand::Render => handlers::view::render(state, backend),

            // === Interaktion ===
            AppCommand::RegisterClick { window_pos } => {
                handlers::selection::register_click(state, backend, window_pos)?
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Editing ===
            AppCommand::AddShape { kind, window_pos } => {
                handlers::editing::add_shape(state, backend, kind, window_pos)?
            }
            AppCommand::SetMode { mode } => handlers::editing::set_mode(state, mode),
            AppCommand::DeleteSelected => handlers::editing::delete_selected(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => {
                state.should_exit = true;
                log::info!("Beenden angefordert");
            }
        }

        Ok(())
    }
}
