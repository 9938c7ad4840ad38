//! App actor - message loop processing UI events and loader responses

use std::time::Instant;

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::config::Config;
use crate::messages::{LoaderCommand, LoaderResponse, RenderState, UiEvent};

/// App actor that processes UI events and loader responses
pub struct AppActor {
    state: AppState,
    loader_tx: mpsc::UnboundedSender<LoaderCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        config: &Config,
        loader_tx: mpsc::UnboundedSender<LoaderCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(config.notification_ttl()),
            loader_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut loader_rx: mpsc::UnboundedReceiver<LoaderResponse>,
    ) {
        let cmd = self.state.begin_initial_load();
        self.send(cmd);
        self.publish();

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.loader_tx.send(LoaderCommand::Shutdown);
                        break;
                    }
                    self.publish();
                }
                Some(response) = loader_rx.recv() => {
                    if let Some(cmd) = self.state.handle_response(response) {
                        self.send(cmd);
                    }
                    self.publish();
                }
                else => break,
            }
        }
    }

    fn send(&self, cmd: LoaderCommand) {
        if self.loader_tx.send(cmd).is_err() {
            tracing::warn!("Loader is gone, command dropped");
        }
    }

    fn publish(&mut self) {
        self.state.notifications.dismiss_expired(Instant::now());
        let _ = self.render_tx.send(self.state.to_render_state());
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        tracing::debug!(?event, "UI event");
        match event {
            // Filters
            UiEvent::SetFilter(filter) => self.state.set_filter(filter),
            UiEvent::CycleFilter => self.state.cycle_filter(),

            // Table
            UiEvent::NextRow => self.state.next_row(),
            UiEvent::PrevRow => self.state.prev_row(),
            UiEvent::SelectRow => self.state.select_current_row(),
            UiEvent::ClosePanel => self.state.close_panel(),
            UiEvent::ToggleReviewed => self.state.toggle_current_row(),

            // File prompt
            UiEvent::OpenFilePrompt => self.state.open_file_prompt(),
            UiEvent::FilePromptChar(c) => self.state.file_prompt_char(c),
            UiEvent::FilePromptBackspace => self.state.file_prompt_backspace(),
            UiEvent::FilePromptAutocomplete => self.state.file_prompt_autocomplete(),
            UiEvent::CancelFilePrompt => self.state.cancel_file_prompt(),
            UiEvent::SubmitUpload => {
                if let Some(cmd) = self.state.submit_upload() {
                    self.send(cmd);
                }
            }

            // Export
            UiEvent::ExportCleaned => {
                let cmd = self.state.export_cleaned();
                self.send(cmd);
            }
            UiEvent::ExportSummary => {
                let cmd = self.state.export_summary();
                self.send(cmd);
            }

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
