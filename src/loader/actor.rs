//! Loader actor - runs delayed dataset loads and notification timers in Tokio

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::config::Config;
use crate::loader::source::InvoiceSource;
use crate::messages::{LoadKind, LoaderCommand, LoaderResponse};

/// Loader actor that turns commands into delayed responses
pub struct LoaderActor<S: InvoiceSource> {
    source: Arc<S>,
    load_delay: Duration,
    upload_delay: Duration,
    response_tx: mpsc::UnboundedSender<LoaderResponse>,
    tasks: JoinSet<()>,
}

impl<S: InvoiceSource> LoaderActor<S> {
    pub fn new(source: S, config: &Config, response_tx: mpsc::UnboundedSender<LoaderResponse>) -> Self {
        LoaderActor {
            source: Arc::new(source),
            load_delay: config.load_delay(),
            upload_delay: config.upload_delay(),
            response_tx,
            tasks: JoinSet::new(),
        }
    }

    /// Run the loader actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<LoaderCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(LoaderCommand::LoadInitial { id }) => {
                            self.spawn_load(id, LoadKind::Initial, String::new());
                        }

                        Some(LoaderCommand::ValidateUpload { id, file_name }) => {
                            self.spawn_load(id, LoadKind::Upload, file_name);
                        }

                        Some(LoaderCommand::ExpireNotification { id, after }) => {
                            let response_tx = self.response_tx.clone();
                            self.tasks.spawn(async move {
                                tokio::time::sleep(after).await;
                                let _ = response_tx.send(LoaderResponse::NotificationExpired { id });
                            });
                        }

                        Some(LoaderCommand::Shutdown) | None => {
                            self.tasks.abort_all();
                            break;
                        }
                    }
                }

                // Reap finished tasks
                Some(_result) = self.tasks.join_next() => {}
            }
        }
    }

    fn spawn_load(&mut self, id: u64, kind: LoadKind, file_name: String) {
        let delay = match kind {
            LoadKind::Initial => self.load_delay,
            LoadKind::Upload => self.upload_delay,
        };
        let source = Arc::clone(&self.source);
        let response_tx = self.response_tx.clone();

        self.tasks.spawn(async move {
            tracing::info!(id, kind = kind.as_str(), file_name = %file_name, "Loading invoices");
            tokio::time::sleep(delay).await;

            let result = match kind {
                LoadKind::Initial => source.load_initial(),
                LoadKind::Upload => source.validate_upload(&file_name),
            };

            let response = match result {
                Ok(invoices) => {
                    tracing::info!(id, count = invoices.len(), "Invoices loaded");
                    LoaderResponse::Loaded { id, kind, invoices }
                }
                Err(e) => {
                    tracing::warn!(id, error = %e, "Invoice load failed");
                    LoaderResponse::Failed { id, kind, message: format!("{:#}", e) }
                }
            };
            let _ = response_tx.send(response);
        });
    }
}
