//! # GST Invoice Review TUI
//!
//! A terminal screen for triaging GST invoice validation results.
//!
//! ## Features
//! - Validation results table with All / Errors / Warnings filters
//! - Invoice details panel with explanation and suggested fix
//! - Mark / unmark invoices as reviewed
//! - Simulated CSV/Excel upload with path completion
//! - Cleaned-file and summary export actions
//! - Auto-dismissing toast notifications
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Loader Layer (Tokio runtime)

pub mod constants;
pub mod config;
pub mod models;
pub mod filter;
pub mod export;
pub mod notifications;
pub mod file_prompt;
pub mod ui;
pub mod messages;
pub mod app;
pub mod loader;

// Re-export commonly used types
pub use models::{seed_invoices, Invoice, InvoiceStatus};
pub use filter::{apply_filter, InvoiceFilter};
pub use export::{cleaned_selection, ExportKind};
pub use notifications::{Notification, NotificationLevel, NotificationQueue};
pub use config::Config;
pub use messages::{LoaderCommand, LoaderResponse, RenderState, UiEvent};
pub use app::{AppActor, AppState};
pub use loader::{InvoiceSource, LoaderActor, MockInvoiceSource};
