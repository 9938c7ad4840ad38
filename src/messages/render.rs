//! Render state - data structure sent from App layer to UI for rendering

use crate::filter::InvoiceFilter;
use crate::models::Invoice;
use crate::notifications::Notification;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Table
    pub visible: Vec<Invoice>,
    pub total: usize,
    pub active_filter: InvoiceFilter,
    /// Badge counts in `InvoiceFilter::ALL` order
    pub filter_counts: [usize; 3],
    pub cursor: usize,

    // Details panel
    pub selected_invoice: Option<Invoice>,
    pub is_panel_open: bool,

    // Upload
    pub file_name: String,
    pub is_loading: bool,
    pub load_error: Option<String>,
    pub loaded_at: Option<String>,

    // Toasts, oldest first
    pub notifications: Vec<Notification>,

    // Popups
    pub show_help: bool,
    pub show_file_prompt: bool,
    pub file_path_input: String,
}

impl RenderState {
    pub fn key_context(&self) -> crate::messages::ui_events::KeyContext {
        crate::messages::ui_events::KeyContext {
            show_help: self.show_help,
            show_file_prompt: self.show_file_prompt,
            is_panel_open: self.is_panel_open,
        }
    }
}
