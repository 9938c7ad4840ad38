//! App state - pure data structure with no I/O logic

use std::time::Duration;

use crate::filter::{apply_filter, InvoiceFilter};
use crate::messages::RenderState;
use crate::models::Invoice;
use crate::notifications::NotificationQueue;

/// Main application state - pure data, no I/O
pub struct AppState {
    // Dataset
    pub invoices: Vec<Invoice>,
    pub loaded_at: Option<chrono::DateTime<chrono::Local>>,

    // Table
    pub active_filter: InvoiceFilter,
    pub cursor: usize,

    // Details panel
    pub selected_invoice: Option<Invoice>,
    pub is_panel_open: bool,

    // Upload / loading
    pub file_name: String,
    pub is_loading: bool,
    pub load_error: Option<String>,
    pub next_request_id: u64,
    /// Newest load issued and not yet applied
    pub pending_load_id: Option<u64>,
    /// Newest load whose result is on screen
    pub applied_load_id: Option<u64>,

    // Toasts
    pub notifications: NotificationQueue,

    // Popups
    pub show_help: bool,
    pub show_file_prompt: bool,
    pub file_path_input: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(NotificationQueue::default().ttl())
    }
}

impl AppState {
    pub fn new(notification_ttl: Duration) -> Self {
        AppState {
            invoices: Vec::new(),
            loaded_at: None,
            active_filter: InvoiceFilter::All,
            cursor: 0,
            selected_invoice: None,
            is_panel_open: false,
            file_name: String::new(),
            is_loading: false,
            load_error: None,
            next_request_id: 1,
            pending_load_id: None,
            applied_load_id: None,
            notifications: NotificationQueue::new(notification_ttl),
            show_help: false,
            show_file_prompt: false,
            file_path_input: String::new(),
        }
    }

    /// Generate a unique load ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Invoices matching the active filter, in list order
    pub fn visible_invoices(&self) -> Vec<&Invoice> {
        apply_filter(&self.invoices, self.active_filter)
    }

    /// Invoice under the table cursor
    pub fn current_invoice(&self) -> Option<&Invoice> {
        self.visible_invoices().get(self.cursor).copied()
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let mut filter_counts = [0; 3];
        for (slot, filter) in filter_counts.iter_mut().zip(InvoiceFilter::ALL) {
            *slot = filter.count(&self.invoices);
        }

        RenderState {
            visible: self.visible_invoices().into_iter().cloned().collect(),
            total: self.invoices.len(),
            active_filter: self.active_filter,
            filter_counts,
            cursor: self.cursor,
            selected_invoice: self.selected_invoice.clone(),
            is_panel_open: self.is_panel_open,
            file_name: self.file_name.clone(),
            is_loading: self.is_loading,
            load_error: self.load_error.clone(),
            loaded_at: self.loaded_at.map(|t| t.format("%H:%M:%S").to_string()),
            notifications: self.notifications.iter().cloned().collect(),
            show_help: self.show_help,
            show_file_prompt: self.show_file_prompt,
            file_path_input: self.file_path_input.clone(),
        }
    }
}
