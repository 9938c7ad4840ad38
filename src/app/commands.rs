//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::constants::{MSG_EXPORT_CLEANED, MSG_EXPORT_SUMMARY, MSG_UPLOAD_DONE};
use crate::export::{cleaned_payload, cleaned_selection, ExportKind};
use crate::file_prompt;
use crate::filter::InvoiceFilter;
use crate::messages::{LoadKind, LoaderCommand, LoaderResponse};
use crate::models::Invoice;
use crate::notifications::NotificationLevel;

impl AppState {
    // ========================
    // Loading
    // ========================

    /// Start the startup load
    pub fn begin_initial_load(&mut self) -> LoaderCommand {
        let id = self.next_id();
        self.is_loading = true;
        self.pending_load_id = Some(id);
        LoaderCommand::LoadInitial { id }
    }

    /// Submit the path typed into the file prompt.
    ///
    /// Nothing is checked about the file itself; a second upload while
    /// one is in flight is allowed and its results win.
    pub fn submit_upload(&mut self) -> Option<LoaderCommand> {
        let input = std::mem::take(&mut self.file_path_input);
        self.show_file_prompt = false;

        let file_name = file_prompt::display_name(&input);
        if file_name.is_empty() {
            return None;
        }

        if let Some(previous) = self.pending_load_id {
            tracing::debug!(previous, "Upload supersedes pending load");
        }

        let id = self.next_id();
        self.file_name = file_name.clone();
        self.is_loading = true;
        self.pending_load_id = Some(id);
        tracing::info!(id, file_name = %file_name, "Upload submitted");

        Some(LoaderCommand::ValidateUpload { id, file_name })
    }

    // ========================
    // Loader responses
    // ========================

    pub fn handle_response(&mut self, response: LoaderResponse) -> Option<LoaderCommand> {
        match response {
            LoaderResponse::Loaded { id, kind, invoices } => {
                if self.is_stale(id) {
                    tracing::warn!(id, kind = kind.as_str(), "Dropping stale load result");
                    return None;
                }
                self.replace_invoices(invoices);
                self.finalize_load(id);
                match kind {
                    LoadKind::Initial => None,
                    LoadKind::Upload => Some(self.notify(MSG_UPLOAD_DONE, NotificationLevel::Info)),
                }
            }
            LoaderResponse::Failed { id, kind, message } => {
                if self.is_stale(id) {
                    tracing::warn!(id, kind = kind.as_str(), "Dropping stale load failure");
                    return None;
                }
                self.finalize_load(id);
                let text = format!("Could not load {} results: {}", kind.as_str(), message);
                self.load_error = Some(message);
                Some(self.notify(text, NotificationLevel::Error))
            }
            LoaderResponse::NotificationExpired { id } => {
                self.notifications.dismiss(id);
                None
            }
        }
    }

    fn replace_invoices(&mut self, invoices: Vec<Invoice>) {
        self.invoices = invoices;
        self.loaded_at = Some(chrono::Local::now());
        self.load_error = None;
        // Keep an open panel pointing at the fresh copy of its record
        if let Some(selected) = &self.selected_invoice {
            let fresh = self.invoices.iter().find(|i| i.id == selected.id).cloned();
            if fresh.is_some() {
                self.selected_invoice = fresh;
            }
        }
        self.clamp_cursor();
    }

    /// Older than what is already on screen
    fn is_stale(&self, id: u64) -> bool {
        self.applied_load_id.is_some_and(|applied| id <= applied)
    }

    /// Record `id` as applied; loading ends only once the newest issued load lands
    fn finalize_load(&mut self, id: u64) {
        self.applied_load_id = Some(id);
        if self.pending_load_id == Some(id) {
            self.is_loading = false;
            self.pending_load_id = None;
        } else {
            tracing::debug!(id, pending = ?self.pending_load_id, "Applied load, newer one still pending");
        }
    }

    // ========================
    // Notifications
    // ========================

    /// Show a toast and return the command that will expire it
    pub fn notify(&mut self, message: impl Into<String>, level: NotificationLevel) -> LoaderCommand {
        let message = message.into();
        tracing::info!(text = %message, ?level, "Notification");
        let id = self.notifications.enqueue(message, level);
        LoaderCommand::ExpireNotification {
            id,
            after: self.notifications.ttl(),
        }
    }

    // ========================
    // Review
    // ========================

    /// Flip the reviewed flag of `id`; unknown ids are ignored
    pub fn toggle_reviewed(&mut self, id: &str) {
        let Some(invoice) = self.invoices.iter_mut().find(|i| i.id == id) else {
            tracing::debug!(id, "Toggle for unknown invoice ignored");
            return;
        };
        invoice.is_reviewed = !invoice.is_reviewed;
        let is_reviewed = invoice.is_reviewed;

        if let Some(selected) = self.selected_invoice.as_mut() {
            if selected.id == id {
                selected.is_reviewed = is_reviewed;
            }
        }
    }

    /// Toggle the open invoice, or the row under the cursor
    pub fn toggle_current_row(&mut self) {
        let target = match (&self.selected_invoice, self.is_panel_open) {
            (Some(selected), true) => Some(selected.id.clone()),
            _ => self.current_invoice().map(|i| i.id.clone()),
        };
        if let Some(id) = target {
            self.toggle_reviewed(&id);
        }
    }

    // ========================
    // Details panel
    // ========================

    pub fn select_invoice(&mut self, invoice: Invoice) {
        self.selected_invoice = Some(invoice);
        self.is_panel_open = true;
    }

    pub fn select_current_row(&mut self) {
        if let Some(invoice) = self.current_invoice().cloned() {
            self.select_invoice(invoice);
        }
    }

    pub fn close_panel(&mut self) {
        self.is_panel_open = false;
        self.selected_invoice = None;
    }

    // ========================
    // Filters and cursor
    // ========================

    pub fn set_filter(&mut self, filter: InvoiceFilter) {
        self.active_filter = filter;
        self.clamp_cursor();
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.active_filter.next());
    }

    pub fn next_row(&mut self) {
        let len = self.visible_invoices().len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn prev_row(&mut self) {
        let len = self.visible_invoices().len();
        if len > 0 {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(len - 1);
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible_invoices().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    // ========================
    // Export
    // ========================

    pub fn export_cleaned(&mut self) -> LoaderCommand {
        let selection = cleaned_selection(&self.invoices);
        let ids: Vec<&str> = selection.iter().map(|i| i.id.as_str()).collect();
        match cleaned_payload(&self.invoices) {
            Ok(payload) => tracing::info!(
                kind = ExportKind::Cleaned.as_str(),
                count = selection.len(),
                ?ids,
                payload = %payload,
                "Exporting cleaned invoices"
            ),
            Err(e) => tracing::warn!(
                kind = ExportKind::Cleaned.as_str(),
                count = selection.len(),
                ?ids,
                error = %e,
                "Could not serialize cleaned export"
            ),
        }
        self.notify(MSG_EXPORT_CLEANED, NotificationLevel::Info)
    }

    pub fn export_summary(&mut self) -> LoaderCommand {
        tracing::info!(kind = ExportKind::Summary.as_str(), total = self.invoices.len(), "Exporting summary report (PDF)");
        self.notify(MSG_EXPORT_SUMMARY, NotificationLevel::Info)
    }

    // ========================
    // File prompt
    // ========================

    pub fn open_file_prompt(&mut self) {
        self.show_file_prompt = true;
    }

    pub fn file_prompt_char(&mut self, c: char) {
        self.file_path_input.push(c);
    }

    pub fn file_prompt_backspace(&mut self) {
        self.file_path_input.pop();
    }

    pub fn file_prompt_autocomplete(&mut self) {
        if let Some(completed) = file_prompt::complete_path(&self.file_path_input) {
            self.file_path_input = completed;
        }
    }

    pub fn cancel_file_prompt(&mut self) {
        self.show_file_prompt = false;
        self.file_path_input.clear();
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_invoices;

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        let cmd = state.begin_initial_load();
        let LoaderCommand::LoadInitial { id } = cmd else {
            panic!("expected initial load, got {:?}", cmd);
        };
        state.handle_response(LoaderResponse::Loaded {
            id,
            kind: LoadKind::Initial,
            invoices: seed_invoices(),
        });
        state
    }

    fn upload(state: &mut AppState, path: &str) -> u64 {
        state.open_file_prompt();
        for c in path.chars() {
            state.file_prompt_char(c);
        }
        match state.submit_upload() {
            Some(LoaderCommand::ValidateUpload { id, .. }) => id,
            other => panic!("expected upload command, got {:?}", other),
        }
    }

    #[test]
    fn test_initial_load_sets_and_clears_loading() {
        let mut state = AppState::default();
        state.begin_initial_load();
        assert!(state.is_loading);
        assert!(state.invoices.is_empty());

        let state = loaded_state();
        assert!(!state.is_loading);
        assert_eq!(state.invoices, seed_invoices());
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut state = loaded_state();
        state.toggle_reviewed("INV004");

        for invoice in &state.invoices {
            assert_eq!(invoice.is_reviewed, invoice.id == "INV004");
        }

        state.toggle_reviewed("INV004");
        assert_eq!(state.invoices, seed_invoices());
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut state = loaded_state();
        state.toggle_reviewed("INV999");
        assert_eq!(state.invoices, seed_invoices());
    }

    #[test]
    fn test_toggle_refreshes_selection() {
        let mut state = loaded_state();
        let invoice = state.invoices[1].clone();
        state.select_invoice(invoice);
        state.toggle_reviewed("INV002");
        assert_eq!(state.selected_invoice.as_ref().map(|i| i.is_reviewed), Some(true));

        // Other ids leave the selection alone
        state.toggle_reviewed("INV001");
        assert_eq!(state.selected_invoice.as_ref().map(|i| i.is_reviewed), Some(true));
    }

    #[test]
    fn test_select_and_close_panel() {
        let mut state = loaded_state();
        state.toggle_reviewed("INV003");
        state.set_filter(InvoiceFilter::All);
        state.cursor = 2;
        state.select_current_row();

        assert!(state.is_panel_open);
        let selected = state.selected_invoice.clone().unwrap();
        assert_eq!(selected.id, "INV003");
        assert!(selected.is_reviewed);

        state.close_panel();
        assert!(!state.is_panel_open);
        assert!(state.selected_invoice.is_none());

        // Closing again is harmless
        state.close_panel();
        assert!(!state.is_panel_open);
    }

    #[test]
    fn test_toggle_current_row_prefers_open_panel() {
        let mut state = loaded_state();
        state.select_invoice(state.invoices[5].clone());
        state.cursor = 0;
        state.toggle_current_row();
        assert!(state.invoices[5].is_reviewed);
        assert!(!state.invoices[0].is_reviewed);

        state.close_panel();
        state.toggle_current_row();
        assert!(state.invoices[0].is_reviewed);
    }

    #[test]
    fn test_filter_clamps_cursor() {
        let mut state = loaded_state();
        state.cursor = 7;
        state.set_filter(InvoiceFilter::Errors);
        assert_eq!(state.cursor, 2);
        assert_eq!(state.current_invoice().map(|i| i.id.as_str()), Some("INV006"));
    }

    #[test]
    fn test_row_navigation_wraps() {
        let mut state = loaded_state();
        state.set_filter(InvoiceFilter::Warnings);
        state.prev_row();
        assert_eq!(state.cursor, 2);
        state.next_row();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_upload_replaces_with_permutation() {
        let mut state = loaded_state();
        state.toggle_reviewed("INV001");

        let id = upload(&mut state, "/data/march.csv");
        assert!(state.is_loading);
        assert_eq!(state.file_name, "march.csv");
        assert!(!state.show_file_prompt);
        assert!(state.file_path_input.is_empty());

        let mut shuffled = seed_invoices();
        shuffled.reverse();
        let expire = state.handle_response(LoaderResponse::Loaded {
            id,
            kind: LoadKind::Upload,
            invoices: shuffled,
        });

        assert!(!state.is_loading);
        assert!(matches!(expire, Some(LoaderCommand::ExpireNotification { .. })));
        assert_eq!(
            state.notifications.iter().last().map(|n| n.message.as_str()),
            Some(MSG_UPLOAD_DONE)
        );

        let mut ids: Vec<&str> = state.invoices.iter().map(|i| i.id.as_str()).collect();
        ids.sort();
        assert_eq!(ids, vec!["INV001", "INV002", "INV003", "INV004", "INV005", "INV006", "INV007", "INV008"]);
        assert!(state.invoices.iter().all(|i| !i.is_reviewed));
    }

    #[test]
    fn test_empty_upload_is_ignored() {
        let mut state = loaded_state();
        state.open_file_prompt();
        state.file_prompt_char(' ');
        assert!(state.submit_upload().is_none());
        assert!(!state.is_loading);
        assert!(!state.show_file_prompt);
        assert!(state.file_name.is_empty());
    }

    #[test]
    fn test_newest_load_wins() {
        let mut state = loaded_state();
        let first = upload(&mut state, "a.csv");
        let second = upload(&mut state, "b.xlsx");
        assert_eq!(state.file_name, "b.xlsx");

        let mut reversed = seed_invoices();
        reversed.reverse();

        // Second finishes first
        state.handle_response(LoaderResponse::Loaded {
            id: second,
            kind: LoadKind::Upload,
            invoices: reversed.clone(),
        });
        assert!(!state.is_loading);

        let ignored = state.handle_response(LoaderResponse::Loaded {
            id: first,
            kind: LoadKind::Upload,
            invoices: seed_invoices(),
        });
        assert!(ignored.is_none());
        assert_eq!(state.invoices, reversed);
    }

    #[test]
    fn test_earlier_completion_applies_while_newer_pending() {
        let mut state = loaded_state();
        let first = upload(&mut state, "a.csv");
        let _second = upload(&mut state, "b.csv");

        let mut reversed = seed_invoices();
        reversed.reverse();
        state.handle_response(LoaderResponse::Loaded {
            id: first,
            kind: LoadKind::Upload,
            invoices: reversed.clone(),
        });
        assert!(state.is_loading);
        assert_eq!(state.invoices, reversed);
    }

    #[test]
    fn test_upload_during_initial_load_keeps_initial_dataset() {
        let mut state = AppState::default();
        let LoaderCommand::LoadInitial { id: initial } = state.begin_initial_load() else {
            panic!("expected initial load");
        };
        let upload_id = upload(&mut state, "a.csv");

        let none = state.handle_response(LoaderResponse::Loaded {
            id: initial,
            kind: LoadKind::Initial,
            invoices: seed_invoices(),
        });
        assert!(none.is_none());
        assert_eq!(state.invoices, seed_invoices());
        assert!(state.is_loading);

        let mut shuffled = seed_invoices();
        shuffled.rotate_left(3);
        let expire = state.handle_response(LoaderResponse::Loaded {
            id: upload_id,
            kind: LoadKind::Upload,
            invoices: shuffled.clone(),
        });
        assert!(matches!(expire, Some(LoaderCommand::ExpireNotification { .. })));
        assert_eq!(state.invoices, shuffled);
        assert!(!state.is_loading);
        assert!(state.pending_load_id.is_none());
    }

    #[test]
    fn test_failed_load_keeps_previous_list() {
        let mut state = loaded_state();
        let id = upload(&mut state, "broken.xls");
        let cmd = state.handle_response(LoaderResponse::Failed {
            id,
            kind: LoadKind::Upload,
            message: String::from("parse error"),
        });

        assert!(cmd.is_some());
        assert!(!state.is_loading);
        assert_eq!(state.load_error.as_deref(), Some("parse error"));
        assert_eq!(state.invoices, seed_invoices());
        let last = state.notifications.iter().last().unwrap();
        assert_eq!(last.level, NotificationLevel::Error);
    }

    #[test]
    fn test_exports_notify() {
        let mut state = loaded_state();
        state.export_cleaned();
        state.export_summary();

        let messages: Vec<&str> = state.notifications.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec![MSG_EXPORT_CLEANED, MSG_EXPORT_SUMMARY]);
        // Exports never touch the data
        assert_eq!(state.invoices, seed_invoices());
    }

    #[test]
    fn test_notification_expiry_dismisses() {
        let mut state = loaded_state();
        let LoaderCommand::ExpireNotification { id, after } = state.export_summary() else {
            panic!("expected expiry command");
        };
        assert_eq!(after.as_millis(), 3000);

        state.handle_response(LoaderResponse::NotificationExpired { id });
        assert!(state.notifications.is_empty());
        state.handle_response(LoaderResponse::NotificationExpired { id });
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_render_state_counts() {
        let state = loaded_state();
        let render = state.to_render_state();
        assert_eq!(render.filter_counts, [8, 3, 3]);
        assert_eq!(render.visible.len(), 8);
        assert!(render.loaded_at.is_some());
    }
}
