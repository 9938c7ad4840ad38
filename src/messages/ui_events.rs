//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::filter::InvoiceFilter;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Filters
    SetFilter(InvoiceFilter),
    CycleFilter,

    // Table navigation
    NextRow,
    PrevRow,
    SelectRow,
    ClosePanel,
    ToggleReviewed,

    // File prompt
    OpenFilePrompt,
    FilePromptChar(char),
    FilePromptBackspace,
    FilePromptAutocomplete,
    SubmitUpload,
    CancelFilePrompt,

    // Export
    ExportCleaned,
    ExportSummary,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// UI context needed to map a key press
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyContext {
    pub show_help: bool,
    pub show_file_prompt: bool,
    pub is_panel_open: bool,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, ctx: KeyContext) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    // Popups swallow everything
    if ctx.show_help {
        return Some(UiEvent::CloseHelp);
    }

    if ctx.show_file_prompt {
        return match key.code {
            KeyCode::Esc => Some(UiEvent::CancelFilePrompt),
            KeyCode::Enter => Some(UiEvent::SubmitUpload),
            KeyCode::Tab => Some(UiEvent::FilePromptAutocomplete),
            KeyCode::Backspace => Some(UiEvent::FilePromptBackspace),
            KeyCode::Char(c) => Some(UiEvent::FilePromptChar(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('1') => Some(UiEvent::SetFilter(InvoiceFilter::All)),
        KeyCode::Char('2') => Some(UiEvent::SetFilter(InvoiceFilter::Errors)),
        KeyCode::Char('3') => Some(UiEvent::SetFilter(InvoiceFilter::Warnings)),
        KeyCode::Char('f') | KeyCode::Tab => Some(UiEvent::CycleFilter),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::NextRow),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::PrevRow),
        KeyCode::Enter => Some(UiEvent::SelectRow),
        KeyCode::Esc if ctx.is_panel_open => Some(UiEvent::ClosePanel),
        KeyCode::Char('r') | KeyCode::Char(' ') => Some(UiEvent::ToggleReviewed),
        KeyCode::Char('u') => Some(UiEvent::OpenFilePrompt),
        KeyCode::Char('c') => Some(UiEvent::ExportCleaned),
        KeyCode::Char('p') => Some(UiEvent::ExportSummary),
        _ => None,
    }
}
