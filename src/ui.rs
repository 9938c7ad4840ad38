//! Terminal rendering of the review screen

use ratatui::{prelude::*, widgets::*};

use crate::constants::APP_NAME;
use crate::filter::InvoiceFilter;
use crate::messages::RenderState;
use crate::models::{Invoice, InvoiceStatus};
use crate::notifications::{Notification, NotificationLevel};

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Upload bar
            Constraint::Length(1), // Filter tabs
            Constraint::Min(5),    // Table + details
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, main_chunks[0]);
    draw_upload_bar(f, state, main_chunks[1]);
    draw_filter_tabs(f, state, main_chunks[2]);

    if state.is_panel_open {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(main_chunks[3]);
        draw_table(f, state, body[0]);
        draw_details(f, state, body[1]);
    } else {
        draw_table(f, state, main_chunks[3]);
    }

    draw_status_bar(f, state, main_chunks[4]);

    // Popups
    if state.show_file_prompt {
        draw_file_prompt(f, state, area);
    }

    if state.show_help {
        draw_help_popup(f, area);
    }

    draw_notifications(f, &state.notifications, area);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(APP_NAME, Style::default().fg(Color::White).bold())).centered(),
        Line::from(Span::styled(
            "Upload your invoices to detect errors, warnings, and get suggestions.",
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn draw_upload_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let selected = if state.file_name.is_empty() {
        Span::styled("No file chosen", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(format!("Selected: {}", state.file_name))
    };

    let mut spans = vec![selected];
    if state.is_loading {
        spans.push(Span::styled("   Processing file...", Style::default().fg(Color::Cyan)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(" Upload Invoices (u: CSV/Excel file) ");

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_filter_tabs(f: &mut Frame, state: &RenderState, area: Rect) {
    let titles: Vec<String> = InvoiceFilter::ALL
        .iter()
        .zip(state.filter_counts)
        .enumerate()
        .map(|(i, (filter, count))| format!("{}:{} ({})", i + 1, filter.label(), count))
        .collect();
    let selected = InvoiceFilter::ALL
        .iter()
        .position(|f| *f == state.active_filter)
        .unwrap_or(0);

    f.render_widget(render_tabs(&titles, selected), area);
}

fn draw_table(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Validation Results ({}/{}) ", state.visible.len(), state.total));

    if state.visible.is_empty() && !state.is_loading {
        let empty = Paragraph::new("No invoices to display. Upload a file to get started!")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(["Invoice ID", "Supplier Name", "Status", "Error Detected", "Action"])
        .style(Style::default().fg(Color::Gray).bold());

    let rows: Vec<Row> = state.visible.iter().map(invoice_row).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Percentage(25),
            Constraint::Length(9),
            Constraint::Percentage(35),
            Constraint::Length(18),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Style::default().bg(Color::DarkGray))
    .highlight_symbol("> ");

    let mut table_state = TableState::default();
    if !state.visible.is_empty() {
        table_state.select(Some(state.cursor));
    }
    f.render_stateful_widget(table, area, &mut table_state);
}

fn invoice_row(invoice: &Invoice) -> Row<'static> {
    let action = if invoice.is_reviewed {
        Span::styled("Unmark", Style::default().fg(Color::Gray))
    } else {
        Span::styled("Mark as Reviewed", Style::default().fg(Color::Blue))
    };

    Row::new(vec![
        Cell::from(invoice.id.clone()).style(Style::default().bold()),
        Cell::from(invoice.supplier_name.clone()),
        Cell::from(Span::styled(
            invoice.status.label().to_string(),
            Style::default().fg(status_color(invoice.status)).bold(),
        )),
        Cell::from(invoice.error_detected.clone()),
        Cell::from(action),
    ])
}

fn draw_details(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Invoice Details (Esc: close) ");

    let Some(invoice) = &state.selected_invoice else {
        let hint = Paragraph::new("Select an invoice row to view details.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(hint, area);
        return;
    };

    let label = |text: &'static str| Line::from(Span::styled(text, Style::default().fg(Color::Gray).bold()));

    let mut lines = vec![
        label("Invoice ID"),
        Line::from(invoice.id.clone()),
        Line::default(),
        label("Supplier Name"),
        Line::from(invoice.supplier_name.clone()),
        Line::default(),
        label("Status"),
        Line::from(Span::styled(
            invoice.status.label().to_string(),
            Style::default().fg(status_color(invoice.status)).bold(),
        )),
        Line::default(),
        label("Error Detected"),
        Line::from(invoice.error_detected.clone()),
        Line::default(),
        label("Explanation"),
        Line::from(invoice.explanation.clone()),
    ];

    if invoice.has_suggested_fix() {
        lines.push(Line::default());
        lines.push(label("Suggested Fix"));
        lines.push(Line::from(invoice.suggested_fix.clone()));
    }

    lines.push(Line::default());
    lines.push(Line::from(if invoice.is_reviewed {
        Span::styled("[r] Unmark as Reviewed", Style::default().fg(Color::Gray))
    } else {
        Span::styled("[r] Mark as Reviewed", Style::default().fg(Color::Blue).bold())
    }));

    let details = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(details, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let text = if state.is_loading {
        String::from(" Loading... ")
    } else if let Some(err) = &state.load_error {
        format!(" Last load failed: {} ", err)
    } else {
        let loaded = state
            .loaded_at
            .as_deref()
            .map(|t| format!(" loaded {} |", t))
            .unwrap_or_default();
        format!(
            "{} ↑/↓:move | Enter:details | r:review | 1-3/f:filter | c:export cleaned | p:export summary | ?:help | q:quit ",
            loaded
        )
    };

    let style = if state.load_error.is_some() && !state.is_loading {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    f.render_widget(Paragraph::new(text).style(style), area);
}

fn draw_file_prompt(f: &mut Frame, state: &RenderState, area: Rect) {
    let popup_area = centered_rect(60, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Upload CSV/Excel File (Enter: upload, Tab: complete, Esc: cancel) ")
        .style(Style::default().bg(Color::Black));

    let content = if state.file_path_input.is_empty() {
        "Enter path to a .csv, .xls or .xlsx file...\n\nExample: ~/invoices/march.xlsx"
    } else {
        state.file_path_input.as_str()
    };

    let input = Paragraph::new(content).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(input, popup_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 GST INVOICE VALIDATOR - Keyboard Shortcuts

 TABLE
   ↑ / ↓  (k / j)     Move between invoices
   Enter              Open invoice details
   Esc                Close details
   r / Space          Mark / unmark as reviewed

 FILTERS
   1 / 2 / 3          All / Errors / Warnings
   f / Tab            Next filter

 FILES
   u                  Upload CSV/Excel file
   c                  Export cleaned file
   p                  Export summary report (PDF)

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn draw_notifications(f: &mut Frame, notifications: &[Notification], area: Rect) {
    let mut y = area.y + 1;
    for notification in notifications {
        let text = format!(" {} ", notification.message);
        let width = (text.chars().count() as u16 + 2).min(area.width);
        if y + 3 > area.y + area.height {
            break;
        }
        let toast_area = Rect::new(area.x + area.width - width, y, width, 3);

        let color = match notification.level {
            NotificationLevel::Info => Color::Blue,
            NotificationLevel::Error => Color::Red,
        };
        let toast = Paragraph::new(text)
            .style(Style::default().fg(Color::White).bg(color))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));

        f.render_widget(Clear, toast_area);
        f.render_widget(toast, toast_area);
        y += 3;
    }
}

/// Renders tabs
pub fn render_tabs<'a>(titles: &[String], selected: usize) -> Tabs<'a> {
    let titles: Vec<Line> = titles.iter().map(|t| Line::from(t.clone())).collect();

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .divider("|")
}

/// Status badge color
pub fn status_color(status: InvoiceStatus) -> Color {
    match status {
        InvoiceStatus::Error => Color::Red,
        InvoiceStatus::Warning => Color::Yellow,
        InvoiceStatus::Clean => Color::Green,
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
