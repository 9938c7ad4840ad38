//! Export selections
//!
//! Exports only pick the records that would be written. No file is produced.

use crate::models::{Invoice, InvoiceStatus};

/// Which export the user requested
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportKind {
    /// Clean or reviewed invoices
    Cleaned,
    /// Summary report (PDF)
    Summary,
}

impl ExportKind {
    pub fn as_str(&self) -> &str {
        match self {
            ExportKind::Cleaned => "cleaned",
            ExportKind::Summary => "summary",
        }
    }
}

/// Invoices that belong in the cleaned export: clean, or reviewed by the user
pub fn cleaned_selection(invoices: &[Invoice]) -> Vec<&Invoice> {
    invoices
        .iter()
        .filter(|i| i.status == InvoiceStatus::Clean || i.is_reviewed)
        .collect()
}

/// JSON body of the cleaned export, statuses in their serialized lowercase form
pub fn cleaned_payload(invoices: &[Invoice]) -> serde_json::Result<String> {
    serde_json::to_string(&cleaned_selection(invoices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_invoices;

    #[test]
    fn test_cleaned_on_unreviewed_seed() {
        let seed = seed_invoices();
        let ids: Vec<&str> = cleaned_selection(&seed).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["INV003", "INV007"]);
    }

    #[test]
    fn test_cleaned_includes_reviewed() {
        let mut seed = seed_invoices();
        seed[0].is_reviewed = true;
        seed[7].is_reviewed = true;
        let ids: Vec<&str> = cleaned_selection(&seed).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["INV001", "INV003", "INV007", "INV008"]);
    }

    #[test]
    fn test_cleaned_payload_matches_selection() {
        let mut seed = seed_invoices();
        seed[1].is_reviewed = true;
        let payload = cleaned_payload(&seed).unwrap();

        let parsed: Vec<Invoice> = serde_json::from_str(&payload).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].id, "INV002");
        assert!(payload.contains("\"status\":\"warning\""));
        assert!(payload.contains("\"isReviewed\":true"));
    }
}
