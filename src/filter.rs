//! Filter projection over the invoice list
//!
//! The projection is recomputed from the source list on every render,
//! so it can never drift from the data it is derived from.

use crate::models::{Invoice, InvoiceStatus};

/// Which subset of invoices the table shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InvoiceFilter {
    #[default]
    All,
    Errors,
    Warnings,
}

impl InvoiceFilter {
    /// Filters in tab order
    pub const ALL: [InvoiceFilter; 3] = [InvoiceFilter::All, InvoiceFilter::Errors, InvoiceFilter::Warnings];

    pub fn label(&self) -> &str {
        match self {
            InvoiceFilter::All => "All",
            InvoiceFilter::Errors => "Errors",
            InvoiceFilter::Warnings => "Warnings",
        }
    }

    pub fn next(&self) -> InvoiceFilter {
        match self {
            InvoiceFilter::All => InvoiceFilter::Errors,
            InvoiceFilter::Errors => InvoiceFilter::Warnings,
            InvoiceFilter::Warnings => InvoiceFilter::All,
        }
    }

    pub fn matches(&self, invoice: &Invoice) -> bool {
        match self {
            InvoiceFilter::All => true,
            InvoiceFilter::Errors => invoice.status == InvoiceStatus::Error,
            InvoiceFilter::Warnings => invoice.status == InvoiceStatus::Warning,
        }
    }

    /// Number of invoices this filter would show (tab badge)
    pub fn count(&self, invoices: &[Invoice]) -> usize {
        invoices.iter().filter(|i| self.matches(i)).count()
    }
}

/// Ordered subset of `invoices` matching `filter`
pub fn apply_filter(invoices: &[Invoice], filter: InvoiceFilter) -> Vec<&Invoice> {
    invoices.iter().filter(|i| filter.matches(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_invoices;

    fn ids(invoices: &[&Invoice]) -> Vec<String> {
        invoices.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_all_keeps_order() {
        let seed = seed_invoices();
        let visible = apply_filter(&seed, InvoiceFilter::All);
        assert_eq!(visible.len(), seed.len());
        assert!(visible.iter().zip(seed.iter()).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_errors_only() {
        let seed = seed_invoices();
        let visible = apply_filter(&seed, InvoiceFilter::Errors);
        assert_eq!(ids(&visible), vec!["INV001", "INV004", "INV006"]);
    }

    #[test]
    fn test_warnings_only() {
        let seed = seed_invoices();
        let visible = apply_filter(&seed, InvoiceFilter::Warnings);
        assert_eq!(ids(&visible), vec!["INV002", "INV005", "INV008"]);
    }

    #[test]
    fn test_projection_follows_source_order() {
        let mut list = seed_invoices();
        list.reverse();
        let visible = apply_filter(&list, InvoiceFilter::Errors);
        assert_eq!(ids(&visible), vec!["INV006", "INV004", "INV001"]);
    }

    #[test]
    fn test_projection_is_exact_subset() {
        let seed = seed_invoices();
        for filter in InvoiceFilter::ALL {
            let visible = apply_filter(&seed, filter);
            let expected: Vec<&Invoice> = seed.iter().filter(|i| filter.matches(i)).collect();
            assert_eq!(visible, expected);
            assert_eq!(filter.count(&seed), visible.len());
        }
    }

    #[test]
    fn test_empty_list() {
        assert!(apply_filter(&[], InvoiceFilter::All).is_empty());
        assert_eq!(InvoiceFilter::Warnings.count(&[]), 0);
    }

    #[test]
    fn test_next_cycles() {
        let mut f = InvoiceFilter::All;
        for _ in 0..3 {
            f = f.next();
        }
        assert_eq!(f, InvoiceFilter::All);
    }
}
