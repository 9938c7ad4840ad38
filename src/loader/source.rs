//! Where validation results come from
//!
//! `MockInvoiceSource` stands in for a real upload/validate backend: it never
//! reads the file and always answers with the seed dataset.

use anyhow::Result;
use rand::seq::SliceRandom;

use crate::models::{seed_invoices, Invoice};

/// Produces validation results for the review screen
pub trait InvoiceSource: Send + Sync + 'static {
    /// Results shown when the application starts
    fn load_initial(&self) -> Result<Vec<Invoice>>;

    /// Results for a newly selected file
    fn validate_upload(&self, file_name: &str) -> Result<Vec<Invoice>>;
}

/// Serves the built-in sample dataset
#[derive(Clone, Debug, Default)]
pub struct MockInvoiceSource;

impl InvoiceSource for MockInvoiceSource {
    fn load_initial(&self) -> Result<Vec<Invoice>> {
        Ok(seed_invoices())
    }

    fn validate_upload(&self, file_name: &str) -> Result<Vec<Invoice>> {
        tracing::debug!(file_name, "Mock validation, file content is not read");
        let mut invoices = seed_invoices();
        invoices.shuffle(&mut rand::thread_rng());
        Ok(invoices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_is_seed() {
        assert_eq!(MockInvoiceSource.load_initial().unwrap(), seed_invoices());
    }

    #[test]
    fn test_upload_is_permutation_of_seed() {
        let mut uploaded = MockInvoiceSource.validate_upload("batch.csv").unwrap();
        uploaded.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(uploaded, seed_invoices());
        assert!(uploaded.iter().all(|i| !i.is_reviewed));
    }
}
