use serde::{Deserialize, Serialize};

/// Severity of a validation result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Error,
    Warning,
    Clean,
}

impl InvoiceStatus {
    /// Capitalised label used in the table and details panel
    pub fn label(&self) -> &str {
        match self {
            InvoiceStatus::Error => "Error",
            InvoiceStatus::Warning => "Warning",
            InvoiceStatus::Clean => "Clean",
        }
    }
}

/// A single invoice validation result
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub supplier_name: String,
    pub status: InvoiceStatus,
    pub error_detected: String,
    pub explanation: String,
    /// Empty only for clean invoices
    pub suggested_fix: String,
    #[serde(default)]
    pub is_reviewed: bool,
}

impl Invoice {
    pub fn new(
        id: impl Into<String>,
        supplier_name: impl Into<String>,
        status: InvoiceStatus,
        error_detected: impl Into<String>,
        explanation: impl Into<String>,
        suggested_fix: impl Into<String>,
    ) -> Self {
        Invoice {
            id: id.into(),
            supplier_name: supplier_name.into(),
            status,
            error_detected: error_detected.into(),
            explanation: explanation.into(),
            suggested_fix: suggested_fix.into(),
            is_reviewed: false,
        }
    }

    pub fn has_suggested_fix(&self) -> bool {
        !self.suggested_fix.is_empty()
    }
}

/// The fixed sample dataset shown on startup and after every simulated upload
pub fn seed_invoices() -> Vec<Invoice> {
    use crate::constants::NO_ISSUES_DETECTED;
    use InvoiceStatus::*;

    vec![
        Invoice::new(
            "INV001",
            "ABC Corp",
            Error,
            "GSTIN Mismatch",
            "The GSTIN provided for ABC Corp does not match the registered GSTIN.",
            "Verify the GSTIN with the supplier and update the record.",
        ),
        Invoice::new(
            "INV002",
            "XYZ Ltd",
            Warning,
            "Invoice Date Format",
            "Invoice date is in an unexpected format (DD/MM/YY instead of YYYY-MM-DD).",
            "Standardize date format to YYYY-MM-DD.",
        ),
        Invoice::new(
            "INV003",
            "PQR Solutions",
            Clean,
            NO_ISSUES_DETECTED,
            "This invoice appears to be valid.",
            "",
        ),
        Invoice::new(
            "INV004",
            "Global Traders",
            Error,
            "Duplicate Invoice ID",
            "This invoice ID (INV004) has been found previously in the uploaded batch.",
            "Investigate if this is a legitimate duplicate or an entry error.",
        ),
        Invoice::new(
            "INV005",
            "Tech Innovations",
            Warning,
            "Missing HSN/SAC Code",
            "HSN/SAC code is missing for one or more line items.",
            "Add the appropriate HSN/SAC code for all line items.",
        ),
        Invoice::new(
            "INV006",
            "Bright Future",
            Error,
            "Incorrect Tax Rate",
            "The applied GST rate (12%) does not match the standard rate (18%) for the product category.",
            "Correct the GST tax rate to the applicable standard rate.",
        ),
        Invoice::new(
            "INV007",
            "Creative Minds",
            Clean,
            NO_ISSUES_DETECTED,
            "This invoice appears to be valid.",
            "",
        ),
        Invoice::new(
            "INV008",
            "Digital Edge",
            Warning,
            "Round-off Difference",
            "A minor difference (INR 0.05) detected in the total amount due to rounding.",
            "Adjust the total amount to resolve the rounding discrepancy.",
        ),
    ]
}
