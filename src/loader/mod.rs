//! Loader layer - simulated upload/validate pipeline and timers
//!
//! The Loader actor receives load commands and sends back datasets.

pub mod actor;
pub mod source;

pub use actor::LoaderActor;
pub use source::{InvoiceSource, MockInvoiceSource};
