//! Loader messages - communication between App and Loader layers

use std::time::Duration;

use crate::models::Invoice;

/// What a load was issued for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadKind {
    /// Dataset shown on startup
    Initial,
    /// Results for a selected file
    Upload,
}

impl LoadKind {
    pub fn as_str(&self) -> &str {
        match self {
            LoadKind::Initial => "initial",
            LoadKind::Upload => "upload",
        }
    }
}

/// Commands sent from App layer to Loader layer
#[derive(Debug, Clone)]
pub enum LoaderCommand {
    /// Fetch the startup dataset
    LoadInitial { id: u64 },
    /// "Upload" a file and fetch its validation results
    ValidateUpload { id: u64, file_name: String },
    /// Report back once a notification has outlived `after`
    ExpireNotification { id: u64, after: Duration },
    /// Shutdown the loader actor
    Shutdown,
}

/// Responses sent from Loader layer to App layer
#[derive(Debug, Clone)]
pub enum LoaderResponse {
    /// A dataset is ready
    Loaded {
        id: u64,
        kind: LoadKind,
        invoices: Vec<Invoice>,
    },
    /// The source reported an error
    Failed {
        id: u64,
        kind: LoadKind,
        message: String,
    },
    /// A notification reached the end of its lifetime
    NotificationExpired { id: u64 },
}
