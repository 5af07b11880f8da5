use super::Item;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One page of search results
///
/// Immutable once decoded; items are kept in the order the provider
/// returned them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Matching listings in document order
    #[serde(default)]
    pub items: Vec<Item>,

    /// When the provider produced the response
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,

    /// Page number of this result
    #[serde(default)]
    pub page_number: u32,

    /// Total pages available for the query
    #[serde(default)]
    pub total_pages: u32,

    /// Total entries across all pages
    #[serde(default)]
    pub total_entries: u32,
}

impl SearchResult {
    /// Returns true if this page has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items in this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if more pages are available after this one
    #[must_use]
    pub const fn has_more_pages(&self) -> bool {
        self.page_number < self.total_pages
    }
}

/// A provider-reported error
///
/// This is the body of the `errorMessage` envelope the Finding API
/// returns with a non-200 status; serde names match the wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Provider error identifier
    #[serde(default, rename = "errorId")]
    pub error_id: String,

    /// Service domain that produced the error
    #[serde(default)]
    pub domain: String,

    /// Severity (e.g. "Error", "Warning")
    #[serde(default)]
    pub severity: String,

    /// Category (e.g. "System", "Request")
    #[serde(default)]
    pub category: String,

    /// Human-readable message
    #[serde(default)]
    pub message: String,

    /// Subdomain within the service domain
    #[serde(default)]
    pub subdomain: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}/{}): {}", self.error_id, self.domain, self.severity, self.message)
    }
}
