//! Rust client for the eBay Finding API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ebay_finding::{FindingClient, GlobalId, SearchOption, SortOrder};
//!
//! #[tokio::main]
//! async fn main() -> ebay_finding::Result<()> {
//!     let client = FindingClient::new("your-application-id");
//!
//!     // Search active listings
//!     let result = client
//!         .find_items_by_keywords(GlobalId::EbayUs, "DJM 900, DJM 850", &[
//!             SearchOption::page_size(10),
//!             SearchOption::sort_order(SortOrder::PricePlusShippingLowest),
//!         ])
//!         .await?;
//!
//!     println!("Page {} of {}", result.page_number, result.total_pages);
//!     for item in &result.items {
//!         println!("{}: {} ({})", item.title, item.current_price, item.listing_url);
//!     }
//!
//!     // What did comparable items actually sell for?
//!     let sold = client
//!         .find_sold_items(GlobalId::EbayUs, "DJM 900", &[SearchOption::page_size(10)])
//!         .await?;
//!     println!("{} sold listings", sold.total_entries);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

// Re-export core types
pub use finding_core::*;

// Re-export client
pub use finding_client::{
    EnvelopeDecoder, FindingClient, FindingClientBuilder, QueryParams, SearchOption, XmlDecoder,
};

// Re-export runtime for convenience
pub use serde;
pub use tokio;
