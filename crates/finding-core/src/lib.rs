//! Core types and errors for the eBay Finding API client.
//!
//! This crate provides the foundational types used across the library:
//!
//! - **Types**: Strongly-typed representations of Finding API responses
//! - **Errors**: Comprehensive error handling with [`FindingError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use finding_core::{SearchResult, FindingError, Result};
//!
//! fn summarize(result: SearchResult) -> Result<()> {
//!     println!("Page {} of {}", result.page_number, result.total_pages);
//!     for item in &result.items {
//!         println!("{}: {}", item.title, item.current_price);
//!     }
//!     Ok(())
//! }
//! ```

mod error;
pub mod types;

pub use error::{FindingError, Result};
pub use types::*;
