//! HTTP client for the eBay Finding API.
//!
//! This crate provides the main [`FindingClient`] for searching active and
//! sold listings, the [`SearchOption`] modifiers for tuning a query, and
//! the XML envelope decoding behind [`EnvelopeDecoder`].

mod client;
mod decode;
mod query;

pub use client::{FindingClient, FindingClientBuilder};
pub use decode::{EnvelopeDecoder, XmlDecoder};
pub use query::{QueryParams, SearchOption};
pub use finding_core::{FindingError, Result};
