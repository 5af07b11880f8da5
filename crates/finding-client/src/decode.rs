//! Response envelope decoding.
//!
//! The Finding API answers with one of two XML envelopes: a paged item
//! list on success, or a single `errorMessage` block otherwise. Decoding
//! lives behind [`EnvelopeDecoder`] so an alternate response format could
//! be substituted without touching query construction.

use chrono::{DateTime, Utc};
use finding_core::{ApiError, FindingError, Item, Result, SearchResult, Seller};
use serde::Deserialize;

/// Decodes raw provider envelopes into typed results
pub trait EnvelopeDecoder {
    /// Decode a success envelope into a [`SearchResult`]
    fn decode_search(&self, body: &str) -> Result<SearchResult>;

    /// Decode an error envelope into an [`ApiError`]
    fn decode_error(&self, body: &str) -> Result<ApiError>;
}

/// Envelope decoder for `RESPONSE-DATA-FORMAT=XML`
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlDecoder;

impl EnvelopeDecoder for XmlDecoder {
    fn decode_search(&self, body: &str) -> Result<SearchResult> {
        let envelope: FindItemsEnvelope = quick_xml::de::from_str(body)?;
        Ok(envelope.into())
    }

    fn decode_error(&self, body: &str) -> Result<ApiError> {
        let envelope: ErrorEnvelope = quick_xml::de::from_str(body)?;
        Ok(envelope.error)
    }
}

/// Route a response to the envelope its status calls for
///
/// Exactly one outcome per call: a decoded page, a provider error, or a
/// decode failure. Never a partial result.
pub(crate) fn decode_response<D: EnvelopeDecoder>(
    decoder: &D,
    status: u16,
    body: &str,
) -> Result<SearchResult> {
    if status == 200 {
        decoder.decode_search(body)
    } else {
        let error = decoder.decode_error(body)?;
        Err(FindingError::Api(error))
    }
}

// Wire shapes. The public model is flat; the provider nests prices and
// shipping under intermediate elements, so these mirror the document and
// are flattened on conversion.

#[derive(Debug, Deserialize)]
struct FindItemsEnvelope {
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(default, rename = "searchResult")]
    search_result: Option<SearchResultXml>,
    #[serde(default, rename = "paginationOutput")]
    pagination: Option<PaginationXml>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchResultXml {
    #[serde(default, rename = "item")]
    items: Vec<ItemXml>,
}

#[derive(Debug, Default, Deserialize)]
struct PaginationXml {
    #[serde(default, rename = "pageNumber")]
    page_number: u32,
    #[serde(default, rename = "totalPages")]
    total_pages: u32,
    #[serde(default, rename = "totalEntries")]
    total_entries: u32,
}

#[derive(Debug, Default, Deserialize)]
struct ItemXml {
    #[serde(default, rename = "itemId")]
    item_id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    location: String,
    #[serde(default, rename = "sellingStatus")]
    selling_status: Option<SellingStatusXml>,
    #[serde(default, rename = "shippingInfo")]
    shipping_info: Option<ShippingInfoXml>,
    #[serde(default, rename = "listingInfo")]
    listing_info: Option<ListingInfoXml>,
    #[serde(default, rename = "viewItemURL")]
    view_item_url: String,
    #[serde(default, rename = "galleryURL")]
    gallery_url: String,
    #[serde(default, rename = "globalId")]
    global_id: String,
    #[serde(default, rename = "sellerInfo")]
    seller_info: Option<SellerXml>,
}

#[derive(Debug, Default, Deserialize)]
struct SellingStatusXml {
    #[serde(default, rename = "convertedCurrentPrice")]
    converted_current_price: Option<PriceXml>,
}

#[derive(Debug, Default, Deserialize)]
struct ShippingInfoXml {
    #[serde(default, rename = "shippingServiceCost")]
    shipping_service_cost: Option<PriceXml>,
    #[serde(default, rename = "shipToLocations")]
    ship_to_locations: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ListingInfoXml {
    #[serde(default, rename = "buyItNowPrice")]
    buy_it_now_price: Option<PriceXml>,
    #[serde(default, rename = "endTime")]
    end_time: Option<String>,
}

/// Price element text; the currencyId attribute is ignored
#[derive(Debug, Default, Deserialize)]
struct PriceXml {
    #[serde(default, rename = "$text")]
    value: f64,
}

#[derive(Debug, Default, Deserialize)]
struct SellerXml {
    #[serde(default, rename = "sellerUserName")]
    user_name: String,
    #[serde(default, rename = "feedbackScore")]
    feedback_score: i64,
    #[serde(default, rename = "positiveFeedbackPercent")]
    positive_feedback_percent: f64,
}

// No default on the error block: a well-formed body without it (a proxy
// error page, say) is a schema mismatch, not a provider error.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

impl From<FindItemsEnvelope> for SearchResult {
    fn from(envelope: FindItemsEnvelope) -> Self {
        let pagination = envelope.pagination.unwrap_or_default();
        Self {
            items: envelope
                .search_result
                .unwrap_or_default()
                .items
                .into_iter()
                .map(Item::from)
                .collect(),
            timestamp: envelope.timestamp.as_deref().and_then(parse_timestamp),
            page_number: pagination.page_number,
            total_pages: pagination.total_pages,
            total_entries: pagination.total_entries,
        }
    }
}

impl From<ItemXml> for Item {
    fn from(raw: ItemXml) -> Self {
        let selling = raw.selling_status.unwrap_or_default();
        let shipping = raw.shipping_info.unwrap_or_default();
        let listing = raw.listing_info.unwrap_or_default();
        Self {
            item_id: raw.item_id,
            title: raw.title,
            location: raw.location,
            current_price: price_value(selling.converted_current_price),
            shipping_price: price_value(shipping.shipping_service_cost),
            buy_it_now_price: price_value(listing.buy_it_now_price),
            ships_to: shipping.ship_to_locations,
            listing_url: raw.view_item_url,
            image_url: raw.gallery_url,
            site: raw.global_id,
            end_time: listing.end_time.as_deref().and_then(parse_timestamp),
            seller: raw.seller_info.map(Seller::from).unwrap_or_default(),
        }
    }
}

impl From<SellerXml> for Seller {
    fn from(raw: SellerXml) -> Self {
        Self {
            user_name: raw.user_name,
            feedback_score: raw.feedback_score,
            feedback_percent: raw.positive_feedback_percent,
        }
    }
}

fn price_value(price: Option<PriceXml>) -> f64 {
    price.map_or(0.0, |p| p.value)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}
