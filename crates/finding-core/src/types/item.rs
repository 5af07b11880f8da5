use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single listing from a Finding API search
///
/// Every field is defaultable because the provider may omit any of them
/// depending on the listing and the output selectors requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Provider item identifier
    #[serde(default)]
    pub item_id: String,

    /// Listing title
    #[serde(default)]
    pub title: String,

    /// Seller location as reported by the provider
    #[serde(default)]
    pub location: String,

    /// Current price, converted to the marketplace currency
    #[serde(default)]
    pub current_price: f64,

    /// Cost of the cheapest shipping service
    #[serde(default)]
    pub shipping_price: f64,

    /// Buy-it-now price, if the listing has one
    #[serde(default)]
    pub buy_it_now_price: f64,

    /// Location codes the item ships to
    #[serde(default)]
    pub ships_to: Vec<String>,

    /// URL of the listing page
    #[serde(default)]
    pub listing_url: String,

    /// URL of the gallery image
    #[serde(default)]
    pub image_url: String,

    /// Marketplace the listing belongs to
    #[serde(default)]
    pub site: String,

    /// When the listing ends
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,

    /// Seller details, populated when the SellerInfo output selector
    /// was requested
    #[serde(default)]
    pub seller: Seller,
}

impl Item {
    /// Returns true if the listing has a buy-it-now price
    #[must_use]
    pub fn has_buy_it_now(&self) -> bool {
        self.buy_it_now_price > 0.0
    }

    /// Total of current price and shipping
    #[must_use]
    pub fn price_with_shipping(&self) -> f64 {
        self.current_price + self.shipping_price
    }
}

/// Seller details embedded in an [`Item`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    /// Seller username
    #[serde(default)]
    pub user_name: String,

    /// Feedback count
    #[serde(default)]
    pub feedback_score: i64,

    /// Positive feedback percentage (0-100)
    #[serde(default)]
    pub feedback_percent: f64,
}
