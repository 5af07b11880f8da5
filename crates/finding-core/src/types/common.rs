use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Marketplace identifier (`GLOBAL-ID` request parameter)
///
/// The closed variants cover the storefronts this library is tested
/// against; anything else can be passed through with [`GlobalId::Other`].
/// The provider validates the value, not this library. Serde goes
/// through the wire strings, not variant names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GlobalId {
    /// United States (EBAY-US)
    EbayUs,
    /// France (EBAY-FR)
    EbayFr,
    /// Germany (EBAY-DE)
    EbayDe,
    /// Italy (EBAY-IT)
    EbayIt,
    /// Spain (EBAY-ES)
    EbayEs,
    /// Any other marketplace identifier, passed through verbatim
    Other(String),
}

impl GlobalId {
    /// Returns the wire representation of the marketplace identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::EbayUs => "EBAY-US",
            Self::EbayFr => "EBAY-FR",
            Self::EbayDe => "EBAY-DE",
            Self::EbayIt => "EBAY-IT",
            Self::EbayEs => "EBAY-ES",
            Self::Other(id) => id,
        }
    }
}

impl std::fmt::Display for GlobalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for GlobalId {
    fn from(s: &str) -> Self {
        match s {
            "EBAY-US" => Self::EbayUs,
            "EBAY-FR" => Self::EbayFr,
            "EBAY-DE" => Self::EbayDe,
            "EBAY-IT" => Self::EbayIt,
            "EBAY-ES" => Self::EbayEs,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Serialize for GlobalId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GlobalId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}

/// Result ordering (`sortOrder` request parameter)
///
/// [`SortOrder::Default`] serializes to the empty string, which requests
/// the provider's default ordering. Unrecognized values go through
/// [`SortOrder::Other`] untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Provider default ordering (empty string on the wire)
    Default,
    /// Best match ranking
    BestMatch,
    /// Fewest bids first
    BidCountFewest,
    /// Most bids first
    BidCountMost,
    /// Country ascending
    CountryAscending,
    /// Country descending
    CountryDescending,
    /// Highest current price first
    CurrentPriceHighest,
    /// Nearest distance first
    DistanceNearest,
    /// Listings ending soonest first
    EndTimeSoonest,
    /// Highest price plus shipping first
    PricePlusShippingHighest,
    /// Lowest price plus shipping first
    PricePlusShippingLowest,
    /// Newest listings first
    StartTimeNewest,
    /// Any other sort order, passed through verbatim
    Other(String),
}

impl SortOrder {
    /// Returns the wire representation of the sort order
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Default => "",
            Self::BestMatch => "BestMatch",
            Self::BidCountFewest => "BidCountFewest",
            Self::BidCountMost => "BidCountMost",
            Self::CountryAscending => "CountryAscending",
            Self::CountryDescending => "CountryDescending",
            Self::CurrentPriceHighest => "CurrentPriceHighest",
            Self::DistanceNearest => "DistanceNearest",
            Self::EndTimeSoonest => "EndTimeSoonest",
            Self::PricePlusShippingHighest => "PricePlusShippingHighest",
            Self::PricePlusShippingLowest => "PricePlusShippingLowest",
            Self::StartTimeNewest => "StartTimeNewest",
            Self::Other(order) => order,
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::Default
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SortOrder {
    fn from(s: &str) -> Self {
        match s {
            "" => Self::Default,
            "BestMatch" => Self::BestMatch,
            "BidCountFewest" => Self::BidCountFewest,
            "BidCountMost" => Self::BidCountMost,
            "CountryAscending" => Self::CountryAscending,
            "CountryDescending" => Self::CountryDescending,
            "CurrentPriceHighest" => Self::CurrentPriceHighest,
            "DistanceNearest" => Self::DistanceNearest,
            "EndTimeSoonest" => Self::EndTimeSoonest,
            "PricePlusShippingHighest" => Self::PricePlusShippingHighest,
            "PricePlusShippingLowest" => Self::PricePlusShippingLowest,
            "StartTimeNewest" => Self::StartTimeNewest,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Serialize for SortOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortOrder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}
