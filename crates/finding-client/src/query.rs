//! Query-string construction for Finding API requests.
//!
//! The Finding API takes everything through URL query parameters, with an
//! indexed-parameter convention for item filters and output selectors:
//! the third value of the second filter travels as
//! `itemFilter(1).value(2)`. [`QueryParams`] owns the index bookkeeping,
//! [`SearchOption`] layers caller-supplied modifiers on top, and the
//! `build_*_url` functions assemble the final encoded URL.

use finding_core::{FindingError, GlobalId, Result, SortOrder};
use url::Url;

/// Fixed Finding API endpoint
pub(crate) const DEFAULT_ENDPOINT: &str =
    "http://svcs.ebay.com/services/search/FindingService/v1";

const SERVICE_VERSION: &str = "1.0.0";

/// Ordered accumulator for query parameters
///
/// Append-only; a fresh accumulator is created for every URL build and
/// consumed exactly once by serialization. Duplicate keys are valid and
/// kept in append order.
#[derive(Debug, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
    item_filter_index: usize,
    output_selector_index: usize,
}

impl QueryParams {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a flat key/value pair
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Append an indexed item filter with one or more values
    ///
    /// Allocates one filter index per call regardless of how many values
    /// the filter carries.
    pub fn push_item_filter(&mut self, name: &str, values: &[&str]) {
        let index = self.item_filter_index;
        self.item_filter_index += 1;
        self.push(format!("itemFilter({index}).name"), name);
        for (position, value) in values.iter().enumerate() {
            self.push(format!("itemFilter({index}).value({position})"), *value);
        }
    }

    /// Append output selectors, one index per value
    pub fn push_output_selector(&mut self, values: &[&str]) {
        for value in values {
            let index = self.output_selector_index;
            self.output_selector_index += 1;
            self.push(format!("outputSelector({index})"), *value);
        }
    }

    fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// A caller-supplied query modifier
///
/// Options are applied to the accumulator in the order given, after the
/// operation's fixed filters are seeded and before the protocol
/// parameters are merged.
pub struct SearchOption(Box<dyn Fn(&mut QueryParams) + Send + Sync>);

impl SearchOption {
    /// Request an explicit result ordering
    ///
    /// Always emits the `sortOrder` key, including the empty string for
    /// [`SortOrder::Default`]; callers rely on this to explicitly request
    /// default ordering.
    #[must_use]
    pub fn sort_order(order: SortOrder) -> Self {
        Self::custom(move |params| params.push("sortOrder", order.as_str()))
    }

    /// Request a specific result page; n <= 0 means unset
    #[must_use]
    pub fn page_number(n: i32) -> Self {
        Self::custom(move |params| {
            if n > 0 {
                params.push("paginationInput.pageNumber", n.to_string());
            }
        })
    }

    /// Request a page size; n <= 0 means unset
    #[must_use]
    pub fn page_size(n: i32) -> Self {
        Self::custom(move |params| {
            if n > 0 {
                params.push("paginationInput.entriesPerPage", n.to_string());
            }
        })
    }

    /// Filter out items below the given price
    ///
    /// Always emits the MinPrice filter, including for zero. The
    /// asymmetry with [`SearchOption::max_price`] matches the provider
    /// behavior this library was written against; do not normalize it.
    #[must_use]
    pub fn min_price(price: f64) -> Self {
        Self::custom(move |params| {
            params.push_item_filter("MinPrice", &[&price.to_string()]);
        })
    }

    /// Filter out items above the given price; emitted only when positive
    #[must_use]
    pub fn max_price(price: f64) -> Self {
        Self::custom(move |params| {
            if price > 0.0 {
                params.push_item_filter("MaxPrice", &[&price.to_string()]);
            }
        })
    }

    /// Build an option from an arbitrary accumulator mutation
    #[must_use]
    pub fn custom(apply: impl Fn(&mut QueryParams) + Send + Sync + 'static) -> Self {
        Self(Box::new(apply))
    }

    pub(crate) fn apply(&self, params: &mut QueryParams) {
        (self.0)(params);
    }
}

impl std::fmt::Debug for SearchOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SearchOption")
    }
}

/// Build the URL for a findItemsByKeywords request
pub(crate) fn build_search_url(
    endpoint: &str,
    app_id: &str,
    global_id: &GlobalId,
    keywords: &str,
    options: &[SearchOption],
) -> Result<String> {
    let mut params = QueryParams::new();
    params.push_item_filter("ListingType", &["FixedPrice", "AuctionWithBIN", "Auction"]);
    params.push_output_selector(&["SellerInfo"]);
    build_url(endpoint, "findItemsByKeywords", app_id, global_id, keywords, params, options)
}

/// Build the URL for a findCompletedItems request restricted to sold listings
pub(crate) fn build_sold_url(
    endpoint: &str,
    app_id: &str,
    global_id: &GlobalId,
    keywords: &str,
    options: &[SearchOption],
) -> Result<String> {
    let mut params = QueryParams::new();
    params.push_item_filter("Condition", &["Used", "Unspecified"]);
    params.push_item_filter("SoldItemsOnly", &["true"]);
    build_url(endpoint, "findCompletedItems", app_id, global_id, keywords, params, options)
}

fn build_url(
    endpoint: &str,
    operation: &str,
    app_id: &str,
    global_id: &GlobalId,
    keywords: &str,
    mut params: QueryParams,
    options: &[SearchOption],
) -> Result<String> {
    for option in options {
        option.apply(&mut params);
    }

    let mut url = Url::parse(endpoint)
        .map_err(|e| FindingError::Config(format!("invalid endpoint {endpoint}: {e}")))?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("OPERATION-NAME", operation);
        query.append_pair("SERVICE-VERSION", SERVICE_VERSION);
        query.append_pair("SECURITY-APPNAME", app_id);
        query.append_pair("GLOBAL-ID", global_id.as_str());
        query.append_pair("RESPONSE-DATA-FORMAT", "XML");
        query.append_pair("REST-PAYLOAD", "");
        query.append_pair("keywords", keywords);
        for (name, value) in params.pairs() {
            query.append_pair(name, value);
        }
    }
    Ok(String::from(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    const APP_ID: &str = "test-app-id";

    fn search_url(options: &[SearchOption]) -> String {
        build_search_url(DEFAULT_ENDPOINT, APP_ID, &GlobalId::EbayUs, "djm 900", options)
            .unwrap()
    }

    fn sold_url(options: &[SearchOption]) -> String {
        build_sold_url(DEFAULT_ENDPOINT, APP_ID, &GlobalId::EbayUs, "djm 900", options)
            .unwrap()
    }

    fn query_pairs(url: &str) -> Vec<(String, String)> {
        Url::parse(url).unwrap().query_pairs().into_owned().collect()
    }

    fn values_for(pairs: &[(String, String)], key: &str) -> Vec<String> {
        pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }

    #[test]
    fn item_filter_index_increments_once_per_call() {
        let mut params = QueryParams::new();
        params.push_item_filter("A", &["1", "2", "3"]);
        params.push_item_filter("B", &["x"]);
        params.push_item_filter("C", &[]);
        params.push_item_filter("D", &["y", "z"]);

        let names: Vec<_> = params
            .pairs()
            .iter()
            .filter(|(k, _)| k.ends_with(".name"))
            .cloned()
            .collect();
        assert_eq!(
            names,
            vec![
                ("itemFilter(0).name".to_string(), "A".to_string()),
                ("itemFilter(1).name".to_string(), "B".to_string()),
                ("itemFilter(2).name".to_string(), "C".to_string()),
                ("itemFilter(3).name".to_string(), "D".to_string()),
            ]
        );
    }

    #[test]
    fn item_filter_values_are_positional_within_a_filter() {
        let mut params = QueryParams::new();
        params.push_item_filter("ListingType", &["FixedPrice", "Auction"]);

        assert_eq!(
            params.pairs(),
            &[
                ("itemFilter(0).name".to_string(), "ListingType".to_string()),
                ("itemFilter(0).value(0)".to_string(), "FixedPrice".to_string()),
                ("itemFilter(0).value(1)".to_string(), "Auction".to_string()),
            ]
        );
    }

    #[test]
    fn output_selector_index_increments_once_per_value() {
        let mut params = QueryParams::new();
        params.push_output_selector(&["SellerInfo", "GalleryInfo"]);
        params.push_output_selector(&["StoreInfo"]);

        assert_eq!(
            params.pairs(),
            &[
                ("outputSelector(0)".to_string(), "SellerInfo".to_string()),
                ("outputSelector(1)".to_string(), "GalleryInfo".to_string()),
                ("outputSelector(2)".to_string(), "StoreInfo".to_string()),
            ]
        );
    }

    #[test]
    fn flat_duplicates_are_preserved_in_order() {
        let mut params = QueryParams::new();
        params.push("k", "first");
        params.push("k", "second");
        assert_eq!(
            params.pairs(),
            &[
                ("k".to_string(), "first".to_string()),
                ("k".to_string(), "second".to_string()),
            ]
        );
    }

    #[test]
    fn page_number_is_omitted_when_not_positive() {
        for n in [0, -1] {
            let pairs = query_pairs(&search_url(&[SearchOption::page_number(n)]));
            assert!(values_for(&pairs, "paginationInput.pageNumber").is_empty());
        }
    }

    #[test]
    fn page_number_emits_single_pair_when_positive() {
        let pairs = query_pairs(&search_url(&[SearchOption::page_number(5)]));
        assert_eq!(values_for(&pairs, "paginationInput.pageNumber"), vec!["5"]);
    }

    #[test]
    fn page_size_is_omitted_when_not_positive() {
        let pairs = query_pairs(&search_url(&[SearchOption::page_size(0)]));
        assert!(values_for(&pairs, "paginationInput.entriesPerPage").is_empty());
    }

    #[test]
    fn page_size_emits_when_positive() {
        let pairs = query_pairs(&search_url(&[SearchOption::page_size(25)]));
        assert_eq!(values_for(&pairs, "paginationInput.entriesPerPage"), vec!["25"]);
    }

    #[test]
    fn min_price_is_always_emitted() {
        let pairs = query_pairs(&search_url(&[SearchOption::min_price(0.0)]));
        assert_eq!(values_for(&pairs, "itemFilter(1).name"), vec!["MinPrice"]);
        assert_eq!(values_for(&pairs, "itemFilter(1).value(0)"), vec!["0"]);
    }

    #[test]
    fn max_price_is_omitted_when_not_positive() {
        for price in [0.0, -3.0] {
            let pairs = query_pairs(&search_url(&[SearchOption::max_price(price)]));
            for (key, value) in &pairs {
                assert_ne!(value, "MaxPrice", "unexpected {key}={value}");
            }
        }
    }

    #[test]
    fn max_price_emits_when_positive() {
        let pairs = query_pairs(&search_url(&[SearchOption::max_price(19.5)]));
        assert_eq!(values_for(&pairs, "itemFilter(1).name"), vec!["MaxPrice"]);
        assert_eq!(values_for(&pairs, "itemFilter(1).value(0)"), vec!["19.5"]);
    }

    #[test]
    fn sort_order_is_emitted_even_for_default() {
        let pairs = query_pairs(&search_url(&[SearchOption::sort_order(SortOrder::Default)]));
        assert_eq!(values_for(&pairs, "sortOrder"), vec![""]);

        let pairs = query_pairs(&search_url(&[SearchOption::sort_order(
            SortOrder::PricePlusShippingLowest,
        )]));
        assert_eq!(values_for(&pairs, "sortOrder"), vec!["PricePlusShippingLowest"]);
    }

    #[test]
    fn options_apply_in_call_order() {
        let pairs = query_pairs(&search_url(&[
            SearchOption::min_price(5.0),
            SearchOption::max_price(10.0),
        ]));
        assert_eq!(values_for(&pairs, "itemFilter(1).name"), vec!["MinPrice"]);
        assert_eq!(values_for(&pairs, "itemFilter(2).name"), vec!["MaxPrice"]);
    }

    #[test]
    fn search_url_seeds_listing_type_and_seller_info() {
        let pairs = query_pairs(&search_url(&[]));

        assert_eq!(values_for(&pairs, "OPERATION-NAME"), vec!["findItemsByKeywords"]);
        assert_eq!(values_for(&pairs, "SERVICE-VERSION"), vec!["1.0.0"]);
        assert_eq!(values_for(&pairs, "SECURITY-APPNAME"), vec![APP_ID]);
        assert_eq!(values_for(&pairs, "GLOBAL-ID"), vec!["EBAY-US"]);
        assert_eq!(values_for(&pairs, "RESPONSE-DATA-FORMAT"), vec!["XML"]);
        assert_eq!(values_for(&pairs, "REST-PAYLOAD"), vec![""]);
        assert_eq!(values_for(&pairs, "keywords"), vec!["djm 900"]);

        assert_eq!(values_for(&pairs, "itemFilter(0).name"), vec!["ListingType"]);
        assert_eq!(values_for(&pairs, "itemFilter(0).value(0)"), vec!["FixedPrice"]);
        assert_eq!(values_for(&pairs, "itemFilter(0).value(1)"), vec!["AuctionWithBIN"]);
        assert_eq!(values_for(&pairs, "itemFilter(0).value(2)"), vec!["Auction"]);
        assert_eq!(values_for(&pairs, "outputSelector(0)"), vec!["SellerInfo"]);
    }

    #[test]
    fn sold_url_seeds_condition_and_sold_items_only() {
        let pairs = query_pairs(&sold_url(&[]));

        assert_eq!(values_for(&pairs, "OPERATION-NAME"), vec!["findCompletedItems"]);
        assert_eq!(values_for(&pairs, "itemFilter(0).name"), vec!["Condition"]);
        assert_eq!(values_for(&pairs, "itemFilter(0).value(0)"), vec!["Used"]);
        assert_eq!(values_for(&pairs, "itemFilter(0).value(1)"), vec!["Unspecified"]);
        assert_eq!(values_for(&pairs, "itemFilter(1).name"), vec!["SoldItemsOnly"]);
        assert_eq!(values_for(&pairs, "itemFilter(1).value(0)"), vec!["true"]);
        assert!(!pairs.iter().any(|(k, _)| k.starts_with("outputSelector")));
    }

    #[test]
    fn encoded_query_round_trips_as_a_multimap() {
        let url = search_url(&[
            SearchOption::sort_order(SortOrder::BestMatch),
            SearchOption::page_number(2),
            SearchOption::page_size(10),
            SearchOption::min_price(0.0),
            SearchOption::max_price(250.0),
        ]);
        let pairs = query_pairs(&url);

        // Re-encode the parsed pairs and parse again; the multimap must
        // survive the trip with per-key value order intact.
        let mut rebuilt = Url::parse(DEFAULT_ENDPOINT).unwrap();
        rebuilt.query_pairs_mut().extend_pairs(pairs.iter());
        let reparsed = query_pairs(rebuilt.as_str());
        assert_eq!(pairs, reparsed);
    }

    #[test]
    fn malformed_endpoint_is_a_config_error() {
        let err = build_search_url("not a url", APP_ID, &GlobalId::EbayUs, "x", &[])
            .unwrap_err();
        assert!(matches!(err, FindingError::Config(_)));
    }
}
