//! Mapping of a retailer selection plus an item list to a coupon-page
//! request: a destination URL and an optional page script to run once
//! the destination has loaded.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::retailer::Retailer;
use crate::script::coupon_search_snippet;

const JEWEL_COUPON_URL: &str = "https://www.jewelosco.com/foru/coupons-deals.html";
const MARIANOS_COUPON_URL: &str = "https://www.marianos.com/savings/cl/coupons/";

/// One coupon-page request: where to navigate and what to run there.
///
/// Always structurally valid. An empty `url` means the presentation
/// layer must not open a browser surface at all; an empty `script`
/// means nothing is injected after load. The value lives for a single
/// browser session and is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CouponRequest {
    pub url: String,
    pub script: String,
}

impl CouponRequest {
    /// Whether the presentation layer should open a browser surface.
    #[must_use]
    pub fn opens_browser(&self) -> bool {
        !self.url.is_empty()
    }
}

/// Builds the coupon-page request for a retailer selection and item list.
///
/// Only the first item is ever used for search automation; the rest are
/// display-only. `None` (no retailer chosen yet) yields an empty request.
/// Jewel-Osco search runs through a `q` query parameter, so the term is
/// percent-encoded into the URL and no script is needed. Mariano's coupon
/// page has no query-parameter search, so the URL is constant and the
/// search happens via the deferred snippet, delayed by `search_delay_ms`
/// to let the page render its search input first.
///
/// Total over its inputs: every combination yields a well-formed
/// [`CouponRequest`], possibly empty.
#[must_use]
pub fn build_request(
    retailer: Option<Retailer>,
    items: &[String],
    search_delay_ms: u64,
) -> CouponRequest {
    let Some(retailer) = retailer else {
        return CouponRequest::default();
    };

    let request = match (retailer, items.first()) {
        (Retailer::Jewel, Some(term)) => {
            let encoded = utf8_percent_encode(term, NON_ALPHANUMERIC);
            CouponRequest {
                url: format!("{JEWEL_COUPON_URL}?q={encoded}&tab=products"),
                script: String::new(),
            }
        }
        (Retailer::Jewel, None) => {
            // Jewel's URL carries the search term, so with no items there
            // is nothing to navigate to.
            tracing::warn!(%retailer, "no items; skipping coupon request");
            CouponRequest::default()
        }
        (Retailer::Marianos, Some(term)) => CouponRequest {
            url: MARIANOS_COUPON_URL.to_owned(),
            script: coupon_search_snippet(term, search_delay_ms),
        },
        (Retailer::Marianos, None) => CouponRequest {
            url: MARIANOS_COUPON_URL.to_owned(),
            script: String::new(),
        },
    };

    tracing::debug!(
        %retailer,
        url = %request.url,
        script_len = request.script.len(),
        "built coupon request"
    );
    request
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "request_test.rs"]
mod tests;
