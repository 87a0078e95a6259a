use serde::{Deserialize, Serialize};

/// The retailers with a wired-up coupon page.
///
/// Adding a retailer means adding a variant here and a dispatch arm in
/// [`crate::request::build_request`]; nothing else branches on the
/// retailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Retailer {
    Jewel,
    Marianos,
}

impl std::fmt::Display for Retailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Retailer::Jewel => write!(f, "jewel"),
            Retailer::Marianos => write!(f, "marianos"),
        }
    }
}
