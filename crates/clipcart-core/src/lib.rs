pub mod config;
pub mod error;
pub mod items;
pub mod request;
pub mod retailer;
pub mod script;

pub use config::{load_config, load_config_from_env, AppConfig, DEFAULT_SEARCH_DELAY_MS};
pub use error::ConfigError;
pub use items::parse_items;
pub use request::{build_request, CouponRequest};
pub use retailer::Retailer;
