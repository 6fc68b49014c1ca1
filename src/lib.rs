pub mod clients;
pub mod common;
pub mod config;
pub mod discounts;
pub mod error;
pub mod place_order;
pub mod products;
pub mod scenario;

pub use config::{ForwardPolicy, Lifecycle, ShopConfig};
pub use error::OrderError;
pub use scenario::run;
