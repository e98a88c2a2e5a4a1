//! Economy domain — price tables and money bookkeeping.

pub mod gold;
pub mod shop;

pub use gold::{format_money, EconomyStats};
pub use shop::{PriceTable, ShopListing};
