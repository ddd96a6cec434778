pub mod cart;
pub mod notify;
pub mod search;

pub use crate::domain::model::{CartState, LineItem, Product, ProductId, Quantity};
pub use crate::domain::ports::{CatalogProvider, ConfigProvider};
pub use crate::utils::error::Result;
