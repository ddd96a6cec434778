pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlConfig;

pub use adapters::http::HttpCatalog;
pub use core::cart::CartStore;
pub use core::notify::{ChangeNotifier, Subscription};
pub use core::search::{count_label, search, CatalogSearch};
pub use domain::model::{CartState, LineItem, Product, ProductId, Quantity};
pub use domain::ports::{CatalogProvider, ConfigProvider};
pub use utils::error::{Result, StoreError};
