pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "small-store")]
    #[command(about = "A small storefront client for browsing a product catalog")]
    pub struct CliConfig {
        #[arg(long, default_value = "http://localhost:8080/api/products")]
        pub catalog_endpoint: String,

        #[arg(long, help = "Filter the product list by title")]
        pub search: Option<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl ConfigProvider for CliConfig {
        fn catalog_endpoint(&self) -> &str {
            &self.catalog_endpoint
        }

        fn search_term(&self) -> Option<&str> {
            self.search.as_deref()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_url("catalog_endpoint", &self.catalog_endpoint)?;
            if let Some(term) = &self.search {
                validate_non_empty_string("search", term)?;
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_defaults_are_valid() {
            let config = CliConfig::parse_from(["small-store"]);
            assert!(config.validate().is_ok());
            assert_eq!(
                config.catalog_endpoint(),
                "http://localhost:8080/api/products"
            );
            assert_eq!(config.search_term(), None);
        }

        #[test]
        fn test_search_term_is_passed_through() {
            let config = CliConfig::parse_from(["small-store", "--search", "relógio"]);
            assert_eq!(config.search_term(), Some("relógio"));
        }

        #[test]
        fn test_blank_search_term_fails_validation() {
            let config = CliConfig::parse_from(["small-store", "--search", "   "]);
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_invalid_endpoint_fails_validation() {
            let config = CliConfig::parse_from(["small-store", "--catalog-endpoint", "not-a-url"]);
            assert!(config.validate().is_err());
        }
    }
}
