use clap::Parser;
use small_store::utils::{logger, validation::Validate};
use small_store::{
    count_label, CatalogProvider, CatalogSearch, CliConfig, ConfigProvider, HttpCatalog,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-store CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let catalog = HttpCatalog::new(config.catalog_endpoint());
    let products = match catalog.fetch_products().await {
        Ok(products) => products,
        Err(e) => {
            tracing::error!("Failed to load the product list: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let mut catalog_search = CatalogSearch::new(products);
    if let Some(term) = config.search_term() {
        tracing::info!("Filtering catalog by: {}", term);
        catalog_search.set_term(term);
    }

    let results = catalog_search.results();
    println!("{}", count_label(results.len()));
    for product in &results {
        println!("  {} (${})", product.title, product.price);
    }

    Ok(())
}
