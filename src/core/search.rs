use crate::domain::model::Product;

/// Case-insensitive substring filter over product titles.
///
/// Matching is literal at the codepoint level: accents are significant
/// ("relogio" does not match "relógio"). The input order is preserved and
/// an empty term returns the whole catalog.
pub fn search(products: &[Product], term: &str) -> Vec<Product> {
    if term.is_empty() {
        return products.to_vec();
    }

    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|product| product.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Singular/plural label for a product count: "1 Product", "27 Products".
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 Product".to_string()
    } else {
        format!("{} Products", count)
    }
}

/// A search term plus the catalog it applies to. The visible subset is
/// always re-derived from these two; it is never stored.
#[derive(Debug, Clone, Default)]
pub struct CatalogSearch {
    source: Vec<Product>,
    term: String,
}

impl CatalogSearch {
    pub fn new(source: Vec<Product>) -> Self {
        Self {
            source,
            term: String::new(),
        }
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    pub fn clear_term(&mut self) {
        self.term.clear();
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn source(&self) -> &[Product] {
        &self.source
    }

    pub fn results(&self) -> Vec<Product> {
        search(&self.source, &self.term)
    }

    pub fn label(&self) -> String {
        count_label(self.results().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ProductId;

    fn product(id: &str, title: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price: "23.00".to_string(),
            image: "https://example.com/image.jpg".to_string(),
        }
    }

    fn sample_catalog() -> Vec<Product> {
        let mut products: Vec<Product> = (0..10)
            .map(|i| product(&i.to_string(), &format!("Generic product {}", i)))
            .collect();
        products.push(product("10", "Meu relógio favorito"));
        products
    }

    #[test]
    fn test_empty_term_returns_full_catalog_in_order() {
        let catalog = sample_catalog();
        let results = search(&catalog, "");
        assert_eq!(results, catalog);
    }

    #[test]
    fn test_empty_catalog_returns_empty() {
        assert!(search(&[], "relógio").is_empty());
    }

    #[test]
    fn test_term_matches_single_title() {
        let catalog = sample_catalog();
        let results = search(&catalog, "relógio");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Meu relógio favorito");
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let catalog = sample_catalog();
        assert_eq!(search(&catalog, "RELÓGIO").len(), 1);
        assert_eq!(search(&catalog, "meu RELÓGIO").len(), 1);
    }

    #[test]
    fn test_accents_are_not_folded() {
        let catalog = sample_catalog();
        assert!(search(&catalog, "relogio").is_empty());
    }

    #[test]
    fn test_no_match_returns_empty() {
        let catalog = sample_catalog();
        assert!(search(&catalog, "does-not-exist").is_empty());
    }

    #[test]
    fn test_filter_preserves_source_order() {
        let catalog = vec![
            product("1", "Meu relógio favorito"),
            product("2", "Generic product"),
            product("3", "Meu outro relógio favorito"),
        ];
        let results = search(&catalog, "relógio");
        let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_count_label_forms() {
        assert_eq!(count_label(1), "1 Product");
        assert_eq!(count_label(0), "0 Products");
        assert_eq!(count_label(27), "27 Products");
    }

    #[test]
    fn test_catalog_search_rederives_results_on_term_change() {
        let mut catalog_search = CatalogSearch::new(sample_catalog());
        assert_eq!(catalog_search.results().len(), 11);

        catalog_search.set_term("relógio");
        assert_eq!(catalog_search.results().len(), 1);
        assert_eq!(catalog_search.label(), "1 Product");

        catalog_search.clear_term();
        assert_eq!(catalog_search.results().len(), 11);
        assert_eq!(catalog_search.label(), "11 Products");
    }
}
