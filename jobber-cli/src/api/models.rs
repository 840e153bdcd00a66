//! Wire types for the public category endpoint.
//!
//! Every field the upstream API may omit gets an explicit serde default, so
//! a sparse response degrades to sentinel values instead of a parse error.

use log::{debug, error, info};
use serde::Deserialize;

use crate::catalog::{Category, Rate, Service};

fn unknown_category() -> String {
    "Unknown Category".to_string()
}

fn unknown_service() -> String {
    "Unknown Service".to_string()
}

/// One page of the paginated category listing. The pagination metadata is
/// only ever logged; the request asks for everything in a single page.
#[derive(Debug, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub content: Vec<WireCategory>,
    #[serde(default, rename = "totalPages")]
    pub total_pages: u64,
    #[serde(default, rename = "totalElements")]
    pub total_elements: u64,
    #[serde(default)]
    pub last: bool,
}

#[derive(Debug, Deserialize)]
pub struct WireCategory {
    #[serde(default)]
    pub id: i64,
    #[serde(default = "unknown_category")]
    pub name: String,
    #[serde(default)]
    pub services: Vec<WireService>,
}

#[derive(Debug, Deserialize)]
pub struct WireService {
    #[serde(default)]
    pub id: i64,
    #[serde(default = "unknown_service", rename = "serviceName")]
    pub service_name: String,
    #[serde(default)]
    pub rate: Rate,
}

impl From<WireCategory> for Category {
    fn from(wire: WireCategory) -> Self {
        Category {
            id: wire.id,
            name: wire.name,
            services: wire.services.into_iter().map(Service::from).collect(),
        }
    }
}

impl From<WireService> for Service {
    fn from(wire: WireService) -> Self {
        Service {
            id: wire.id,
            service_name: wire.service_name,
            rate: wire.rate,
        }
    }
}

/// Parse a response body into catalog records. A body that is not the
/// expected shape is logged and yields an empty catalog rather than an
/// error, per the fetcher's degrade-and-continue contract.
pub fn parse_catalog_page(body: &str) -> Vec<Category> {
    let page: CatalogPage = match serde_json::from_str(body) {
        Ok(page) => page,
        Err(e) => {
            error!("failed to parse catalog response: {e}");
            return Vec::new();
        }
    };

    info!(
        "pagination info: totalPages={}, totalElements={}, last={}",
        page.total_pages, page.total_elements, page.last
    );
    info!("found {} categories in response", page.content.len());

    let categories: Vec<Category> = page.content.into_iter().map(Category::from).collect();
    for category in &categories {
        debug!(
            "processed category '{}' with {} services",
            category.name,
            category.services.len()
        );
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_page_is_preserved_exactly() {
        let body = r#"{
            "content": [
                {
                    "id": 1,
                    "name": "Home Cleaning",
                    "services": [
                        { "id": 10, "serviceName": "Sofa Cleaning", "rate": 499 },
                        { "id": 11, "serviceName": "Bathroom Cleaning", "rate": "799" }
                    ]
                },
                {
                    "id": 2,
                    "name": "Salon",
                    "services": [
                        { "id": 20, "serviceName": "Haircut", "rate": "N/A" }
                    ]
                }
            ],
            "totalPages": 1,
            "totalElements": 2,
            "last": true
        }"#;

        let categories = parse_catalog_page(body);
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].services.len(), 2);
        assert_eq!(categories[1].services.len(), 1);
        assert_eq!(categories[0].id, 1);
        assert_eq!(categories[0].services[0].rate.to_string(), "499");
        assert_eq!(categories[1].services[0].rate.to_string(), "N/A");
    }

    #[test]
    fn missing_fields_become_sentinels() {
        let body = r#"{
            "content": [
                { "services": [ {} ] }
            ]
        }"#;

        let categories = parse_catalog_page(body);
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, 0);
        assert_eq!(categories[0].name, "Unknown Category");
        assert_eq!(categories[0].services[0].id, 0);
        assert_eq!(categories[0].services[0].service_name, "Unknown Service");
        assert_eq!(categories[0].services[0].rate.to_string(), "N/A");
    }

    #[test]
    fn unparseable_body_degrades_to_empty() {
        assert!(parse_catalog_page("<html>not json</html>").is_empty());
        assert!(parse_catalog_page("").is_empty());
    }

    #[test]
    fn empty_content_is_an_empty_catalog() {
        assert!(parse_catalog_page(r#"{ "content": [], "last": true }"#).is_empty());
    }
}
