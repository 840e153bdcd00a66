//! Domain types for the AceJobber service catalog.
//!
//! The catalog is a list of categories, each owning its services. These types
//! are what gets persisted to the catalog file and read back by the extract
//! and chat commands.

pub mod store;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named grouping of bookable services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub services: Vec<Service>,
}

/// A bookable offering with a display rate, owned by exactly one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "serviceName")]
    pub service_name: String,
    #[serde(default)]
    pub rate: Rate,
}

/// A display-only rate. The upstream API returns either a number or a plain
/// string (including the `"N/A"` sentinel), so both shapes are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rate {
    Number(serde_json::Number),
    Text(String),
}

impl Default for Rate {
    fn default() -> Self {
        Rate::Text("N/A".to_string())
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rate::Number(n) => n.fmt(f),
            Rate::Text(s) => s.fmt(f),
        }
    }
}

/// Denormalized view of one service used by the chat assistant's search
/// index. Built fresh from the catalog on every run, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatServiceEntry {
    pub category: String,
    pub service_name: String,
    pub rate: Rate,
}

/// Flatten every category's services into one searchable list.
pub fn flatten(categories: &[Category]) -> Vec<FlatServiceEntry> {
    let mut entries = Vec::new();
    for category in categories {
        for service in &category.services {
            entries.push(FlatServiceEntry {
                category: category.name.clone(),
                service_name: service.service_name.clone(),
                rate: service.rate.clone(),
            });
        }
    }
    entries
}

fn no_name() -> String {
    "No Name".to_string()
}

fn no_service_name() -> String {
    "No ServiceName".to_string()
}

/// Lenient read view of the catalog file used by the extract command.
/// Missing fields get the projector's own sentinels instead of failing the
/// whole run.
#[derive(Debug, Deserialize)]
pub struct LooseCategory {
    #[serde(default = "no_name")]
    pub name: String,
    #[serde(default)]
    pub services: Vec<LooseService>,
}

#[derive(Debug, Deserialize)]
pub struct LooseService {
    #[serde(default = "no_service_name", rename = "serviceName")]
    pub service_name: String,
}

/// Reduced "name plus service names" view of a category, written by the
/// extract command and consumed by nothing else in this repo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectedCategory {
    pub name: String,
    pub services: Vec<String>,
}

/// Project the full catalog down to category and service names only.
/// Ids and rates are discarded; per-category service counts are preserved.
pub fn project(categories: Vec<LooseCategory>) -> Vec<ProjectedCategory> {
    categories
        .into_iter()
        .map(|category| ProjectedCategory {
            name: category.name,
            services: category
                .services
                .into_iter()
                .map(|service| service.service_name)
                .collect(),
        })
        .collect()
}

/// A customer's request to book a specific service. Appended to the postings
/// file on confirmation, never mutated afterwards. Duplicates are allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub category: String,
    pub service: String,
    pub rate: Rate,
    pub customer: Customer,
    pub preferred_date: String,
    pub preferred_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_preserves_order_and_category_names() {
        let categories: Vec<Category> = serde_json::from_value(serde_json::json!([
            {
                "id": 1,
                "name": "Home Cleaning",
                "services": [
                    { "id": 10, "serviceName": "Sofa Cleaning", "rate": 499 },
                    { "id": 11, "serviceName": "Kitchen Deep Clean", "rate": "899" }
                ]
            },
            {
                "id": 2,
                "name": "Appliance Repair",
                "services": [
                    { "id": 20, "serviceName": "AC Repair" }
                ]
            }
        ]))
        .unwrap();

        let entries = flatten(&categories);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].category, "Home Cleaning");
        assert_eq!(entries[0].service_name, "Sofa Cleaning");
        assert_eq!(entries[2].category, "Appliance Repair");
        // missing rate falls back to the display sentinel
        assert_eq!(entries[2].rate.to_string(), "N/A");
    }

    #[test]
    fn project_keeps_counts_and_fills_sentinels() {
        let input: Vec<LooseCategory> = serde_json::from_value(serde_json::json!([
            {
                "name": "Home Cleaning",
                "services": [
                    { "serviceName": "Sofa Cleaning" },
                    {}
                ]
            },
            {
                "services": [{ "serviceName": "AC Repair" }]
            },
            {
                "name": "Empty"
            }
        ]))
        .unwrap();

        let projected = project(input);
        assert_eq!(projected.len(), 3);
        assert_eq!(projected[0].name, "Home Cleaning");
        assert_eq!(
            projected[0].services,
            vec!["Sofa Cleaning".to_string(), "No ServiceName".to_string()]
        );
        assert_eq!(projected[1].name, "No Name");
        assert_eq!(projected[1].services.len(), 1);
        assert!(projected[2].services.is_empty());
    }

    #[test]
    fn rate_roundtrips_numbers_without_rewriting_them() {
        let service: Service =
            serde_json::from_str(r#"{ "id": 1, "serviceName": "Bike Wash", "rate": 350 }"#)
                .unwrap();
        assert_eq!(service.rate.to_string(), "350");
        let json = serde_json::to_string(&service).unwrap();
        assert!(json.contains("\"rate\":350"));
    }

    #[test]
    fn posting_uses_original_field_names_on_disk() {
        let posting = JobPosting {
            category: "Home Cleaning".to_string(),
            service: "Sofa Cleaning".to_string(),
            rate: Rate::Text("499".to_string()),
            customer: Customer {
                name: "Asha".to_string(),
                phone: "9999999999".to_string(),
                address: "12 MG Road".to_string(),
            },
            preferred_date: "2026-09-01".to_string(),
            preferred_time: "10:00 AM".to_string(),
        };
        let json = serde_json::to_string(&posting).unwrap();
        assert!(json.contains("\"preferredDate\""));
        assert!(json.contains("\"preferredTime\""));
        assert!(json.contains("\"customer\""));
    }
}
