//! Integration tests for the file-backed stores, run against a temp dir.

use std::fs;

use jobber_cli::catalog::{Category, Customer, JobPosting, Rate, Service, store};
use tempfile::tempdir;

fn posting(n: u32) -> JobPosting {
    JobPosting {
        category: "Home Cleaning".to_string(),
        service: format!("Service {n}"),
        rate: Rate::Text("499".to_string()),
        customer: Customer {
            name: format!("Customer {n}"),
            phone: "9876543210".to_string(),
            address: "12 MG Road".to_string(),
        },
        preferred_date: "2026-09-01".to_string(),
        preferred_time: "10:00 AM".to_string(),
    }
}

#[test]
fn sequential_postings_are_kept_in_submission_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("posted_jobs.json");

    for n in 1..=3 {
        store::append_posting(&path, posting(n)).unwrap();
    }

    let postings = store::load_postings(&path);
    assert_eq!(postings.len(), 3);
    assert_eq!(postings[0].service, "Service 1");
    assert_eq!(postings[2].service, "Service 3");
    assert_eq!(postings[1].customer.name, "Customer 2");
}

#[test]
fn missing_postings_file_starts_empty() {
    let dir = tempdir().unwrap();
    let postings = store::load_postings(&dir.path().join("posted_jobs.json"));
    assert!(postings.is_empty());
}

#[test]
fn corrupt_postings_file_starts_empty_and_is_recoverable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("posted_jobs.json");
    fs::write(&path, "{ not json at all").unwrap();

    assert!(store::load_postings(&path).is_empty());

    // posting over a corrupted store replaces it with a one-element list
    store::append_posting(&path, posting(1)).unwrap();
    let postings = store::load_postings(&path);
    assert_eq!(postings.len(), 1);
}

#[test]
fn missing_catalog_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(store::load_catalog(&dir.path().join("lawfeat_services.json")).is_err());
}

#[test]
fn catalog_file_is_pretty_printed_with_non_ascii_preserved() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lawfeat_services.json");

    let categories = vec![Category {
        id: 1,
        name: "Beauty & Salon".to_string(),
        services: vec![Service {
            id: 10,
            service_name: "Mehendi Design".to_string(),
            rate: Rate::Text("₹500 onwards".to_string()),
        }],
    }];
    store::save_catalog(&path, &categories).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains('\n'), "catalog should be pretty-printed");
    assert!(raw.contains("₹500"), "non-ASCII must not be escaped");

    let loaded = store::load_catalog(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].services[0].service_name, "Mehendi Design");
}

#[test]
fn empty_catalog_overwrites_previous_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lawfeat_services.json");

    let categories = vec![Category {
        id: 1,
        name: "Home Cleaning".to_string(),
        services: vec![],
    }];
    store::save_catalog(&path, &categories).unwrap();
    store::save_catalog(&path, &[]).unwrap();

    let loaded = store::load_catalog(&path).unwrap();
    assert!(loaded.is_empty());
}
