//! HTTP client for the public AceJobber category endpoint.
//!
//! One GET with a fixed API-key header and a request timeout. There is no
//! retry policy and no real pagination; the request asks for the largest
//! representable page and takes whatever comes back.

pub mod models;


use anyhow::{Context, Result};
use log::{debug, error, info};
use reqwest::Client;

use crate::catalog::Category;
use crate::config::Config;

pub struct CatalogClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl CatalogClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch every category in a single request. Any transport failure,
    /// non-success status or malformed body is logged and degrades to an
    /// empty catalog; this never returns an error.
    pub async fn fetch_all_categories(&self) -> Vec<Category> {
        match self.try_fetch().await {
            Ok(categories) => categories,
            Err(e) => {
                error!("request failed: {e:#}");
                eprintln!("Error: request failed: {e:#}");
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self) -> Result<Vec<Category>> {
        let size = i64::MAX.to_string();
        debug!("sending request to {}", self.base_url);
        let response = self
            .http
            .get(&self.base_url)
            .header("X-Api-Key", &self.api_key)
            .query(&[
                ("status", "AceJobber"),
                ("page", "0"),
                ("size", size.as_str()),
            ])
            .send()
            .await
            .with_context(|| format!("request to {} failed", self.base_url))?;

        let status = response.status();
        info!("received response with status code {status}");
        if !status.is_success() {
            error!("failed to fetch data: status code {status}");
            return Ok(Vec::new());
        }

        let body = response
            .text()
            .await
            .context("failed to read response body")?;
        Ok(models::parse_catalog_page(&body))
    }
}
