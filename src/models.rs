use std::time::Duration;

use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://backend-2ex-ecommerce.onrender.com";
const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "admin123";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LIMIT: u32 = 5;

#[derive(Debug, Clone)]
pub struct VerifierConfig {
	pub base_url: String,
	pub username: String,
	pub password: String,
	pub color_output: bool,
	pub timeout: Duration,
	pub limit: u32,
}

impl Default for VerifierConfig {
	fn default() -> Self {
		Self {
			base_url: std::env::var("SMOKE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
			username: std::env::var("SMOKE_USERNAME").unwrap_or_else(|_| DEFAULT_USERNAME.into()),
			password: std::env::var("SMOKE_PASSWORD").unwrap_or_else(|_| DEFAULT_PASSWORD.into()),
			color_output: std::env::var_os("NO_COLOR").is_none(),
			timeout: Duration::from_secs(std::env::var("SMOKE_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_TIMEOUT_SECS)),
			limit: DEFAULT_LIMIT,
		}
	}
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
	pub access: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Recommendation {
	pub name: String,
	#[serde(default)]
	pub price: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationsResponse {
	#[serde(default)]
	pub recommendations: Vec<Recommendation>,
}

// Popular-products payloads may carry bare `{"id": ..}` records.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
	pub id: u64,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub price: f64,
}

/// The product listing comes back either as a bare array or wrapped in a
/// paginated `{"results": [...]}` object depending on server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProductListing {
	Plain(Vec<Product>),
	Paginated { results: Vec<Product> },
}

impl ProductListing {
	pub fn items(&self) -> &[Product] {
		match self {
			ProductListing::Plain(items) => items,
			ProductListing::Paginated { results } => results,
		}
	}

	pub fn into_items(self) -> Vec<Product> {
		match self {
			ProductListing::Plain(items) => items,
			ProductListing::Paginated { results } => results,
		}
	}

	pub fn len(&self) -> usize {
		self.items().len()
	}

	pub fn is_empty(&self) -> bool {
		self.items().is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn listing_parses_bare_array() {
		let listing: ProductListing = serde_json::from_str(r#"[{"id":1},{"id":2}]"#).unwrap();
		assert_eq!(listing.len(), 2);
		assert_eq!(listing.items()[0].id, 1);
	}

	#[test]
	fn listing_parses_paginated_object() {
		let listing: ProductListing = serde_json::from_str(r#"{"results":[{"id":7,"name":"Lamp","price":12.5}]}"#).unwrap();
		assert_eq!(listing.len(), 1);
		assert_eq!(listing.items()[0].name, "Lamp");
	}

	#[test]
	fn missing_recommendations_field_defaults_empty() {
		let resp: RecommendationsResponse = serde_json::from_str("{}").unwrap();
		assert!(resp.recommendations.is_empty());
	}

	#[test]
	fn product_without_name_or_price_still_parses() {
		let product: Product = serde_json::from_str(r#"{"id":3}"#).unwrap();
		assert_eq!(product.id, 3);
		assert!(product.name.is_empty());
	}
}
