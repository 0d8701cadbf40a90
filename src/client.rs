use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::{SmokeError, SmokeResult};
use crate::models::{ProductListing, RecommendationsResponse, TokenResponse};

pub struct ApiClient {
	http: reqwest::Client,
	base: String,
}

impl ApiClient {
	pub fn new(base_url: &str, timeout: Duration) -> SmokeResult<Self> {
		let http = reqwest::Client::builder()
			.user_agent("shop-smoke/0.1")
			.timeout(timeout)
			.build()?;
		Ok(Self { http, base: base_url.trim_end_matches('/').to_string() })
	}

	pub async fn login(&self, username: &str, password: &str) -> SmokeResult<String> {
		let url = format!("{}/api/token/", self.base);
		debug!(%url, username, "POST login");
		let r = self.http.post(&url)
			.json(&serde_json::json!({ "username": username, "password": password }))
			.send().await?;
		if !r.status().is_success() {
			return Err(SmokeError::LoginFailed(format!("{} from {}", r.status(), url)));
		}
		let token: TokenResponse = read_json(r).await?;
		if token.access.is_empty() {
			return Err(SmokeError::LoginFailed("empty access token".into()));
		}
		Ok(token.access)
	}

	pub async fn personalized_recommendations(&self, token: &str, limit: u32) -> SmokeResult<RecommendationsResponse> {
		let url = format!("{}/api/products/personalized/", self.base);
		debug!(%url, limit, "GET personalized recommendations");
		let r = self.http.get(&url)
			.header(AUTHORIZATION, format!("Bearer {}", token))
			.query(&[("limit", limit)])
			.send().await?;
		check_status(&url, &r)?;
		read_json(r).await
	}

	pub async fn products(&self, token: Option<&str>, ordering: Option<&str>) -> SmokeResult<ProductListing> {
		let url = format!("{}/api/products/", self.base);
		debug!(%url, ?ordering, "GET products");
		let mut req = self.http.get(&url);
		if let Some(token) = token {
			req = req.header(AUTHORIZATION, format!("Bearer {}", token));
		}
		if let Some(ordering) = ordering {
			req = req.query(&[("ordering", ordering)]);
		}
		let r = req.send().await?;
		check_status(&url, &r)?;
		read_json(r).await
	}

	// The recommendations endpoint is public, no bearer header here.
	pub async fn product_recommendations(&self, product_id: u64) -> SmokeResult<RecommendationsResponse> {
		let url = format!("{}/api/products/{}/recommendations/", self.base, product_id);
		debug!(%url, "GET product recommendations");
		let r = self.http.get(&url).send().await?;
		check_status(&url, &r)?;
		read_json(r).await
	}
}

fn check_status(url: &str, r: &reqwest::Response) -> SmokeResult<()> {
	if r.status().is_success() {
		Ok(())
	} else {
		Err(SmokeError::Endpoint { endpoint: url.to_string(), status: r.status() })
	}
}

async fn read_json<T: DeserializeOwned>(r: reqwest::Response) -> SmokeResult<T> {
	let body = r.text().await?;
	Ok(serde_json::from_str(&body)?)
}
