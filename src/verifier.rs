use crate::client::ApiClient;
use crate::errors::{SmokeError, SmokeResult};
use crate::models::VerifierConfig;
use crate::report::Reporter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
	Login,
	PersonalizedRecommendations,
	ProductRecommendations,
	PopularProducts,
}

impl Step {
	pub fn label(&self) -> &'static str {
		match self {
			Step::Login => "login",
			Step::PersonalizedRecommendations => "/api/products/personalized/",
			Step::ProductRecommendations => "/api/products/{id}/recommendations/",
			Step::PopularProducts => "/api/products/ (popular products)",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
	Passed,
	Failed,
	Skipped,
}

#[derive(Debug, Clone)]
pub struct StepReport {
	pub step: Step,
	pub status: StepStatus,
	pub detail: String,
	pub sample: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
	pub steps: Vec<StepReport>,
}

impl RunSummary {
	pub fn passed(&self) -> usize {
		self.steps.iter().filter(|s| s.status == StepStatus::Passed).count()
	}

	pub fn failed(&self) -> usize {
		self.steps.iter().filter(|s| s.status == StepStatus::Failed).count()
	}

	pub fn step(&self, step: Step) -> Option<&StepReport> {
		self.steps.iter().find(|s| s.step == step)
	}
}

pub struct EndpointVerifier {
	client: ApiClient,
	config: VerifierConfig,
	reporter: Reporter,
}

impl EndpointVerifier {
	pub fn new(config: VerifierConfig) -> SmokeResult<Self> {
		if !config.color_output {
			colored::control::set_override(false);
		}
		let client = ApiClient::new(&config.base_url, config.timeout)?;
		Ok(Self { client, config, reporter: Reporter })
	}

	/// Runs the four checks in order. Only a login failure is fatal; the
	/// caller maps `Err` to a nonzero exit code.
	pub async fn run(&self) -> SmokeResult<RunSummary> {
		let mut summary = RunSummary::default();
		self.reporter.header(&self.config.base_url);

		self.reporter.section(1, Step::Login.label());
		let token = match self.client.login(&self.config.username, &self.config.password).await {
			Ok(token) => {
				self.reporter.pass("Login ok");
				summary.steps.push(StepReport {
					step: Step::Login,
					status: StepStatus::Passed,
					detail: "token obtained".into(),
					sample: None,
				});
				token
			}
			Err(err) => {
				self.reporter.fail(&err.to_string());
				return Err(err);
			}
		};

		summary.steps.push(self.check_personalized(&token).await);
		summary.steps.push(self.check_product_recommendations(&token).await);
		summary.steps.push(self.check_popular().await);

		self.reporter.summary(&summary, &self.config.username, &self.config.password);
		Ok(summary)
	}

	async fn check_personalized(&self, token: &str) -> StepReport {
		let step = Step::PersonalizedRecommendations;
		self.reporter.section(2, step.label());
		match self.client.personalized_recommendations(token, self.config.limit).await {
			Ok(data) => {
				let count = data.recommendations.len();
				self.reporter.pass(&format!("Working - {} recommendations", count));
				let sample = data.recommendations.first().map(|rec| format!("{} - ${}", rec.name, rec.price));
				if let Some(sample) = &sample {
					self.reporter.sample(sample);
				}
				StepReport {
					step,
					status: StepStatus::Passed,
					detail: format!("{} recommendations", count),
					sample,
				}
			}
			Err(err) => self.step_failed(step, err),
		}
	}

	async fn check_product_recommendations(&self, token: &str) -> StepReport {
		let step = Step::ProductRecommendations;
		self.reporter.section(3, step.label());
		let products = match self.client.products(Some(token), None).await {
			Ok(listing) => listing.into_items(),
			Err(err) => return self.step_failed(step, err),
		};
		let Some(first) = products.first() else {
			self.reporter.skip("no products available, skipping recommendation lookup");
			return StepReport {
				step,
				status: StepStatus::Skipped,
				detail: "no products available".into(),
				sample: None,
			};
		};
		match self.client.product_recommendations(first.id).await {
			Ok(data) => {
				let count = data.recommendations.len();
				self.reporter.pass(&format!("Working - {} recommendations for '{}'", count, first.name));
				let sample = data.recommendations.first().map(|rec| rec.name.clone());
				if let Some(sample) = &sample {
					self.reporter.sample(sample);
				}
				StepReport {
					step,
					status: StepStatus::Passed,
					detail: format!("{} recommendations for '{}'", count, first.name),
					sample,
				}
			}
			Err(err) => self.step_failed(step, err),
		}
	}

	async fn check_popular(&self) -> StepReport {
		let step = Step::PopularProducts;
		self.reporter.section(4, step.label());
		match self.client.products(None, Some("-created_at")).await {
			Ok(listing) => {
				let count = listing.len();
				self.reporter.pass(&format!("Working - {} products available", count));
				StepReport {
					step,
					status: StepStatus::Passed,
					detail: format!("{} products", count),
					sample: None,
				}
			}
			Err(err) => self.step_failed(step, err),
		}
	}

	fn step_failed(&self, step: Step, err: SmokeError) -> StepReport {
		self.reporter.fail(&err.to_string());
		StepReport {
			step,
			status: StepStatus::Failed,
			detail: err.to_string(),
			sample: None,
		}
	}
}
