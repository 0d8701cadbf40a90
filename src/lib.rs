pub mod client;
pub mod errors;
pub mod models;
pub mod report;
pub mod verifier;

pub use client::ApiClient;
pub use errors::{SmokeError, SmokeResult};
pub use models::{Product, ProductListing, Recommendation, RecommendationsResponse, VerifierConfig};
pub use verifier::{EndpointVerifier, RunSummary, Step, StepReport, StepStatus};
