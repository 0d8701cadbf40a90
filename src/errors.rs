use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmokeError {
	#[error("login failed: {0}")]
	LoginFailed(String),
	#[error("{endpoint} returned {status}")]
	Endpoint { endpoint: String, status: reqwest::StatusCode },
	#[error(transparent)]
	Http(#[from] reqwest::Error),
	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

pub type SmokeResult<T> = Result<T, SmokeError>;
