use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use dialoguer::Password;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shop_smoke::{EndpointVerifier, VerifierConfig};

#[derive(Parser, Debug)]
#[command(name = "shop_smoke")]
#[command(about = "Smoke test for the shop backend recommendation endpoints", long_about = None)]
struct Opts {
	/// Backend base URL
	#[arg(long)]
	base: Option<String>,
	/// Login username
	#[arg(long)]
	user: Option<String>,
	/// Login password
	#[arg(long)]
	password: Option<String>,
	/// Prompt for the password instead of taking it from --password or the environment
	#[arg(long)]
	prompt_password: bool,
	/// Page size for the personalized recommendations check
	#[arg(long, default_value_t = 5)]
	limit: u32,
	/// Per-request timeout in seconds
	#[arg(long)]
	timeout_secs: Option<u64>,
	/// Disable ANSI colors
	#[arg(long)]
	no_color: bool,
}

impl Opts {
	fn into_config(self) -> anyhow::Result<VerifierConfig> {
		let mut config = VerifierConfig::default();
		if let Some(base) = self.base {
			config.base_url = base;
		}
		if let Some(user) = self.user {
			config.username = user;
		}
		if let Some(password) = self.password {
			config.password = password;
		}
		if self.prompt_password {
			config.password = Password::new()
				.with_prompt(format!("Password for {}", config.username))
				.interact()
				.context("failed to read password")?;
		}
		if let Some(secs) = self.timeout_secs {
			config.timeout = Duration::from_secs(secs);
		}
		if self.no_color {
			config.color_output = false;
		}
		config.limit = self.limit;
		Ok(config)
	}
}

#[tokio::main]
async fn main() -> ExitCode {
	let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::new(env_filter))
		.with(tracing_subscriber::fmt::layer())
		.try_init()
		.ok();
	dotenv().ok();

	let opts = Opts::parse();
	let config = match opts.into_config() {
		Ok(config) => config,
		Err(err) => {
			eprintln!("{} {:#}", "error:".red().bold(), err);
			return ExitCode::FAILURE;
		}
	};

	let verifier = match EndpointVerifier::new(config) {
		Ok(verifier) => verifier,
		Err(err) => {
			eprintln!("{} {}", "error:".red().bold(), err);
			return ExitCode::FAILURE;
		}
	};
	match verifier.run().await {
		Ok(_) => ExitCode::SUCCESS,
		// the failure line was already printed under the login section
		Err(_) => ExitCode::FAILURE,
	}
}
