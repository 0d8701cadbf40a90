use colored::Colorize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::verifier::{RunSummary, StepStatus};

const RULE_WIDTH: usize = 60;

fn rule() -> String {
	"=".repeat(RULE_WIDTH)
}

fn now_iso() -> String {
	OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_else(|_| "".into())
}

pub struct Reporter;

impl Reporter {
	pub fn header(&self, base_url: &str) {
		println!("\n{}", rule().blue());
		println!("{}", "🧪 RECOMMENDATION ENDPOINT SMOKE TEST".blue().bold());
		println!("   {} ({})", base_url, now_iso());
		println!("{}", rule().blue());
	}

	pub fn section(&self, number: usize, label: &str) {
		println!("\n{}", format!("{}. Testing {}", number, label).blue());
	}

	pub fn pass(&self, msg: &str) {
		println!("   {} {}", "✓".green().bold(), msg.green());
	}

	pub fn fail(&self, msg: &str) {
		println!("   {} {}", "✗".red().bold(), format!("Error: {}", msg).red());
	}

	pub fn skip(&self, msg: &str) {
		println!("   {} {}", "-".yellow().bold(), msg.yellow());
	}

	pub fn sample(&self, msg: &str) {
		println!("   • Sample: {}", msg);
	}

	pub fn summary(&self, run: &RunSummary, username: &str, password: &str) {
		println!("\n{}", rule().blue());
		let failed = run.failed();
		if failed == 0 {
			println!("{}", format!("✅ ALL {} CHECKS PASSED", run.steps.len()).green().bold());
		} else {
			println!("{}", format!("❌ {} OF {} CHECKS FAILED", failed, run.steps.len()).red().bold());
		}
		for report in &run.steps {
			let marker = match report.status {
				StepStatus::Passed => "✓".green().bold(),
				StepStatus::Failed => "✗".red().bold(),
				StepStatus::Skipped => "-".yellow().bold(),
			};
			println!("   {} {}: {}", marker, report.step.label(), report.detail);
		}
		println!("{}", rule().blue());

		println!("\n{}", "📱 NEXT STEPS:".blue().bold());
		println!("   1. Open the mobile app project in Android Studio / VS Code");
		println!("   2. flutter run");
		println!("   3. Log in: {} / {}", username, password);
		println!("   4. Open the recommendations screen");
		if failed == 0 {
			println!("\n{}\n", "Ready to test on the device 🚀".green());
		} else {
			println!();
		}
	}
}
