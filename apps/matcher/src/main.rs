use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use job_matcher::config::Config;
use job_matcher::matching::load_document;
use job_matcher::{JobPosting, Matcher};

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries only the result and prompt.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("job_matcher={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting job matcher v{}", env!("CARGO_PKG_VERSION"));

    let matcher = Matcher::load(&config.resume_path, &config.search_criteria_path);

    let job = job_to_evaluate(&config)?;

    let result = matcher.match_job(&job);
    let prompt = matcher.generate_prompt(&job)?;

    println!("Job Matcher Test\n");
    println!("Job: {}", job.title);
    println!("\nMatch Result:");
    println!("{}", serde_json::to_string_pretty(&result)?);

    println!("\n\nAI Prompt:");
    println!("{prompt}");

    Ok(())
}

/// The configured job posting, or the built-in example when none is set.
/// A configured file that can't be loaded is fatal.
fn job_to_evaluate(config: &Config) -> Result<JobPosting> {
    match &config.job_posting_path {
        Some(path) => load_document::<JobPosting>(path)
            .with_context(|| format!("Could not load job posting from {}", path.display())),
        None => Ok(JobPosting::example()),
    }
}
