//! Content Validator CLI
//!
//! Checks every content document against its schema and exits non-zero if
//! any of them would fail to render. Meant to run in CI before a build.

use bombers_content::{ContentLoader, Domain, ReportFormat, SiteConfig, ValidationRunner};
use clap::Parser;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "content-validator")]
#[command(about = "Validate site content against its schemas")]
struct Cli {
    /// Content directory (defaults to the configured one, then the embedded store)
    #[arg(short = 'd', long)]
    content_dir: Option<PathBuf>,

    /// Config file to load
    #[arg(short, long)]
    config: Option<String>,

    /// Report format
    #[arg(short, long, value_parser = parse_format)]
    format: Option<ReportFormat>,

    /// Only validate these domains (e.g. "teams", "spirit-wear")
    #[arg(long = "domain", value_parser = parse_domain)]
    domains: Vec<Domain>,
}

fn parse_format(s: &str) -> Result<ReportFormat, String> {
    match s {
        "text" => Ok(ReportFormat::Text),
        "json" => Ok(ReportFormat::Json),
        other => Err(format!("unknown format '{}', expected text or json", other)),
    }
}

fn parse_domain(s: &str) -> Result<Domain, String> {
    Domain::from_name(s).ok_or_else(|| {
        let known: Vec<&str> = Domain::ALL.iter().map(|d| d.name()).collect();
        format!("unknown domain '{}', expected one of: {}", s, known.join(", "))
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let config = SiteConfig::load_from(cli.config.as_deref())?;

    let loader = match cli.content_dir {
        Some(dir) => ContentLoader::from_dir(dir),
        None => config.loader(),
    };
    let format = cli.format.unwrap_or(config.report.format);

    if config.content.warn_unrecognized {
        for path in loader.unrecognized_files() {
            warn!(path = %path.display(), "JSON file does not belong to any content domain");
        }
    }

    let domains = if cli.domains.is_empty() {
        Domain::ALL.to_vec()
    } else {
        cli.domains
    };

    let report = ValidationRunner::for_domains(&loader, &domains).run();

    match format {
        ReportFormat::Json => {
            let output = serde_json::json!({
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "report": report,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        ReportFormat::Text => {
            println!("🔍 Validating site content...");
            println!();
            println!("{}", report);
        }
    }

    Ok(report.exit_code())
}
