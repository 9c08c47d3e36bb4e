//! Contact Relay CLI
//!
//! Checks a contact form submission and, on request, relays it to the
//! club's inbox through the configured mail relay.

use bombers_content::contact_form::{self, ContactError, ContactFormInput, HttpMailRelay, SubmitStatus};
use bombers_content::SiteConfig;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "contact-relay")]
#[command(about = "Check and relay contact form submissions")]
struct Cli {
    /// Config file to load
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a submission without sending it
    Check {
        /// Submission as a JSON file
        form: PathBuf,
    },

    /// Validate a submission and relay it
    Send {
        /// Submission as a JSON file
        form: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn read_form(path: &Path) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn report_invalid(e: &ContactError) {
    match e {
        ContactError::Invalid(issues) => {
            println!("❌ Submission is invalid:");
            println!("{}", issues);
        }
        other => println!("❌ {}", other),
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = SiteConfig::load_from(cli.config.as_deref())?;

    match cli.command {
        Commands::Check { form } => {
            let value = read_form(&form)?;
            match ContactFormInput::parse(&value) {
                Ok(input) => {
                    println!("✅ Submission is valid");
                    println!("   From: {} <{}>", input.name, input.email);
                    println!("   Subject: {}{}", config.contact.subject_prefix, input.subject);
                }
                Err(e) => {
                    report_invalid(&e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Send { form } => {
            let value = read_form(&form)?;
            let relay = HttpMailRelay::new(&config.contact)?;

            match contact_form::submit(&value, &config.contact, &relay) {
                Ok(SubmitStatus::Sent) => println!("✅ Message sent"),
                Ok(SubmitStatus::NotSent) => {
                    println!("❌ Message could not be sent. Please try again later.");
                    std::process::exit(1);
                }
                Err(e) => {
                    report_invalid(&e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
