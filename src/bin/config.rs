//! Content Config CLI
//!
//! View and manage the site configuration.

use bombers_content::SiteConfig;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "content-config")]
#[command(about = "View and manage site content configuration")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration
    Show {
        /// Config file to load (optional)
        #[arg(short, long)]
        config: Option<String>,

        /// Output as TOML
        #[arg(long)]
        toml: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize a new config file
    Init {
        /// Output path (default: bombers.toml)
        #[arg(short, long, default_value = "bombers.toml")]
        output: String,
    },

    /// Validate configuration
    Validate {
        /// Config file to validate
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Show { config, toml, json } => {
            let cfg = SiteConfig::load_from(config.as_deref())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&cfg)?);
            } else if toml {
                println!("{}", ::toml::to_string_pretty(&cfg)?);
            } else {
                println!("📋 Site Content Configuration\n");
                println!("Content:");
                match cfg.content_dir() {
                    Some(dir) => println!("  Directory: {}", dir.display()),
                    None => println!("  Directory: (embedded)"),
                }
                println!("  Warn on unrecognized files: {}", cfg.content.warn_unrecognized);

                println!("\nReport:");
                println!("  Format: {:?}", cfg.report.format);

                println!("\nContact relay:");
                println!("  Endpoint: {}", cfg.contact.endpoint);
                println!(
                    "  Access key: {}",
                    if cfg.contact.access_key.is_some() { "set" } else { "not set" }
                );
                println!("  Subject prefix: {:?}", cfg.contact.subject_prefix);
                println!("  Timeout: {}s", cfg.contact.timeout_secs);
            }
        }

        Commands::Init { output } => {
            let cfg = SiteConfig::default();
            cfg.save(&output)?;
            println!("✅ Created config file: {}", output);
        }

        Commands::Validate { config } => match SiteConfig::load_from(config.as_deref()) {
            Ok(cfg) => {
                println!("✅ Configuration is valid");
                println!("   Content: {:?}", cfg.content_dir());
                println!("   Report format: {:?}", cfg.report.format);
            }
            Err(e) => {
                eprintln!("❌ Configuration error: {}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
