//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for completed briefs
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with every answered question
    Full,
    /// Compact recap of the brief
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for brief_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => brief_domain::OutputFormat::Full,
            OutputFormat::Summary => brief_domain::OutputFormat::Summary,
            OutputFormat::Json => brief_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for briefdesk
#[derive(Parser, Debug)]
#[command(name = "briefdesk")]
#[command(author, version, about = "Project intake - a guided brief for creative service requests")]
#[command(long_about = r#"
Briefdesk walks a client request through a two-page intake form.

The flow has two pages:
1. Project Kickoff: company, project, kickoff date, and the services requested
2. Service Details: questions composed from the selected services only

Answers are assembled into a structured brief and, when configured,
delivered to a webhook and appended to a local archive.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./briefdesk.toml    Project-level config
3. ~/.config/briefdesk/config.toml   Global config

Example:
  briefdesk
  briefdesk --answers request.json --output json
  briefdesk --dry-run -vv
"#)]
pub struct Cli {
    /// Read answers from a JSON file instead of prompting
    #[arg(long, value_name = "PATH")]
    pub answers: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Attribute the brief to this user instead of the configured one
    #[arg(long, value_name = "NAME")]
    pub submitted_by: Option<String>,

    /// Deliver to this webhook URL, overriding the configuration
    #[arg(long, value_name = "URL")]
    pub webhook_url: Option<String>,

    /// Compose and extract the brief without delivering it anywhere
    #[arg(long)]
    pub dry_run: bool,

    /// Print the question catalog and exit; pass a comma-separated service
    /// list to preview the composed details page for that selection
    #[arg(long, value_name = "SERVICES", num_args = 0..=1)]
    pub show_questions: Option<Option<String>>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress informational output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
