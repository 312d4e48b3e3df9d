//! CLI entrypoint for briefdesk
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use brief_application::{
    BeginIntakeUseCase, ComposeDetailsUseCase, NoSubmissionLogger, SubmissionLogger,
    SubmitBriefOutput, SubmitBriefUseCase,
};
use brief_domain::{Catalog, Category, OutputFormat};
use brief_infrastructure::{
    ConfigLoader, FileConfig, InMemoryCorrelationStore, JsonlSubmissionArchive, WebhookBriefSink,
};
use brief_presentation::{AnswersFile, Cli, ConsoleFormatter, IntakeWizard};
use clap::Parser;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match (cli.quiet, cli.verbose) {
        (true, _) => EnvFilter::new("error"),
        (_, 0) => EnvFilter::new("warn"),
        (_, 1) => EnvFilter::new("info"),
        (_, 2) => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting briefdesk");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| *e)
            .context("failed to load configuration")?
    };

    for issue in config.validate() {
        warn!("{}", issue.message);
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    // The catalog is fixed content; a build failure means colliding ids
    // and there is nothing useful to do but stop.
    let catalog = Arc::new(Catalog::standard().context("invalid question catalog")?);

    if let Some(selection) = &cli.show_questions {
        match selection {
            Some(services) => print_composed_questions(&catalog, services)?,
            None => print_questions(&catalog),
        }
        return Ok(());
    }

    // === Dependency Injection ===
    let correlation = Arc::new(InMemoryCorrelationStore::new());

    let logger: Arc<dyn SubmissionLogger> = if config.archive.enabled {
        match JsonlSubmissionArchive::new(&config.archive.path) {
            Some(archive) => {
                info!("Archiving briefs to {}", archive.path().display());
                Arc::new(archive)
            }
            None => Arc::new(NoSubmissionLogger),
        }
    } else {
        Arc::new(NoSubmissionLogger)
    };

    let begin = BeginIntakeUseCase::new(catalog.clone());

    let mut compose = ComposeDetailsUseCase::new(catalog.clone(), correlation.clone());
    if let Some(user) = submitted_by(&cli, &config) {
        compose = compose.with_submitted_by(user);
    }

    let submit = match webhook_sink(&cli, &config) {
        Some(sink) => SubmitBriefUseCase::new(
            catalog.clone(),
            correlation.clone(),
            Arc::new(sink),
            logger.clone(),
        ),
        None => SubmitBriefUseCase::<WebhookBriefSink>::without_delivery(
            catalog.clone(),
            correlation.clone(),
            logger.clone(),
        ),
    };

    // Run the intake, scripted or interactive
    let result = match &cli.answers {
        Some(path) => run_headless(path, &begin, &compose, &submit).await?,
        None => {
            let mut wizard = IntakeWizard::new(io::stdin().lock(), io::stdout());
            if let Some(organization) = &config.intake.organization {
                wizard = wizard.with_organization(organization.clone());
            }
            wizard.run(&begin, &compose, &submit).await?
        }
    };

    // Output the completed brief
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    let output = match format {
        OutputFormat::Full => ConsoleFormatter::format(&catalog, &result),
        OutputFormat::Summary => ConsoleFormatter::format_summary(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result.submission),
    };

    println!("{}", output);

    Ok(())
}

/// Who the brief should be attributed to: flag, then config, then $USER.
fn submitted_by(cli: &Cli, config: &FileConfig) -> Option<String> {
    cli.submitted_by
        .clone()
        .or_else(|| config.intake.submitted_by.clone())
        .or_else(|| std::env::var("USER").ok())
}

/// Build the webhook sink, if delivery is wanted at all.
///
/// `--webhook-url` wins over the configuration; `--dry-run` disables
/// delivery no matter what is configured.
fn webhook_sink(cli: &Cli, config: &FileConfig) -> Option<WebhookBriefSink> {
    if cli.dry_run {
        return None;
    }

    let url = cli.webhook_url.clone().or_else(|| {
        if config.webhook.enabled {
            config.webhook.url.clone()
        } else {
            None
        }
    })?;

    let mut sink = WebhookBriefSink::new(url)
        .with_timeout(Duration::from_secs(config.webhook.timeout_secs));
    if let Some(secret) = &config.webhook.secret {
        sink = sink.with_secret(secret.clone());
    }
    Some(sink)
}

async fn run_headless(
    path: &Path,
    begin: &BeginIntakeUseCase,
    compose: &ComposeDetailsUseCase,
    submit: &SubmitBriefUseCase<WebhookBriefSink>,
) -> Result<SubmitBriefOutput> {
    let answers = AnswersFile::load(path)?;

    let opened = begin.execute();
    let mut session = opened.session;

    let details = compose
        .execute(&mut session, answers.opening)
        .context("opening answers failed validation")?;
    info!("Composed details for: {}", details.summary);

    let result = submit
        .execute(&mut session, &details.token, &answers.answers)
        .await?;
    Ok(result)
}

/// Preview the details page a given service selection would compose.
fn print_composed_questions(catalog: &Catalog, services: &str) -> Result<()> {
    let mut categories: Vec<Category> = Vec::new();
    for token in services.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let category = token.parse::<Category>().map_err(anyhow::Error::msg)?;
        if !categories.contains(&category) {
            categories.push(category);
        }
    }

    let details = catalog
        .compose(&categories)
        .context("cannot compose a details page")?;
    println!("Details page for: {}", details.summary());
    for block in details.blocks() {
        println!("  {} [{}]", block.label, block.block_id);
    }
    Ok(())
}

/// Dump the whole catalog in form order, with block ids.
fn print_questions(catalog: &Catalog) {
    let opening = catalog.opening_page();
    println!("{}:", opening.title);
    for block in &opening.blocks {
        println!("  {} [{}]", block.label, block.block_id);
    }

    for category in Category::all() {
        let exclusive = catalog.exclusive_block(category);
        let extras = catalog.extra_blocks(category);
        if exclusive.is_none() && extras.is_empty() {
            continue;
        }
        println!();
        println!("{}:", category.label());
        if let Some(block) = exclusive {
            println!("  {} [{}]", block.label, block.block_id);
        }
        for block in extras {
            println!("  {} [{}]", block.label, block.block_id);
        }
    }

    println!();
    println!("Shared (asked once per brief):");
    for rule in catalog.shared_rules() {
        let applies = rule
            .applicable_categories()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {} [{}] - {}", rule.block.label, rule.block.block_id, applies);
    }
}
