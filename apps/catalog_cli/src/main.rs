use std::{
    fmt::{self, Write as _},
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result};
use catalog_core::{load_settings, AppContext, SubmissionField};
use clap::{Parser, Subcommand};
use serde::Serialize;
use shared::{
    domain::Catalog,
    protocol::{Intent, SubmissionOutcome},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Headless front end for the government services catalog")]
struct Cli {
    /// Settings file; defaults to ./gov_catalog.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Overrides the configured tracing filter (RUST_LOG still wins).
    #[arg(long, global = true)]
    log_filter: Option<String>,
    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the seed catalog.
    List,
    /// Submit a project against the seed catalog and print the result.
    Submit {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "0")]
        website_id: String,
        /// Submit the same draft this many times.
        #[arg(long, default_value_t = 1)]
        repeat: u32,
    },
    /// Apply a JSON array of intents (toggle_form, edit_field, submit) from a file or `-`.
    Replay { source: String },
}

#[derive(Debug, Serialize)]
struct RunReport {
    outcomes: Vec<SubmissionOutcome>,
    catalog: Catalog,
}

fn submission_intents(name: &str, description: &str, website_id: &str) -> Vec<Intent> {
    vec![
        Intent::ToggleForm,
        Intent::edit(SubmissionField::Name.as_str(), name),
        Intent::edit(SubmissionField::Description.as_str(), description),
        Intent::edit(SubmissionField::WebsiteId.as_str(), website_id),
        Intent::Submit,
    ]
}

fn read_intents(source: &str) -> Result<Vec<Intent>> {
    let raw = if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read intents from stdin")?;
        buf
    } else {
        fs::read_to_string(source)
            .with_context(|| format!("failed to read intents file '{source}'"))?
    };
    serde_json::from_str(&raw).context("intents must be a JSON array of tagged intents")
}

fn run_intents(context: &mut AppContext, intents: Vec<Intent>) -> Result<Vec<SubmissionOutcome>> {
    let mut outcomes = Vec::new();
    for (index, intent) in intents.into_iter().enumerate() {
        let name = intent.name();
        if let Some(outcome) = context
            .dispatch(intent)
            .with_context(|| format!("intent #{index} ({name}) was rejected"))?
        {
            outcomes.push(outcome);
        }
    }
    Ok(outcomes)
}

/// Submits the same draft `repeat` times, one intent batch at a time.
fn run_submissions(
    context: &mut AppContext,
    name: &str,
    description: &str,
    website_id: &str,
    repeat: u32,
) -> Result<Vec<SubmissionOutcome>> {
    let mut outcomes = Vec::new();
    for _ in 0..repeat {
        outcomes.extend(run_intents(
            context,
            submission_intents(name, description, website_id),
        )?);
    }
    Ok(outcomes)
}

fn render_outcome(outcome: &SubmissionOutcome) -> String {
    match outcome {
        SubmissionOutcome::Appended {
            website_id,
            project_id,
        } => format!("added project id={project_id} to website id={website_id}"),
        SubmissionOutcome::NoMatchingWebsite { website_id } => {
            format!("no website with id={website_id}; catalog unchanged")
        }
    }
}

fn write_catalog(out: &mut impl fmt::Write, catalog: &Catalog) -> fmt::Result {
    for website in catalog.websites() {
        writeln!(out, "[{}] {} <{}>", website.id, website.name, website.url)?;
        writeln!(out, "    {}", website.description)?;
        writeln!(out, "    Projects:")?;
        for project in &website.projects {
            writeln!(
                out,
                "      [{}] {} ({})",
                project.id, project.name, project.status
            )?;
            if !project.description.is_empty() {
                writeln!(out, "          {}", project.description)?;
            }
        }
    }
    Ok(())
}

fn print_report(report: &RunReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    let mut text = String::new();
    for outcome in &report.outcomes {
        writeln!(text, "{}", render_outcome(outcome))?;
    }
    write_catalog(&mut text, &report.catalog)?;
    print!("{text}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref()).context("failed to load settings")?;
    let log_filter = cli.log_filter.as_deref().unwrap_or(&settings.log_filter);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let mut context = AppContext::new(&settings);

    let outcomes = match cli.command {
        Command::List => Vec::new(),
        Command::Submit {
            name,
            description,
            website_id,
            repeat,
        } => run_submissions(&mut context, &name, &description, &website_id, repeat)?,
        Command::Replay { source } => run_intents(&mut context, read_intents(&source)?)?,
    };

    let report = RunReport {
        outcomes,
        catalog: (*context.catalog()).clone(),
    };
    print_report(&report, cli.json)
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
