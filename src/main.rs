//! Command-line interface for vacancy-finder.
//!
//! # Usage
//!
//! ```bash
//! # Interactive search (prompts for query, top size and keywords)
//! cargo run
//!
//! # Non-interactive search that saves the result
//! cargo run -- search --query "Rust developer" --top 10 --keywords "tokio async" --yes
//!
//! # Saved vacancies
//! cargo run -- saved list --keyword rust
//! cargo run -- saved delete https://hh.ru/vacancy/123
//! ```
//!
//! # Environment Variables
//!
//! See [`vacancy_finder::config`] for the full list.

use vacancy_finder::application::services::{
    RankingOptions, SavedVacancyService, SearchOutcome, SearchRequest, SearchService,
    VacancyMapper, clamp_top_n,
};
use vacancy_finder::config::{self, Config, MAX_PER_PAGE};
use vacancy_finder::domain::entities::{Vacancy, VacancyRecord};
use vacancy_finder::infrastructure::headhunter::HeadHunterClient;
use vacancy_finder::infrastructure::persistence::JsonVacancyRepository;
use vacancy_finder::{AppError, telemetry};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// Longest description fragment shown per vacancy.
const DESCRIPTION_PREVIEW_CHARS: usize = 150;

/// Search hh.ru vacancies and keep a shortlist.
#[derive(Parser)]
#[command(name = "vacancy-finder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with saved vacancies (overrides VACANCIES_FILE)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Search vacancies and show the best paid ones (default)
    Search(SearchArgs),

    /// Manage saved vacancies
    Saved {
        #[command(subcommand)]
        action: SavedAction,
    },
}

#[derive(clap::Args, Default)]
struct SearchArgs {
    /// Search query, e.g. "Python developer"
    #[arg(short, long)]
    query: Option<String>,

    /// How many vacancies to show in the salary top (1-50)
    #[arg(short, long)]
    top: Option<usize>,

    /// Words to look for in descriptions, separated by spaces
    #[arg(short, long)]
    keywords: Option<String>,

    /// Vacancies requested from the API (1-100)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_PER_PAGE as i64))]
    per_page: Option<u32>,

    /// Save the shown vacancies without asking
    #[arg(short = 'y', long, conflicts_with = "no_save")]
    yes: bool,

    /// Do not offer to save the result
    #[arg(long)]
    no_save: bool,
}

/// Saved vacancy subcommands.
#[derive(Subcommand)]
enum SavedAction {
    /// List saved vacancies
    List {
        /// Only show vacancies mentioning this word in title or description
        #[arg(short, long)]
        keyword: Option<String>,
    },

    /// Delete every saved vacancy with the given URL
    Delete {
        url: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "Configuration error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = telemetry::init_tracing(&config) {
        eprintln!("{} {:#}", "Logging setup failed:".yellow(), e);
    }
    config.print_summary();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{} {}", "Failed to start runtime:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli, config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(e),
    }
}

/// Prints an error with its category and picks the exit code.
fn report(error: anyhow::Error) -> ExitCode {
    if let Some(dialoguer::Error::IO(io)) = error.downcast_ref::<dialoguer::Error>()
        && io.kind() == std::io::ErrorKind::Interrupted
    {
        println!();
        println!("{}", "Interrupted by user.".yellow());
        return ExitCode::SUCCESS;
    }

    let category = error
        .downcast_ref::<AppError>()
        .map_or("Unexpected error", AppError::category);

    eprintln!("{} {:#}", format!("{}:", category).red().bold(), error);
    ExitCode::FAILURE
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    let file = cli.file.unwrap_or_else(|| config.vacancies_file.clone());
    let repository = Arc::new(JsonVacancyRepository::new(file));
    let saved = SavedVacancyService::new(repository);

    match cli.command.unwrap_or(Commands::Search(SearchArgs::default())) {
        Commands::Search(args) => search(args, &config, &saved).await,
        Commands::Saved { action } => match action {
            SavedAction::List { keyword } => list_saved(&saved, keyword.as_deref()),
            SavedAction::Delete { url, yes } => delete_saved(&saved, &url, yes),
        },
    }
}

/// Runs the interactive search flow.
///
/// # Flow
///
/// 1. Ask for the query, top size and keywords unless given as flags
/// 2. Fetch, map and rank vacancies
/// 3. Print the top list
/// 4. Offer to save the shown vacancies
async fn search(
    args: SearchArgs,
    config: &Config,
    saved: &SavedVacancyService<JsonVacancyRepository>,
) -> Result<()> {
    println!("{}", "🔎 hh.ru vacancy search".bright_blue().bold());
    println!();

    let query = match args.query {
        Some(q) => q,
        None => Input::new()
            .with_prompt("Search query (e.g. 'Python developer')")
            .allow_empty(true)
            .interact_text()?,
    };
    if query.trim().is_empty() {
        return Err(AppError::InvalidInput("search query must not be empty".to_string()).into());
    }

    let top_n = match args.top {
        Some(top) => top,
        None => {
            let answer: String = Input::new()
                .with_prompt("How many vacancies to show in the salary top?")
                .default(config.default_top_n.to_string())
                .interact_text()?;
            answer.trim().parse().unwrap_or(config.default_top_n)
        }
    };

    let keywords = match args.keywords {
        Some(k) => k,
        None => Input::new()
            .with_prompt("Keywords for descriptions, space separated (e.g. 'git docker')")
            .allow_empty(true)
            .interact_text()?,
    };
    let ranking = RankingOptions::from_keyword_line(&keywords, clamp_top_n(top_n));
    let has_keywords = !ranking.keywords.is_empty();

    let client = HeadHunterClient::new(
        &config.api_url,
        &config.user_agent,
        config.http_timeout_secs,
    )
    .map_err(AppError::from)?;
    let service = SearchService::new(
        Arc::new(client),
        VacancyMapper::new(config.vacancy_url_base.clone()),
    );

    println!();
    println!("Searching for '{}'...", query.trim().cyan());

    let request = SearchRequest {
        query,
        per_page: args.per_page.unwrap_or(config.per_page),
        ranking,
    };
    let outcome = service.search(&request).await?;

    if !print_outcome(&outcome, has_keywords) {
        return Ok(());
    }

    if args.no_save {
        return Ok(());
    }

    let confirmed = args.yes
        || Confirm::new()
            .with_prompt(format!(
                "Save these vacancies to {}?",
                saved_file_name(config)
            ))
            .default(false)
            .interact()?;

    if !confirmed {
        println!("{}", "❌ Not saved".red());
        return Ok(());
    }

    let count = saved.save_all(&outcome.vacancies)?;
    println!(
        "{}",
        format!("✅ Saved {} vacancies", count).green().bold()
    );

    Ok(())
}

/// Prints search counts and the top list.
///
/// Returns false when there is nothing to show.
fn print_outcome(outcome: &SearchOutcome, has_keywords: bool) -> bool {
    if outcome.fetched == 0 {
        println!("{}", "No vacancies found for this query.".yellow());
        return false;
    }

    if outcome.rejected > 0 {
        println!(
            "{}",
            format!("Skipped {} malformed vacancies.", outcome.rejected).yellow()
        );
    }

    let mapped = outcome.fetched - outcome.rejected;
    if mapped == 0 {
        println!("{}", "Could not read any of the vacancies.".yellow());
        return false;
    }

    println!();
    println!("Found {} vacancies.", mapped.to_string().bright_white().bold());
    if has_keywords {
        println!(
            "{} left after keyword filtering.",
            outcome.filtered.to_string().bright_white().bold()
        );
    }

    if outcome.vacancies.is_empty() {
        println!("{}", "Nothing matches the keywords.".yellow());
        return false;
    }

    println!();
    println!(
        "{}",
        format!("Top {} vacancies by salary:", outcome.vacancies.len())
            .bright_white()
            .bold()
    );
    println!();

    for (i, vacancy) in outcome.vacancies.iter().enumerate() {
        print_vacancy(i + 1, vacancy);
    }

    true
}

fn print_vacancy(position: usize, vacancy: &Vacancy) {
    println!("{}. {}", position, vacancy.title().cyan().bold());
    println!("   Salary: {}", vacancy.salary().bright_green());
    println!("   Link:   {}", vacancy.url().bright_black());
    if !vacancy.description().is_empty() {
        println!("   About:  {}", description_preview(vacancy.description()));
    }
    println!("{}", "─".repeat(80).bright_black());
}

/// Cuts a description to [`DESCRIPTION_PREVIEW_CHARS`] characters and marks the cut.
fn description_preview(description: &str) -> String {
    let preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    format!("{}...", preview)
}

fn saved_file_name(config: &Config) -> String {
    config.vacancies_file.display().to_string()
}

/// Lists saved vacancies.
fn list_saved(
    saved: &SavedVacancyService<JsonVacancyRepository>,
    keyword: Option<&str>,
) -> Result<()> {
    println!("{}", "📋 Saved vacancies".bright_blue().bold());
    println!();

    let records = saved.list(keyword);

    if records.is_empty() {
        println!("{}", "  No saved vacancies".yellow());
        return Ok(());
    }

    for record in &records {
        print_record(record);
    }

    println!();
    println!("  Total: {}", records.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

fn print_record(record: &VacancyRecord) {
    println!("  {}", record.title.cyan().bold());
    println!("    {}", record.salary.bright_green());
    println!("    {}", record.url.bright_black());
}

/// Deletes saved vacancies by URL with confirmation prompt.
fn delete_saved(
    saved: &SavedVacancyService<JsonVacancyRepository>,
    url: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑  Delete saved vacancy".bright_blue().bold());
    println!();
    println!("  URL: {}", url.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete every saved vacancy with this URL?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    if saved.remove(url)? {
        println!("{}", "✅ Deleted".green().bold());
    } else {
        println!("{}", "⚠️  No saved vacancy with this URL".yellow());
    }
    println!();

    Ok(())
}
