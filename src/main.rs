//! Mini Crossword - CLI
//!
//! Builds a daily mini crossword from a JSON file of news stories.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use mini_crossword::{
    clues::{
        CacheOnlyClueProvider, CachedClueProvider, ClueProvider, DisabledClueProvider,
        JsonFileClueCache,
    },
    commands::{ConstructionEngine, inspect_template, select_stories},
    config::EngineConfig,
    core::{GridTemplate, StoryRecord, builtin_template, builtin_templates, choose_template},
    output::{print_puzzle, print_report, print_template_list, print_template_summary},
    ranker::CandidateRanker,
    wordlists::loader::load_stopwords,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "mini_crossword",
    about = "Daily 5x5 mini crossword construction from news stories",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a puzzle from a JSON array of stories
    Generate {
        /// Stories file: [{"title", "summary", "link", "source"}]
        #[arg(short = 's', long)]
        stories: PathBuf,

        /// Reduce the stories to 4 local and 1 syndicated before ranking
        #[arg(long)]
        pick: bool,

        /// Built-in template name (default: seeded random choice)
        #[arg(short, long)]
        template: Option<String>,

        /// Seed for the template choice
        #[arg(long)]
        seed: Option<u64>,

        /// Puzzle date, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// TOML engine configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Extra stopwords, one per line
        #[arg(long)]
        stopwords: Option<PathBuf>,

        /// JSON clue cache replayed for provider clues
        #[arg(long)]
        cache: Option<PathBuf>,

        /// Write the puzzle document here
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the document JSON instead of the grid
        #[arg(long)]
        json: bool,
    },

    /// Show the derived numbering of a built-in template
    Numbering {
        /// Template name
        template: String,
    },

    /// List built-in templates
    Templates,
}

/// Options for the generate command
struct GenerateArgs {
    stories: PathBuf,
    pick: bool,
    template: Option<String>,
    seed: Option<u64>,
    date: Option<NaiveDate>,
    config: Option<PathBuf>,
    stopwords: Option<PathBuf>,
    cache: Option<PathBuf>,
    output: Option<PathBuf>,
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            stories,
            pick,
            template,
            seed,
            date,
            config,
            stopwords,
            cache,
            output,
            json,
        } => {
            run_generate_command(GenerateArgs {
                stories,
                pick,
                template,
                seed,
                date,
                config,
                stopwords,
                cache,
                output,
                json,
            })
            .await
        }
        Commands::Numbering { template } => run_numbering_command(&template),
        Commands::Templates => {
            print_template_list(&builtin_templates());
            Ok(())
        }
    }
}

async fn run_generate_command(args: GenerateArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => EngineConfig::load_from(path)?,
        None => EngineConfig::default(),
    };
    let date = args.date.unwrap_or_else(|| chrono::Local::now().date_naive());

    let mut stories = load_stories(&args.stories)?;
    if args.pick {
        stories = select_stories(&stories);
    }
    info!(stories = stories.len(), "Loaded stories");

    let template = resolve_template(args.template.as_deref(), args.seed)?;

    let mut engine = ConstructionEngine::new(config.clone());
    if let Some(path) = &args.stopwords {
        let extra = load_stopwords(path)
            .with_context(|| format!("Failed to read stopwords from {}", path.display()))?;
        engine = engine.with_ranker(CandidateRanker::default().with_extra_stopwords(extra));
    }

    let provider: Box<dyn ClueProvider> = match &args.cache {
        Some(path) => Box::new(CachedClueProvider::new(
            CacheOnlyClueProvider,
            JsonFileClueCache::open(path).await,
            date,
        )),
        None => Box::new(DisabledClueProvider),
    };

    let (document, report) = engine
        .build(&template, &stories, None, provider.as_ref(), date)
        .await?;

    if let Some(path) = &args.output {
        let json = document.to_json()?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "Wrote puzzle document");
    }

    if args.json {
        println!("{}", document.to_json()?);
    } else {
        print_puzzle(&document);
        print_report(&report, config.clue_call_budget);
    }

    Ok(())
}

fn run_numbering_command(name: &str) -> Result<()> {
    let template = builtin_template(name).ok_or_else(|| anyhow!("Unknown template: {name}"))?;
    let summary = inspect_template(&template)?;
    print_template_summary(&summary);
    Ok(())
}

fn load_stories(path: &Path) -> Result<Vec<StoryRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read stories from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse stories in {}", path.display()))
}

fn resolve_template(name: Option<&str>, seed: Option<u64>) -> Result<GridTemplate> {
    if let Some(name) = name {
        return builtin_template(name).ok_or_else(|| anyhow!("Unknown template: {name}"));
    }

    let templates = builtin_templates();
    let chosen = match seed {
        Some(seed) => choose_template(&templates, &mut StdRng::seed_from_u64(seed)),
        None => choose_template(&templates, &mut rand::rng()),
    };
    chosen
        .cloned()
        .ok_or_else(|| anyhow!("No built-in templates available"))
}
