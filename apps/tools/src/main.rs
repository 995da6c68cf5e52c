use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use shared::{
    domain::{ProductId, VoteDirection},
    protocol::VoteIntent,
};
use tracing_subscriber::EnvFilter;
use vote_core::{config::load_settings, seed, ListController, OrderedView, RenderCounter, VoteOutcome};

#[derive(Parser, Debug)]
#[command(name = "vote-tools", about = "Headless product vote list")]
struct Cli {
    /// JSON seed file; overrides the configured seed path.
    #[arg(long)]
    seed: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the list in vote order.
    Show,
    /// Apply votes in the order given, then print the list.
    Vote {
        /// Votes as ID:DIRECTION, e.g. `3:up` or `1:-1`.
        #[arg(required = true, value_parser = parse_vote)]
        votes: Vec<VoteIntent>,
    },
}

fn parse_vote(raw: &str) -> Result<VoteIntent, String> {
    let (id, direction) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected ID:DIRECTION, got '{raw}'"))?;
    let id = id
        .trim()
        .parse::<i64>()
        .map_err(|err| format!("invalid product id '{id}': {err}"))?;
    let direction = direction
        .parse::<VoteDirection>()
        .map_err(|err| err.to_string())?;
    Ok(VoteIntent {
        product_id: ProductId(id),
        direction,
    })
}

#[derive(Debug, Serialize)]
struct RankedRow<'a> {
    rank: usize,
    id: ProductId,
    votes: i64,
    title: &'a str,
    url: &'a str,
}

fn ranked_rows(view: &OrderedView) -> Vec<RankedRow<'_>> {
    view.iter()
        .enumerate()
        .map(|(index, product)| RankedRow {
            rank: index + 1,
            id: product.id,
            votes: product.votes,
            title: &product.title,
            url: &product.url,
        })
        .collect()
}

fn render_text(view: &OrderedView) -> String {
    let mut out = format!("{:>4}  {:>6}  {:>6}  TITLE\n", "RANK", "ID", "VOTES");
    for row in ranked_rows(view) {
        out.push_str(&format!(
            "{:>4}  {:>6}  {:>6}  {}\n",
            row.rank, row.id, row.votes, row.title
        ));
    }
    out
}

fn render_json(view: &OrderedView) -> Result<String> {
    serde_json::to_string_pretty(&ranked_rows(view)).context("failed to encode ordered view")
}

fn render(view: &OrderedView, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(view)),
        OutputFormat::Json => render_json(view),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings();
    if cli.seed.is_some() {
        settings.seed_path = cli.seed;
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .init();

    let products = seed::load_seed(settings.seed_path.as_deref())?;
    let surface = RenderCounter::default();
    let mut controller = ListController::new(products, &surface).context("invalid seed")?;

    if let Command::Vote { votes } = cli.command {
        for intent in votes {
            if let VoteOutcome::UnknownProduct(id) = controller.apply_intent(intent) {
                eprintln!("ignored vote for unknown product {id}");
            }
        }
        tracing::info!(
            renders = surface.renders(),
            revision = controller.revision(),
            "votes applied"
        );
    }

    print!("{}", render(&controller.ordered_view(), cli.format)?);
    Ok(())
}
