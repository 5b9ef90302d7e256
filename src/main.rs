use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;

use looks_feed::config::FeedConfig;
use looks_feed::engine::FeedEngine;
use looks_feed::events::FeedEvent;
use looks_feed::logging::init_tracing;
use looks_feed::model::{LookId, ReactionKind};

#[derive(Parser, Debug)]
#[command(name = "looks-feed")]
#[command(version)]
#[command(about = "Fetch the looks feed and print its render models", long_about = None)]
struct Args {
    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the feed locator (URL or path to a JSON document)
    #[arg(short, long)]
    source: Option<String>,

    /// Reaction to record before printing, as KIND:ID (e.g. heart:1)
    #[arg(short, long = "react", value_parser = parse_reaction)]
    reactions: Vec<(ReactionKind, LookId)>,
}

fn parse_reaction(value: &str) -> Result<(ReactionKind, LookId), String> {
    let (kind, id) = value
        .split_once(':')
        .ok_or_else(|| format!("expected KIND:ID, got '{}'", value))?;
    let kind = kind.parse::<ReactionKind>()?;
    let id = id
        .trim()
        .parse::<LookId>()
        .map_err(|e| format!("invalid look id '{}': {}", id, e))?;
    Ok((kind, id))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => FeedConfig::load_from(path)?,
        None => FeedConfig::load()?,
    };
    if let Some(source) = args.source {
        config.source.location = source;
    }
    config.validate()?;

    let engine = FeedEngine::from_config(&config, tokio::runtime::Handle::current())
        .context("Failed to set up feed source")?;
    let events = engine.subscribe();

    if let Err(err) = engine.refresh().await {
        bail!("Failed to fetch '{}': {}", config.source.location, err);
    }

    for (kind, id) in args.reactions {
        engine.react(kind, id);
    }

    for event in events.try_iter() {
        if let FeedEvent::ReactionChanged { kind, id, count } = event {
            println!("reaction {} on {} -> {}", kind, id, count);
        }
    }

    for index in 0..engine.number_of_items() {
        let Some(model) = engine.render_model_at(index) else {
            continue;
        };
        println!(
            "#{} [{}] {} | heart {} | fire {} | video {} | profile {}",
            index,
            model.id,
            model.title,
            model.left_count,
            model.right_count,
            model.video_resource,
            model.profile_resource
        );
    }

    Ok(())
}
