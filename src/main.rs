//! Evaluation CLI: score system relation predictions against a gold
//! standard and report mean precision, recall, and F1.

use anyhow::Context;
use clap::Parser;
use releval::{
    evaluate_alternatives, evaluate_multiset, load_gold_standard, load_system_answers,
    report::render_summary, AlternativeSlots, KnowledgeBase, RelationList,
};
use std::path::PathBuf;

/// Score system relation predictions against a gold standard.
#[derive(Parser, Debug)]
#[command(name = "releval")]
struct Args {
    /// Ground truth JSON file.
    #[arg(long)]
    gt: PathBuf,

    /// System output JSON file.
    #[arg(long)]
    so: PathBuf,

    /// Knowledge base the relations come from: "dbpedia" or "wikidata".
    #[arg(long, default_value = "dbpedia")]
    kb: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    // resolved before any file I/O so a bad selector never half-runs
    let kb: KnowledgeBase = args.kb.parse()?;

    println!(
        "Config:\n\tGround truth: {}\n\tSystem path: {}\n\tKnowledge base: {}",
        args.gt.display(),
        args.so.display(),
        kb
    );

    let summary = match kb {
        KnowledgeBase::Dbpedia => {
            let gold = load_gold_standard::<AlternativeSlots>(&args.gt)
                .with_context(|| format!("failed to load gold standard {}", args.gt.display()))?;
            let system = load_system_answers::<RelationList>(&args.so)
                .with_context(|| format!("failed to load system answers {}", args.so.display()))?;
            evaluate_alternatives(&gold, &system)
        }
        KnowledgeBase::Wikidata => {
            let gold = load_gold_standard::<RelationList>(&args.gt)
                .with_context(|| format!("failed to load gold standard {}", args.gt.display()))?;
            let system = load_system_answers::<RelationList>(&args.so)
                .with_context(|| format!("failed to load system answers {}", args.so.display()))?;
            evaluate_multiset(&gold, &system)
        }
    };

    log::info!("scored {} of {} gold questions", summary.answered, summary.total);

    println!("\n{}", render_summary(&summary));

    Ok(())
}
