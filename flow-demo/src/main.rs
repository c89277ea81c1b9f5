//! Flow demo - drives a `FlowController` from a simulated rendering host.
//!
//! Items report their sizes from independent tasks in random order while the
//! container width resolves, the window is resized, and a few items are
//! removed. Every published layout is logged; the final rows are printed.

mod host;
mod item;
mod render;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use flow_layout::{FlowConfig, FlowController, Phase};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::host::HostPlan;

#[derive(Debug, Parser)]
#[command(name = "flow-demo", about = "Wrapping flow layout driven by async measurement")]
struct Args {
    /// Number of items to lay out.
    #[arg(long, default_value_t = 31)]
    items: u32,

    /// Container width reported after the first render.
    #[arg(long, default_value_t = 400.0)]
    width: f32,

    /// Width to resize to once measurement is underway.
    #[arg(long)]
    resize_to: Option<f32>,

    /// Items to remove while measurement is still running.
    #[arg(long, default_value_t = 0)]
    remove: usize,

    /// Seed for item widths and report order.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// JSON flow config (spacing, animate_changes).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => FlowConfig::load(path)
            .with_context(|| format!("loading flow config from {}", path.display()))?,
        None => FlowConfig::default(),
    };

    tracing::info!(items = args.items, width = args.width, spacing = config.spacing, "Starting flow demo");

    let mut rng = StdRng::seed_from_u64(args.seed);
    let items = item::generate(args.items, &mut rng);

    let (sink, updates) = flow_layout::sink::channel();
    let renderer = tokio::spawn(render::consume(updates));

    let mut flow = FlowController::with_sink(config, sink);
    flow.set_items(items.iter().map(|item| item.id));

    let (tx, mut rx) = mpsc::unbounded_channel();
    let plan = HostPlan {
        width: args.width,
        resize_to: args.resize_to,
        remove: args.remove,
    };
    host::spawn(&items, &plan, &mut rng, &tx);
    drop(tx);

    while let Some(event) = rx.recv().await {
        flow.apply(event);
    }

    if flow.phase() != Phase::Ready {
        tracing::warn!(phase = ?flow.phase(), "host finished before every item was measured");
    }

    // Dropping the controller closes the sink, which ends the renderer.
    drop(flow);
    let last = renderer.await.context("renderer task failed")?;

    match last {
        Some(update) => {
            for (y, row) in render::rows(&update) {
                let ids: Vec<String> = row.iter().map(|(id, p)| format!("{id}@{}", p.x)).collect();
                println!("y={y:>6}: {}", ids.join(" "));
            }
            println!(
                "{} items, content {}x{}",
                update.positions.len(),
                update.content_size.width,
                update.content_size.height
            );
        }
        None => println!("no layout published"),
    }

    Ok(())
}
