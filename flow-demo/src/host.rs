//! Simulated rendering host.
//!
//! Each item "renders" on its own task and reports its size after a random
//! delay, so reports arrive out of order and interleaved with container
//! resizes and removals, the way a real host delivers them.

use std::time::Duration;

use flow_layout::FlowEvent;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::item::Item;

/// What the host does besides measuring items.
#[derive(Debug, Clone)]
pub struct HostPlan {
    /// Container width reported after the first render.
    pub width: f32,
    /// Width reported later, simulating a window resize.
    pub resize_to: Option<f32>,
    /// Number of items removed (tapped) while measurement is still running.
    pub remove: usize,
}

/// Spawn the host tasks. Events stop once every returned task has finished.
pub fn spawn(
    items: &[Item],
    plan: &HostPlan,
    rng: &mut StdRng,
    tx: &mpsc::UnboundedSender<FlowEvent<u32>>,
) -> Vec<JoinHandle<()>> {
    let mut tasks = Vec::with_capacity(items.len() + 2);

    tasks.push(spawn_width(plan.width, plan.resize_to, tx.clone()));

    for item in items {
        let delay = Duration::from_millis(rng.gen_range(0..30));
        let tx = tx.clone();
        let (id, size) = (item.id, item.size());
        tasks.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(FlowEvent::ItemSize { id, size });
        }));
    }

    if plan.remove > 0 {
        let mut removed: Vec<u32> = items.iter().map(|item| item.id).collect();
        removed.shuffle(rng);
        removed.truncate(plan.remove);

        let remaining: Vec<u32> = items
            .iter()
            .map(|item| item.id)
            .filter(|id| !removed.contains(id))
            .collect();

        tracing::info!(?removed, "scheduling item removal");
        let tx = tx.clone();
        tasks.push(tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(15)).await;
            let _ = tx.send(FlowEvent::Items(remaining));
        }));
    }

    tasks
}

fn spawn_width(
    width: f32,
    resize_to: Option<f32>,
    tx: mpsc::UnboundedSender<FlowEvent<u32>>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(5)).await;
        let _ = tx.send(FlowEvent::Width(width));

        if let Some(resized) = resize_to {
            tokio::time::sleep(Duration::from_millis(40)).await;
            let _ = tx.send(FlowEvent::Width(resized));
        }
    })
}
