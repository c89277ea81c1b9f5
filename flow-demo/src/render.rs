//! Update consumer standing in for the renderer.

use flow_layout::{LayoutUpdate, Point};
use tokio::sync::mpsc;

/// Log every update as it arrives and return the last one.
pub async fn consume(mut rx: mpsc::UnboundedReceiver<LayoutUpdate<u32>>) -> Option<LayoutUpdate<u32>> {
    let mut last = None;

    while let Some(update) = rx.recv().await {
        tracing::info!(
            generation = update.generation,
            phase = ?update.phase,
            animate = update.animate,
            items = update.positions.len(),
            rows = rows(&update).len(),
            height = update.content_size.height,
            "layout update"
        );
        last = Some(update);
    }

    last
}

/// Group item ids by line, top to bottom.
pub fn rows(update: &LayoutUpdate<u32>) -> Vec<(f32, Vec<(u32, Point)>)> {
    let mut rows: Vec<(f32, Vec<(u32, Point)>)> = Vec::new();

    for (id, pos) in &update.positions {
        let same_line = rows.last().is_some_and(|(y, _)| *y == pos.y);
        if same_line {
            if let Some((_, row)) = rows.last_mut() {
                row.push((*id, *pos));
            }
        } else {
            rows.push((pos.y, vec![(*id, *pos)]));
        }
    }

    rows
}
