//! Measurement-reactive flow controller.
//!
//! Bridges asynchronous measurement reports into a stable flow layout:
//!
//! ```text
//! host width report  ─┐
//! item size reports  ─┼─> FlowController ─> layout() ─> LayoutUpdate ─> sink / caller
//! item sequence      ─┘
//! ```
//!
//! Reports may arrive in any order and any number of times. The published
//! layout is always a pure function of the current item order, the current
//! measurement table, and the current width, so once every item has reported
//! the result does not depend on arrival order. Positions are never read back
//! as inputs, so a recompute cannot trigger another recompute.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::config::{FlowConfig, DEFAULT_SPACING};
use crate::layout::{content_size, layout};
use crate::measurement::MeasurementTable;
use crate::primitives::{Point, Size};
use crate::sink::LayoutSink;

/// Lifecycle of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Container width unknown; nothing is published.
    #[default]
    Unmeasured,
    /// Width known, but some current item has not reported a size yet.
    Measuring,
    /// Width known and every current item measured.
    Ready,
}

/// An input to the controller, produced by the rendering host.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowEvent<Id> {
    /// The ordered item sequence changed (addition, removal, reordering).
    Items(Vec<Id>),
    /// The container reported its width.
    Width(f32),
    /// One item reported its rendered size.
    ItemSize { id: Id, size: Size },
}

/// One published layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutUpdate<Id: Hash + Eq> {
    /// Top-left offset of each item, in current item order.
    pub positions: IndexMap<Id, Point>,
    /// Bounding box of all placed items.
    pub content_size: Size,
    /// Whether the host should animate into this layout.
    ///
    /// False for the update caused by the first width resolution, since
    /// there is no earlier visible layout to animate from.
    pub animate: bool,
    /// Controller phase after this update.
    pub phase: Phase,
    /// Increases by one for every published update.
    pub generation: u64,
}

impl<Id: Hash + Eq> LayoutUpdate<Id> {
    /// Position of `id` in this update.
    pub fn position(&self, id: &Id) -> Option<Point> {
        self.positions.get(id).copied()
    }
}

/// Everything a published update depends on. Equal inputs give equal updates.
#[derive(Debug, Clone, PartialEq)]
struct LayoutInputs<Id> {
    ids: Vec<Id>,
    sizes: Vec<Size>,
    width: f32,
    spacing: f32,
    phase: Phase,
}

/// Owns the measurement state of one flow container and republishes
/// positions whenever it changes.
///
/// All mutating methods return the update they caused, if any. `None` means
/// nothing observable changed (unknown width, ignored report, or inputs
/// identical to the last pass).
pub struct FlowController<Id: Hash + Eq> {
    config: FlowConfig,
    /// Current item order, as supplied by the host.
    items: Vec<Id>,
    /// Same ids as `items`, for membership checks.
    live: HashSet<Id>,
    measurements: MeasurementTable<Id>,
    width: Option<f32>,
    phase: Phase,
    last_inputs: Option<LayoutInputs<Id>>,
    positions: IndexMap<Id, Point>,
    content_size: Size,
    generation: u64,
    sink: Option<Box<dyn LayoutSink<Id>>>,
}

impl<Id> FlowController<Id>
where
    Id: Clone + Eq + Hash + Debug,
{
    /// Create a controller with no items and no known width.
    ///
    /// An invalid spacing (negative or non-finite) is replaced by
    /// [`DEFAULT_SPACING`].
    pub fn new(mut config: FlowConfig) -> Self {
        if let Err(err) = config.validate() {
            tracing::warn!(%err, "invalid flow config; using default spacing");
            config.spacing = DEFAULT_SPACING;
        }

        Self {
            config,
            items: Vec::new(),
            live: HashSet::new(),
            measurements: MeasurementTable::new(),
            width: None,
            phase: Phase::Unmeasured,
            last_inputs: None,
            positions: IndexMap::new(),
            content_size: Size::ZERO,
            generation: 0,
            sink: None,
        }
    }

    /// Create a controller that also pushes every update into `sink`.
    pub fn with_sink(config: FlowConfig, sink: impl LayoutSink<Id> + 'static) -> Self {
        let mut controller = Self::new(config);
        controller.set_sink(sink);
        controller
    }

    /// Replace the output sink.
    pub fn set_sink(&mut self, sink: impl LayoutSink<Id> + 'static) {
        self.sink = Some(Box::new(sink));
    }

    // =====================================================================
    // Inputs
    // =====================================================================

    /// Apply a host event (call from the host's event loop).
    pub fn apply(&mut self, event: FlowEvent<Id>) -> Option<LayoutUpdate<Id>> {
        match event {
            FlowEvent::Items(ids) => self.set_items(ids),
            FlowEvent::Width(width) => self.width_measured(width),
            FlowEvent::ItemSize { id, size } => self.item_measured(id, size),
        }
    }

    /// Replace the item sequence.
    ///
    /// Measurements of ids that are no longer present are dropped. Duplicate
    /// ids keep their first occurrence.
    pub fn set_items(&mut self, ids: impl IntoIterator<Item = Id>) -> Option<LayoutUpdate<Id>> {
        let mut items = Vec::new();
        let mut live = HashSet::new();

        for id in ids {
            if live.insert(id.clone()) {
                items.push(id);
            } else {
                tracing::warn!(?id, "duplicate item id in flow sequence; keeping first occurrence");
            }
        }

        let dropped = self.measurements.retain_ids(&live);
        if dropped > 0 {
            tracing::debug!(dropped, "dropped measurements of removed items");
        }

        self.items = items;
        self.live = live;
        self.recompute(self.config.animate_changes)
    }

    /// Record the container width.
    ///
    /// The update caused by the first width resolution carries
    /// `animate == false`, even when no items are set yet. Updates from
    /// later `set_items` calls then animate, since the host already has a
    /// visible (empty) layout at that width.
    pub fn width_measured(&mut self, width: f32) -> Option<LayoutUpdate<Id>> {
        if !width.is_finite() {
            tracing::warn!(width, "ignoring non-finite container width");
            return None;
        }
        if self.width == Some(width) {
            return None;
        }

        let first = self.width.is_none();
        self.width = Some(width);

        if first {
            tracing::debug!(width, "container width resolved");
        }

        self.recompute(!first && self.config.animate_changes)
    }

    /// Record the rendered size of one item.
    ///
    /// Reports for ids outside the current sequence (for example a late
    /// report from an item that was just removed) are ignored.
    pub fn item_measured(&mut self, id: Id, size: Size) -> Option<LayoutUpdate<Id>> {
        if !self.live.contains(&id) {
            tracing::debug!(?id, "ignoring measurement for item not in sequence");
            return None;
        }
        if !size.is_finite() {
            tracing::warn!(?id, ?size, "ignoring non-finite item size");
            return None;
        }

        tracing::trace!(?id, ?size, "item measured");
        if !self.measurements.insert(id, size) {
            return None;
        }
        self.recompute(self.config.animate_changes)
    }

    // =====================================================================
    // Recompute
    // =====================================================================

    fn recompute(&mut self, animate: bool) -> Option<LayoutUpdate<Id>> {
        self.phase = self.current_phase();

        let width = self.width?;
        let inputs = LayoutInputs {
            ids: self.items.clone(),
            sizes: self.measurements.ordered_sizes(&self.items),
            width,
            spacing: self.config.spacing,
            phase: self.phase,
        };

        if self.last_inputs.as_ref() == Some(&inputs) {
            tracing::trace!("layout inputs unchanged; skipping recompute");
            return None;
        }

        let positions = layout(&inputs.sizes, inputs.spacing, inputs.width);
        self.content_size = content_size(&inputs.sizes, &positions);
        self.positions = inputs.ids.iter().cloned().zip(positions).collect();
        self.generation += 1;
        self.last_inputs = Some(inputs);

        tracing::debug!(
            generation = self.generation,
            items = self.items.len(),
            width,
            animate,
            phase = ?self.phase,
            "flow layout recomputed"
        );

        let update = LayoutUpdate {
            positions: self.positions.clone(),
            content_size: self.content_size,
            animate,
            phase: self.phase,
            generation: self.generation,
        };

        if let Some(sink) = self.sink.as_mut() {
            sink.publish(&update);
        }

        Some(update)
    }

    fn current_phase(&self) -> Phase {
        if self.width.is_none() {
            Phase::Unmeasured
        } else if self.items.iter().all(|id| self.measurements.contains(id)) {
            Phase::Ready
        } else {
            Phase::Measuring
        }
    }

    // =====================================================================
    // Accessors
    // =====================================================================

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last reported container width.
    pub fn container_width(&self) -> Option<f32> {
        self.width
    }

    /// Published position of `id`, or the origin if none has been published.
    pub fn position(&self, id: &Id) -> Point {
        self.positions.get(id).copied().unwrap_or(Point::ORIGIN)
    }

    /// Last published positions, in item order.
    pub fn positions(&self) -> &IndexMap<Id, Point> {
        &self.positions
    }

    /// Bounding box of the last published layout.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Number of updates published so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current item order.
    pub fn items(&self) -> &[Id] {
        &self.items
    }

    /// Measurements received for current items.
    pub fn measurements(&self) -> &MeasurementTable<Id> {
        &self.measurements
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }
}

// =========================================================================
// Tests
// =========================================================================
