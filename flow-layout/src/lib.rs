//! Flow Layout: wrapping placement driven by asynchronous measurement.
//!
//! Two pieces, composed in sequence:
//! - [`layout()`]: a pure placement function. Ordered sizes, a spacing, and a
//!   container width go in; one top-left position per size comes out.
//! - [`FlowController`]: accumulates per-item size reports and container
//!   width reports as they arrive, re-runs the placement function when its
//!   inputs change, and publishes [`LayoutUpdate`]s keyed by item id.
//!
//! # Usage
//!
//! ```
//! use flow_layout::{FlowConfig, FlowController, Point, Size};
//!
//! let mut flow = FlowController::new(FlowConfig::default());
//! flow.set_items([1, 2, 3]);
//!
//! // The first width never animates.
//! let first = flow.width_measured(130.0).unwrap();
//! assert!(!first.animate);
//!
//! for id in [3, 1, 2] {
//!     flow.item_measured(id, Size::new(60.0, 30.0));
//! }
//! assert_eq!(flow.position(&3), Point::new(0.0, 40.0));
//! ```

// Core primitives
pub mod primitives;

// Placement engine
pub mod layout;

// Measurement state and the reactive controller
pub mod measurement;
pub mod controller;
pub mod sink;

// Configuration and errors
pub mod config;
pub mod error;

// Re-export core types
pub use primitives::{Point, Size};
pub use layout::{content_size, height_for_width, intrinsic_size, layout};
pub use measurement::MeasurementTable;
pub use controller::{FlowController, FlowEvent, LayoutUpdate, Phase};
pub use sink::{ChannelSink, LayoutSink};
pub use config::{FlowConfig, DEFAULT_SPACING};
pub use error::{FlowError, Result};
