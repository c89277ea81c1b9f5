//! Placement engine.
//!
//! ```text
//! ordered sizes + spacing + container width -> layout() -> ordered positions
//! ```
//!
//! The engine has no state. Correlating its output with item identity is the
//! caller's job (see [`crate::controller::FlowController`]).

pub mod flow;

pub use flow::{content_size, height_for_width, intrinsic_size, layout};
