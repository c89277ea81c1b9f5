//! Flow placement - left-to-right wrapping layout.
//!
//! Items are laid out horizontally until the next one would exceed the
//! container width, then wrap to the next line. The same `spacing` separates
//! items on a line and consecutive lines.
//!
//! Everything here is a pure function of its arguments: identical inputs
//! always produce identical output, and the output has one entry per input
//! size, in input order.

use crate::primitives::{Point, Size};

/// Place `sizes` in a wrapping flow and return one top-left position per size.
///
/// The first item on a line never wraps, so an item wider than the whole
/// container starts its own line at `x = 0` and overflows. A
/// `container_width <= 0` therefore puts every item on its own line.
pub fn layout(sizes: &[Size], spacing: f32, container_width: f32) -> Vec<Point> {
    let mut positions = Vec::with_capacity(sizes.len());

    let mut line_x = 0.0f32;
    let mut line_y = 0.0f32;
    let mut line_height = 0.0f32;

    for size in sizes {
        // Check if we need to wrap to next line
        if line_x > 0.0 && line_x + size.width > container_width {
            line_y += line_height + spacing;
            line_x = 0.0;
            line_height = 0.0;
        }

        positions.push(Point::new(line_x, line_y));

        // Advance position
        line_x += size.width + spacing;
        line_height = line_height.max(size.height);
    }

    positions
}

/// Bounding box of placed items, measured from the container origin.
///
/// `positions` must correspond index-for-index to `sizes` (as returned by
/// [`layout`]); extra entries on either side are ignored.
pub fn content_size(sizes: &[Size], positions: &[Point]) -> Size {
    sizes
        .iter()
        .zip(positions)
        .fold(Size::ZERO, |acc, (size, pos)| {
            Size::new(
                acc.width.max(pos.x + size.width),
                acc.height.max(pos.y + size.height),
            )
        })
}

/// Size of all items on a single unwrapped line.
///
/// This is the narrowest container width at which nothing wraps.
pub fn intrinsic_size(sizes: &[Size], spacing: f32) -> Size {
    if sizes.is_empty() {
        return Size::ZERO;
    }

    let mut width = 0.0f32;
    let mut max_height = 0.0f32;

    for size in sizes {
        width += size.width;
        max_height = max_height.max(size.height);
    }

    Size::new(width + spacing * (sizes.len() - 1) as f32, max_height)
}

/// Total content height at `container_width`, without allocating positions.
pub fn height_for_width(sizes: &[Size], spacing: f32, container_width: f32) -> f32 {
    let mut line_x = 0.0f32;
    let mut line_y = 0.0f32;
    let mut line_height = 0.0f32;

    for size in sizes {
        if line_x > 0.0 && line_x + size.width > container_width {
            line_y += line_height + spacing;
            line_x = 0.0;
            line_height = 0.0;
        }

        line_x += size.width + spacing;
        line_height = line_height.max(size.height);
    }

    line_y + line_height
}

// =========================================================================
// Tests
// =========================================================================
