//! Property tests for the placement engine over seeded random inputs.
//!
//! Sizes are whole numbers so every sum the engine performs is exact in
//! `f32`, which lets the checks below use strict equality.

use flow_layout::{layout, Point, Size};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct Case {
    sizes: Vec<Size>,
    spacing: f32,
    width: f32,
}

fn random_case(rng: &mut StdRng) -> Case {
    let count = rng.gen_range(0..40);
    let sizes = (0..count)
        .map(|_| Size::new(rng.gen_range(1..=150) as f32, rng.gen_range(1..=60) as f32))
        .collect();

    Case {
        sizes,
        spacing: rng.gen_range(0..=12) as f32,
        width: rng.gen_range(0..=500) as f32,
    }
}

fn cases() -> Vec<Case> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..200).map(|_| random_case(&mut rng)).collect()
}

/// Height of the line that item `i` sits on.
fn line_height(sizes: &[Size], positions: &[Point], i: usize) -> f32 {
    let y = positions[i].y;
    sizes
        .iter()
        .zip(positions)
        .filter(|(_, p)| p.y == y)
        .map(|(s, _)| s.height)
        .fold(0.0, f32::max)
}

#[test]
fn test_length_preserved() {
    for case in cases() {
        let positions = layout(&case.sizes, case.spacing, case.width);
        assert_eq!(positions.len(), case.sizes.len());
    }
}

#[test]
fn test_deterministic() {
    for case in cases() {
        let a = layout(&case.sizes, case.spacing, case.width);
        let b = layout(&case.sizes, case.spacing, case.width);
        assert_eq!(a, b);
    }
}

#[test]
fn test_first_item_at_origin() {
    for case in cases().into_iter().filter(|c| !c.sizes.is_empty()) {
        let positions = layout(&case.sizes, case.spacing, case.width);
        assert_eq!(positions[0], Point::ORIGIN);
    }
}

#[test]
fn test_same_line_spacing_and_no_overflow() {
    for case in cases() {
        let positions = layout(&case.sizes, case.spacing, case.width);

        for i in 0..positions.len() {
            let (pos, size) = (positions[i], case.sizes[i]);

            // Only an item that starts its line may overflow the container.
            if pos.x > 0.0 {
                assert!(pos.x + size.width <= case.width, "item {i} overflows");
            }

            if i + 1 < positions.len() && positions[i + 1].y == pos.y {
                assert_eq!(pos.x + size.width + case.spacing, positions[i + 1].x);
            }
        }
    }
}

#[test]
fn test_wrap_correctness() {
    for case in cases() {
        let positions = layout(&case.sizes, case.spacing, case.width);

        for i in 0..positions.len().saturating_sub(1) {
            let next_x = positions[i].x + case.sizes[i].width + case.spacing;
            let overflows = next_x + case.sizes[i + 1].width > case.width;

            if overflows {
                let expected_y =
                    positions[i].y + line_height(&case.sizes, &positions, i) + case.spacing;
                assert_eq!(positions[i + 1], Point::new(0.0, expected_y));
            } else {
                assert_eq!(positions[i + 1], Point::new(next_x, positions[i].y));
            }
        }
    }
}

#[test]
fn test_monotonic_y() {
    for case in cases() {
        let positions = layout(&case.sizes, case.spacing, case.width);
        assert!(positions.windows(2).all(|w| w[0].y <= w[1].y));
    }
}

#[test]
fn test_documented_examples() {
    let three = vec![Size::new(60.0, 30.0); 3];
    assert_eq!(
        layout(&three, 10.0, 130.0),
        vec![Point::new(0.0, 0.0), Point::new(70.0, 0.0), Point::new(0.0, 40.0)]
    );

    assert!(layout(&[], 10.0, 999.0).is_empty());

    assert_eq!(layout(&[Size::new(200.0, 30.0)], 10.0, 100.0), vec![Point::ORIGIN]);
}
