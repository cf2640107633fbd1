#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

fn generate_seeded(seed: u64) -> Vec<Obstacle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    generate(&mut rng).unwrap()
}

// =============================================================
// Set shape
// =============================================================

#[test]
fn generates_full_quotas_in_order() {
    let set = generate_seeded(1);
    assert_eq!(set.len(), RECT_COUNT + CIRCLE_COUNT);
    assert!(set[..RECT_COUNT].iter().all(|ob| ob.is_rect()));
    assert!(set[RECT_COUNT..].iter().all(|ob| ob.is_circle()));
}

#[test]
fn samples_stay_within_the_sampling_ranges() {
    for seed in 0..50 {
        for ob in generate_seeded(seed) {
            match ob {
                Obstacle::Rect(r) => {
                    assert!(RECT_X.contains(&r.x));
                    assert!(RECT_Y.contains(&r.y));
                    assert!(RECT_W.contains(&r.width));
                    assert!(RECT_H.contains(&r.height));
                }
                Obstacle::Circle(c) => {
                    assert!(CIRCLE_X.contains(&c.center.x));
                    assert!(CIRCLE_Y.contains(&c.center.y));
                    assert!(CIRCLE_R.contains(&c.radius));
                }
            }
        }
    }
}

// =============================================================
// Placement invariants
// =============================================================

#[test]
fn no_pairwise_overlap_across_many_boards() {
    for seed in 0..1000 {
        let set = generate_seeded(seed);
        for (i, a) in set.iter().enumerate() {
            for b in &set[i + 1..] {
                assert!(!a.overlaps(*b), "seed {seed}: {a:?} overlaps {b:?}");
            }
        }
    }
}

#[test]
fn markers_stay_clear_across_many_boards() {
    for seed in 0..1000 {
        for ob in generate_seeded(seed) {
            assert!(
                !ob.overlaps_disk(START, START_RADIUS + SAFETY_MARGIN),
                "seed {seed}: {ob:?} crowds the start marker"
            );
            assert!(
                !ob.overlaps_disk(GOAL, GOAL_RADIUS + SAFETY_MARGIN),
                "seed {seed}: {ob:?} crowds the goal marker"
            );
        }
    }
}

// =============================================================
// Determinism
// =============================================================

#[test]
fn same_seed_reproduces_the_same_board() {
    assert_eq!(generate_seeded(42), generate_seeded(42));
}

#[test]
fn different_seeds_produce_different_boards() {
    assert_ne!(generate_seeded(1), generate_seeded(2));
}

// =============================================================
// Attempt budget
// =============================================================

#[test]
fn zero_budget_reports_exhaustion() {
    let mut rng = SmallRng::seed_from_u64(9);
    let err = generate_with_budget(&mut rng, 0).unwrap_err();
    let PlacementError::Exhausted { shape, attempts } = err;
    assert_eq!(shape, ShapeKind::Rect);
    assert_eq!(attempts, 0);
}

#[test]
fn exhaustion_message_names_the_shape() {
    let mut rng = SmallRng::seed_from_u64(9);
    let err = generate_with_budget(&mut rng, 0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "no admissible rectangle placement within 0 attempts"
    );
}

#[test]
fn default_budget_succeeds() {
    let mut rng = SmallRng::seed_from_u64(9);
    assert!(generate_with_budget(&mut rng, MAX_ATTEMPTS).is_ok());
}
