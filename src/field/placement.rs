//! Rest-point placement
//!
//! Rejection sampling with a hard attempt budget. Placing an icon somewhere is
//! always better than placing it nowhere, so when the budget runs out the last
//! sample wins even if it overlaps a zone.

use glam::Vec2;
use rand::Rng;

use super::zone::{ContainerBounds, ExclusionZone, in_any_zone};

/// Sample a rest point inside the padded container, avoiding exclusion zones.
///
/// Samples are uniform over the padded interior. Returns the first sample that
/// clears every zone, or the last sample once `max_attempts` is exhausted;
/// callers never see a failure. Deterministic given the injected RNG.
pub fn scatter_point(
    bounds: ContainerBounds,
    zones: &[ExclusionZone],
    padding: f32,
    max_attempts: u32,
    rng: &mut impl Rng,
) -> Vec2 {
    // Containers smaller than twice the padding collapse to a single coordinate
    let max_x = (bounds.width - padding).max(padding);
    let max_y = (bounds.height - padding).max(padding);

    let mut candidate = Vec2::new(padding, padding);
    for _ in 0..max_attempts {
        candidate = Vec2::new(
            rng.random_range(padding..=max_x),
            rng.random_range(padding..=max_y),
        );
        if !in_any_zone(candidate, zones, bounds) {
            return candidate;
        }
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const BOUNDS: ContainerBounds = ContainerBounds {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn test_placements_avoid_center_zone() {
        // Center 60% x 40% zone, padding 80: every placement within the
        // attempt budget must land outside the zone
        let zones = [ExclusionZone::new(0.2, 0.3, 0.6, 0.4)];
        let mut rng = Pcg32::seed_from_u64(1);

        for _ in 0..100 {
            let p = scatter_point(BOUNDS, &zones, 80.0, 50, &mut rng);
            assert!(!in_any_zone(p, &zones, BOUNDS), "placement {p:?} inside zone");
        }
    }

    #[test]
    fn test_saturated_zones_still_terminate() {
        // Zone covers the whole container: no valid sample exists, the last
        // candidate is accepted anyway
        let zones = [ExclusionZone::new(0.0, 0.0, 1.0, 1.0)];
        let mut rng = Pcg32::seed_from_u64(2);

        let p = scatter_point(BOUNDS, &zones, 80.0, 50, &mut rng);
        assert!(p.x >= 80.0 && p.x <= 720.0);
        assert!(p.y >= 80.0 && p.y <= 520.0);
        assert!(in_any_zone(p, &zones, BOUNDS));
    }

    #[test]
    fn test_deterministic_given_seed() {
        let zones = [ExclusionZone::new(0.2, 0.3, 0.6, 0.4)];
        let mut rng1 = Pcg32::seed_from_u64(99);
        let mut rng2 = Pcg32::seed_from_u64(99);

        for _ in 0..20 {
            let a = scatter_point(BOUNDS, &zones, 80.0, 50, &mut rng1);
            let b = scatter_point(BOUNDS, &zones, 80.0, 50, &mut rng2);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_degenerate_container() {
        // Padding exceeds half the container size in both axes
        let bounds = ContainerBounds::new(100.0, 120.0);
        let mut rng = Pcg32::seed_from_u64(3);
        let p = scatter_point(bounds, &[], 80.0, 50, &mut rng);
        assert_eq!(p, Vec2::new(80.0, 80.0));
    }

    proptest! {
        #[test]
        fn placement_stays_in_padded_bounds(seed in any::<u64>()) {
            let zones = [ExclusionZone::new(0.2, 0.3, 0.6, 0.4)];
            let mut rng = Pcg32::seed_from_u64(seed);
            let p = scatter_point(BOUNDS, &zones, 80.0, 50, &mut rng);
            prop_assert!(p.x >= 80.0 && p.x <= 720.0);
            prop_assert!(p.y >= 80.0 && p.y <= 520.0);
        }
    }
}
