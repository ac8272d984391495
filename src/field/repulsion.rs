//! Flee/return motion step
//!
//! Pure per-icon update; the caller commits the returned point. Fleeing pushes
//! directly away from the pointer with intensity growing as the pointer closes
//! in; everything else eases back toward home exponentially.
//!
//! Zone escape is two-tier: a push that lands inside a protected zone is
//! retried once at double intensity along the same line, and if that is still
//! zoned the icon snaps to its home. The icon must escape the pointer, but it
//! must never come to rest over protected content.

use glam::Vec2;

use super::pointer::PointerState;
use super::state::Icon;
use super::zone::{ContainerBounds, ExclusionZone, clamp_to_padded, in_any_zone};
use crate::tuning::Tuning;

/// Compute the icon's next position for this frame.
pub fn step(
    icon: &Icon,
    pointer: PointerState,
    bounds: ContainerBounds,
    zones: &[ExclusionZone],
    tuning: &Tuning,
) -> Vec2 {
    let target = match pointer {
        PointerState::Active(p) => p,
        PointerState::Inactive => return ease_home(icon, tuning.return_factor),
    };

    let offset = icon.pos - target;
    let dist = offset.length();
    if dist >= tuning.repel_radius {
        return ease_home(icon, tuning.return_factor);
    }

    // Coincident pointer: the unit vector is undefined, so escape along a
    // fixed axis at full intensity instead of dividing by zero
    let dir = if dist <= f32::EPSILON {
        Vec2::X
    } else {
        offset / dist
    };
    let intensity = (tuning.repel_radius - dist) * tuning.repel_strength;

    let pushed = clamp_to_padded(icon.pos + dir * intensity, bounds, tuning.edge_padding);
    if !in_any_zone(pushed, zones, bounds) {
        return pushed;
    }

    let boosted = clamp_to_padded(
        icon.pos + dir * intensity * tuning.zone_escape_boost,
        bounds,
        tuning.edge_padding,
    );
    if !in_any_zone(boosted, zones, bounds) {
        return boosted;
    }
    icon.home
}

/// Exponential ease toward the rest position; converges without overshoot
fn ease_home(icon: &Icon, factor: f32) -> Vec2 {
    icon.pos + (icon.home - icon.pos) * factor
}
