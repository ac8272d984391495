//! Icon pool construction
//!
//! The pool is rebuilt wholesale whenever modality or container size changes;
//! there is no incremental patching and no identity continuity across
//! rebuilds. A rebuild on a breakpoint crossing reads as a visual reset.

use rand::Rng;

use super::placement::scatter_point;
use super::state::{CatalogItem, Icon, Modality};
use super::zone::{ContainerBounds, ExclusionZone};
use crate::consts::PHASE_STAGGER;
use crate::tuning::Tuning;

/// Build a fresh icon pool for the given modality and bounds.
///
/// Count is the modality cap bounded by the catalog length. Catalog slots are
/// assigned cyclically so a short catalog repeats rather than leaving icons
/// without an item. Each icon starts at its home position.
pub fn build_pool(
    catalog: &[CatalogItem],
    modality: Modality,
    bounds: ContainerBounds,
    zones: &[ExclusionZone],
    tuning: &Tuning,
    rng: &mut impl Rng,
) -> Vec<Icon> {
    if catalog.is_empty() {
        return Vec::new();
    }

    let count = modality.max_icons().min(catalog.len());
    let (scale_min, scale_max) = modality.scale_range();

    (0..count)
        .map(|i| {
            let home = scatter_point(
                bounds,
                zones,
                tuning.edge_padding,
                tuning.placement_attempts,
                rng,
            );
            Icon {
                id: i as u32,
                catalog_index: i % catalog.len(),
                home,
                pos: home,
                scale: rng.random_range(scale_min..=scale_max),
                rotation: rng.random_range(0.0..360.0),
                phase_offset: rng.random_range(0.0..PHASE_STAGGER),
            }
        })
        .collect()
}
