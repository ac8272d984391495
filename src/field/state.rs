//! Field state and core layout types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::zone::{ContainerBounds, ExclusionZone};
use crate::consts::*;

/// One display item from the host catalog
///
/// Opaque to the engine beyond cyclic assignment; showing `fallback_glyph`
/// when the image is missing or fails to load is the renderer's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image_ref: Option<String>,
    pub fallback_glyph: String,
}

/// Behavior mode derived from viewport width and pointer capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modality {
    /// Fine pointer, wide viewport: full pool, pointer avoidance active
    Desktop,
    /// Coarse pointer or narrow viewport: smaller pool, bob animation only
    Touch,
}

impl Modality {
    /// Derive the mode from the latest capability signals
    pub fn derive(viewport_width: f32, fine_pointer: bool, breakpoint: f32) -> Self {
        if !fine_pointer || viewport_width < breakpoint {
            Modality::Touch
        } else {
            Modality::Desktop
        }
    }

    /// Icon cap for this mode
    pub fn max_icons(self) -> usize {
        match self {
            Modality::Desktop => DESKTOP_MAX_ICONS,
            Modality::Touch => TOUCH_MAX_ICONS,
        }
    }

    /// Cosmetic scale range for this mode
    pub fn scale_range(self) -> (f32, f32) {
        match self {
            Modality::Desktop => DESKTOP_SCALE,
            Modality::Touch => TOUCH_SCALE,
        }
    }

    /// Whether flee-on-hover runs in this mode
    pub fn pointer_driven(self) -> bool {
        matches!(self, Modality::Desktop)
    }
}

/// A floating icon entity
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    pub id: u32,
    /// Index into the host catalog (assigned cyclically at pool build)
    pub catalog_index: usize,
    /// Rest position; fixed until the pool is rebuilt
    pub home: Vec2,
    /// Live position, rewritten every frame; always inside the padded bounds
    pub pos: Vec2,
    pub scale: f32,
    /// Degrees
    pub rotation: f32,
    /// Animation stagger in seconds
    pub phase_offset: f32,
}

/// RNG state wrapper; each pool generation gets its own stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngState {
    pub seed: u64,
    pub generation: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            generation: 0,
        }
    }

    /// RNG for the current generation
    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed ^ self.generation)
    }

    /// Advance to the next pool generation
    pub fn next_generation(&mut self) {
        self.generation += 1;
    }
}

/// Complete layout state (deterministic given seed and input events)
#[derive(Debug, Clone)]
pub struct FieldState {
    /// RNG state for pool builds
    pub rng_state: RngState,
    /// Current behavior mode
    pub modality: Modality,
    /// Container size the pool was laid out against
    pub bounds: ContainerBounds,
    /// Protected content regions, fractional coordinates
    pub zones: Vec<ExclusionZone>,
    /// Live icons, iterated in pool order
    pub icons: Vec<Icon>,
    /// Seconds since the engine started; drives the touch bob
    pub elapsed: f32,
}

impl FieldState {
    pub fn new(seed: u64, zones: Vec<ExclusionZone>) -> Self {
        Self {
            rng_state: RngState::new(seed),
            modality: Modality::Desktop,
            bounds: ContainerBounds::new(0.0, 0.0),
            zones,
            icons: Vec::new(),
            elapsed: 0.0,
        }
    }
}
